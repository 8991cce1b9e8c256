use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Color, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub hand_size: usize,
}

impl GameSettings {
    pub fn new(num_players: usize, hand_size: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 4",
            ));
        }
        if hand_size == 0 {
            return Err(GameError::InvalidConfiguration("hand size must be positive"));
        }
        Ok(Self {
            num_players,
            hand_size,
        })
    }
}

/// Order in which seats take turns.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Seat reached by moving one step from `from` around a table of `seats`.
    pub fn next_seat(self, from: PlayerId, seats: usize) -> PlayerId {
        (from as isize + self.step()).rem_euclid(seats as isize) as usize
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
    /// Neither the deck nor the discard pile could supply a required draw.
    Exhausted,
}

/// Current phase of the active turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingDecision,
    GameOver,
}

/// Something that happened while an action was applied, in order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnEvent {
    Drew { player: PlayerId, card: Card },
    Played { player: PlayerId, card: Card },
    Reshuffled { deck_size: usize },
    Skipped { player: PlayerId },
    Reversed { direction: Direction },
    ForcedDraw { player: PlayerId, count: usize },
    ColorChosen { player: PlayerId, color: Color },
    Won { player: PlayerId },
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub automated: bool,
    pub hand_size: usize,
    pub is_current: bool,
    pub has_won: bool,
}

/// Game state snapshot for renderers and bots.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub active_color: Color,
    pub top_card: Card,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_full_circle_returns_to_start() {
        for seats in MIN_PLAYERS..=MAX_PLAYERS {
            for start in 0..seats {
                let mut forward = start;
                let mut backward = start;
                let mut forward_seq = Vec::new();
                let mut backward_seq = Vec::new();
                for _ in 0..seats {
                    forward = Direction::Clockwise.next_seat(forward, seats);
                    backward = Direction::CounterClockwise.next_seat(backward, seats);
                    forward_seq.push(forward);
                    backward_seq.push(backward);
                }
                assert_eq!(forward, start);
                assert_eq!(backward, start);
                // Counter-clockwise visits seats in the mirrored order.
                let mut mirrored = forward_seq[..seats - 1].to_vec();
                mirrored.reverse();
                assert_eq!(&backward_seq[..seats - 1], mirrored.as_slice());
            }
        }
    }

    #[test]
    fn counter_clockwise_wraps_below_zero() {
        assert_eq!(Direction::CounterClockwise.next_seat(0, 4), 3);
        assert_eq!(Direction::Clockwise.next_seat(3, 4), 0);
        assert_eq!(Direction::Clockwise.reversed(), Direction::CounterClockwise);
    }

    #[test]
    fn settings_reject_unsupported_tables() {
        assert!(GameSettings::new(1, 7).is_err());
        assert!(GameSettings::new(5, 7).is_err());
        assert!(GameSettings::new(4, 0).is_err());
        assert!(GameSettings::new(4, 7).is_ok());
    }
}

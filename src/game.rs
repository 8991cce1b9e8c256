use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::action::{Action, PlayerId};
use crate::card::{Card, Color, HAND_SIZE, MAX_NUMBER, full_deck, shuffle_deck};
use crate::error::{GameError, InvalidSelection};
use crate::hand::Hand;
use crate::state::{
    Direction, GameSettings, GameStateView, GameStatus, PlayerPublicState, TurnEvent, TurnPhase,
};

const DEFAULT_SEED: u64 = 0x0A0B_5EED_0A0B_5EED;

/// A seat at the table: who sits there and whether the Move Policy drives it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    pub automated: bool,
}

impl Seat {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automated: false,
        }
    }

    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automated: true,
        }
    }
}

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub seats: Vec<Seat>,
    pub seed: u64,
    pub hand_size: usize,
}

impl GameConfig {
    pub fn new(seats: Vec<Seat>, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(seats.len(), HAND_SIZE)?;
        if seats.iter().any(|seat| seat.name.trim().is_empty()) {
            return Err(GameError::InvalidConfiguration("seat names must not be empty"));
        }
        Ok(Self {
            seats,
            seed,
            hand_size: HAND_SIZE,
        })
    }

    /// The classic table: one human followed by three automated opponents.
    pub fn standard(human_name: impl Into<String>, seed: u64) -> Result<Self, GameError> {
        Self::new(
            vec![
                Seat::human(human_name),
                Seat::automated("Alice"),
                Seat::automated("Bob"),
                Seat::automated("Charlie"),
            ],
            seed,
        )
    }
}

/// Builder that enables deterministic deck and random source injection for tests.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
    rng: Option<Box<dyn RngCore>>,
}

impl GameBuilder {
    pub fn new(seats: Vec<Seat>) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(seats, DEFAULT_SEED)?,
            deck: None,
            rng: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use `deck` as the draw stack instead of a shuffled standard deck.
    /// The last element is the top of the stack. Number cards above 9 are
    /// rejected by `build`.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Replace the seeded generator. It drives both the initial shuffle of the
    /// standard deck (skipped when `with_deck` supplies one) and every discard
    /// reshuffle.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Override the number of cards dealt to each player (7 by default).
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// A player and the hand they own for the duration of the game.
#[derive(Clone, Debug)]
pub struct Participant {
    name: String,
    automated: bool,
    hand: Hand,
}

impl Participant {
    fn new(seat: Seat) -> Self {
        Self {
            name: seat.name,
            automated: seat.automated,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_automated(&self) -> bool {
        self.automated
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}

/// Discard pile that always has a top card once the game has started.
#[derive(Clone, Debug)]
struct DiscardPile {
    top: Card,
    below: Vec<Card>,
}

impl DiscardPile {
    fn new(top: Card) -> Self {
        Self {
            top,
            below: Vec::new(),
        }
    }

    fn push(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.top, card);
        self.below.push(previous);
    }

    fn len(&self) -> usize {
        self.below.len() + 1
    }

    fn take_below(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.below)
    }

    fn to_vec(&self) -> Vec<Card> {
        let mut cards = self.below.clone();
        cards.push(self.top);
        cards
    }
}

/// Core UNO rules engine.
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    turn_phase: TurnPhase,
    current_player: PlayerId,
    direction: Direction,
    active_color: Color,
    players: Vec<Participant>,
    draw_pile: Vec<Card>,
    discard_pile: DiscardPile,
    rng: Box<dyn RngCore>,
}

impl Game {
    pub fn builder(seats: Vec<Seat>) -> Result<GameBuilder, GameError> {
        GameBuilder::new(seats)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder {
            config,
            deck: None,
            rng: None,
        }
        .build()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn turn_phase(&self) -> TurnPhase {
        self.turn_phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn top_card(&self) -> Card {
        self.discard_pile.top
    }

    /// Remaining draw stack; the last element is drawn next.
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    /// Discard pile from bottom to top.
    pub fn discard_pile(&self) -> Vec<Card> {
        self.discard_pile.to_vec()
    }

    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    pub fn participant(&self, player: PlayerId) -> Result<&Participant, GameError> {
        self.players
            .get(player)
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.status, GameStatus::Ongoing)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// True iff the player's hand is empty.
    pub fn check_win(&self, player: PlayerId) -> Result<bool, GameError> {
        Ok(self.participant(player)?.hand.is_empty())
    }

    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        let viewer = self.participant(perspective)?;
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(idx, player)| PlayerPublicState {
                id: idx,
                name: player.name.clone(),
                automated: player.automated,
                hand_size: player.hand.len(),
                is_current: idx == self.current_player,
                has_won: self.winner() == Some(idx),
            })
            .collect();

        Ok(GameStateView {
            settings: self.settings,
            phase: self.turn_phase,
            status: self.status,
            self_player: perspective,
            current_player: self.current_player,
            direction: self.direction,
            active_color: self.active_color,
            top_card: self.discard_pile.top,
            draw_pile_count: self.draw_pile.len(),
            discard_pile_count: self.discard_pile.len(),
            players,
            hand: viewer.hand.cards().to_vec(),
        })
    }

    /// Hand indices the player could legally play right now.
    pub fn legal_play_indices(&self, player: PlayerId) -> Result<Vec<usize>, GameError> {
        Ok(self
            .participant(player)?
            .hand
            .legal_play_indices(&self.discard_pile.top, self.active_color))
    }

    /// Every action the current player may submit. Drawing is always allowed;
    /// wild cards expand into one play per declarable color.
    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action>, GameError> {
        self.participant(player)?;
        if self.is_finished() {
            return Ok(Vec::new());
        }
        self.ensure_turn(player)?;
        let hand = &self.players[player].hand;
        let mut actions = Vec::new();
        for hand_index in hand.legal_play_indices(&self.discard_pile.top, self.active_color) {
            let Some(card) = hand.get(hand_index) else {
                continue;
            };
            if card.is_wild() {
                for color in Color::ALL {
                    actions.push(Action::Play {
                        hand_index,
                        color: Some(color),
                    });
                }
            } else {
                actions.push(Action::Play {
                    hand_index,
                    color: None,
                });
            }
        }
        actions.push(Action::Draw);
        Ok(actions)
    }

    /// Validates and applies a player's decision, returning what happened in order.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<Vec<TurnEvent>, GameError> {
        self.ensure_turn(player)?;
        let mut events = Vec::new();

        match action {
            Action::Draw => {
                if self.drawable() == 0 {
                    return Err(self.exhaust());
                }
                let card = self.draw_card(player, &mut events)?;
                events.push(TurnEvent::Drew { player, card });
                self.advance_turn();
            }
            Action::Play { hand_index, color } => {
                let card = self.validate_play(player, hand_index, color)?;
                // The played card lands on the discard pile, so everything currently
                // in the discard pile becomes recyclable.
                if card.forced_draw() > self.draw_pile.len() + self.discard_pile.len() {
                    return Err(self.exhaust());
                }
                let card = self.play_card(player, hand_index, &mut events)?;
                let advances = self.resolve_effect(card, player, color, &mut events)?;
                if self.check_win(player)? {
                    info!(player, name = %self.players[player].name, "game won");
                    self.status = GameStatus::Finished { winner: player };
                    self.turn_phase = TurnPhase::GameOver;
                    events.push(TurnEvent::Won { player });
                } else {
                    for _ in 0..advances {
                        self.advance_turn();
                    }
                }
            }
        }

        Ok(events)
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck, rng } = builder;
        let settings = GameSettings::new(config.seats.len(), config.hand_size)?;
        let mut rng =
            rng.unwrap_or_else(|| Box::new(StdRng::seed_from_u64(config.seed)) as Box<dyn RngCore>);
        let mut deck = if let Some(deck) = deck {
            if deck.iter().any(|card| card.number().is_some_and(|n| n > MAX_NUMBER)) {
                return Err(GameError::InvalidConfiguration(
                    "number cards must be between 0 and 9",
                ));
            }
            deck
        } else {
            let mut deck = full_deck();
            shuffle_deck(&mut deck, rng.as_mut());
            deck
        };

        let mut players: Vec<Participant> =
            config.seats.into_iter().map(Participant::new).collect();
        for _ in 0..settings.hand_size {
            for player in players.iter_mut() {
                let card = deck.pop().ok_or(GameError::InvalidConfiguration(
                    "deck exhausted while dealing hands",
                ))?;
                player.hand.add(card);
            }
        }

        // Non-number cards go back under the stack until a number card turns up.
        let mut attempts = deck.len();
        let (starter, active_color) = loop {
            if attempts == 0 {
                return Err(GameError::InvalidConfiguration(
                    "deck has no number card to start the discard pile",
                ));
            }
            attempts -= 1;
            let card = deck.pop().ok_or(GameError::InvalidConfiguration(
                "deck exhausted while turning the starting card",
            ))?;
            if let Card::Number(color, _) = card {
                break (card, color);
            }
            deck.insert(0, card);
        };

        info!(
            players = settings.num_players,
            hand_size = settings.hand_size,
            starter = %starter,
            "game started"
        );

        Ok(Game {
            settings,
            status: GameStatus::Ongoing,
            turn_phase: TurnPhase::AwaitingDecision,
            current_player: 0,
            direction: Direction::Clockwise,
            active_color,
            players,
            draw_pile: deck,
            discard_pile: DiscardPile::new(starter),
            rng,
        })
    }

    fn ensure_turn(&self, player: PlayerId) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayer(player));
        }
        if player != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }
        Ok(())
    }

    fn validate_play(
        &self,
        player: PlayerId,
        hand_index: usize,
        color: Option<Color>,
    ) -> Result<Card, GameError> {
        let hand = &self.players[player].hand;
        if hand.is_empty() {
            return Err(GameError::EmptyHandOperation);
        }
        let card = *hand
            .get(hand_index)
            .ok_or(InvalidSelection::HandIndex(hand_index))?;
        if !card.can_play_on(&self.discard_pile.top, self.active_color) {
            return Err(InvalidSelection::IllegalCard { index: hand_index }.into());
        }
        match (card.is_wild(), color) {
            (true, None) => Err(InvalidSelection::ColorRequired.into()),
            (false, Some(_)) => Err(InvalidSelection::UnexpectedColor.into()),
            _ => Ok(card),
        }
    }

    fn play_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        events: &mut Vec<TurnEvent>,
    ) -> Result<Card, GameError> {
        let card = self.players[player].hand.remove_at(hand_index)?;
        self.discard_pile.push(card);
        if let Some(color) = card.color() {
            self.active_color = color;
        }
        debug!(player, card = %card, remaining = self.players[player].hand.len(), "card played");
        events.push(TurnEvent::Played { player, card });
        Ok(card)
    }

    /// Applies the played card's effect and returns how many times the turn must advance.
    fn resolve_effect(
        &mut self,
        card: Card,
        player: PlayerId,
        color: Option<Color>,
        events: &mut Vec<TurnEvent>,
    ) -> Result<usize, GameError> {
        let next = self.next_player();
        let advances = match card {
            Card::Number(..) | Card::Wild => 1,
            Card::Skip(_) => {
                debug!(skipped = next, "player skipped");
                events.push(TurnEvent::Skipped { player: next });
                2
            }
            Card::Reverse(_) => {
                self.direction = self.direction.reversed();
                debug!(direction = ?self.direction, "direction reversed");
                events.push(TurnEvent::Reversed {
                    direction: self.direction,
                });
                1
            }
            Card::DrawTwo(_) | Card::WildDrawFour => {
                let count = card.forced_draw();
                for _ in 0..count {
                    self.draw_card(next, events)?;
                }
                debug!(target_player = next, count, "forced draw");
                events.push(TurnEvent::ForcedDraw {
                    player: next,
                    count,
                });
                events.push(TurnEvent::Skipped { player: next });
                2
            }
        };

        if card.is_wild() {
            let color = color.ok_or(InvalidSelection::ColorRequired)?;
            self.active_color = color;
            debug!(player, color = %color, "color chosen");
            events.push(TurnEvent::ColorChosen { player, color });
        }

        Ok(advances)
    }

    fn next_player(&self) -> PlayerId {
        self.direction
            .next_seat(self.current_player, self.players.len())
    }

    fn advance_turn(&mut self) {
        if self.is_finished() {
            self.turn_phase = TurnPhase::GameOver;
            return;
        }
        self.current_player = self.next_player();
        self.turn_phase = TurnPhase::AwaitingDecision;
    }

    /// Cards obtainable by draws: the deck plus everything under the top discard.
    fn drawable(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() - 1
    }

    fn draw_card(
        &mut self,
        player: PlayerId,
        events: &mut Vec<TurnEvent>,
    ) -> Result<Card, GameError> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discard(events)?;
        }
        let card = self.draw_pile.pop().ok_or(GameError::DeckExhausted)?;
        self.players[player].hand.add(card);
        debug!(player, hand_size = self.players[player].hand.len(), "card drawn");
        Ok(card)
    }

    fn reshuffle_discard(&mut self, events: &mut Vec<TurnEvent>) -> Result<(), GameError> {
        let mut recycled = self.discard_pile.take_below();
        if recycled.is_empty() {
            return Err(GameError::DeckExhausted);
        }
        shuffle_deck(&mut recycled, self.rng.as_mut());
        self.draw_pile.append(&mut recycled);
        warn!(
            deck_size = self.draw_pile.len(),
            top = %self.discard_pile.top,
            "draw pile empty, discard pile reshuffled into it"
        );
        events.push(TurnEvent::Reshuffled {
            deck_size: self.draw_pile.len(),
        });
        Ok(())
    }

    fn exhaust(&mut self) -> GameError {
        info!(
            draw_pile = self.draw_pile.len(),
            discard_pile = self.discard_pile.len(),
            "no cards left to draw, game ends without a winner"
        );
        self.status = GameStatus::Exhausted;
        self.turn_phase = TurnPhase::GameOver;
        GameError::DeckExhausted
    }
}

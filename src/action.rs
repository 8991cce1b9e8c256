use serde::{Deserialize, Serialize};

use crate::card::Color;

/// Zero-based seat index of a player within the game.
pub type PlayerId = usize;

/// Decision a player submits on their turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `hand_index`. Wild cards must carry the declared `color`,
    /// colored cards must not.
    Play {
        hand_index: usize,
        color: Option<Color>,
    },
    /// Draw one card from the deck, ending the turn.
    Draw,
}

impl Action {
    /// Returns the hand index if the action is a play.
    pub fn hand_index(&self) -> Option<usize> {
        match self {
            Action::Play { hand_index, .. } => Some(*hand_index),
            Action::Draw => None,
        }
    }
}

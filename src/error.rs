use thiserror::Error;

use crate::action::PlayerId;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] InvalidSelection),
    #[error("no cards left to draw in the deck or the discard pile")]
    DeckExhausted,
    #[error("attempted to remove a card from an empty hand")]
    EmptyHandOperation,
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of rejected player selections. Recoverable by asking again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("card at hand index {index} cannot be played on the current top card")]
    IllegalCard { index: usize },
    #[error("a color must be chosen when playing a wild card")]
    ColorRequired,
    #[error("a color can only be chosen when playing a wild card")]
    UnexpectedColor,
}

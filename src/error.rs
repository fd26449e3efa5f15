use thiserror::Error;

use crate::action::PlayerId;
use crate::card::Card;

/// Errors that can occur when manipulating the game state.
///
/// Every variant is recoverable: a rejected call leaves the game untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("player count {0} is outside 2..=4")]
    InvalidPlayerCount(usize),
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("it's not your turn")]
    NotYourTurn,
    #[error("{card} cannot be played on {top}")]
    IllegalCard { card: Card, top: Card },
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("the deck is empty")]
    EmptyDeck,
    #[error("invalid color choice '{0}', expected Red, Blue, Green or Yellow")]
    InvalidColorChoice(String),
    #[error("a color must be chosen for the wild card first")]
    ColorChoicePending,
    #[error("no wild card is waiting for a color")]
    NoColorChoicePending,
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when constructing or driving a game.
///
/// During normal play no error is expected; every variant indicates a
/// misconfiguration or a caller bug and should propagate, not be retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("card {0} is not part of the Flip 7 vocabulary")]
    InvalidCard(Card),
    #[error("draw attempted on an empty deck")]
    EmptyDeck,
}

/// A card token outside the known vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized card '{0}'")]
pub struct ParseCardError(pub String);

/// A drawing- or targeting-strategy token outside the known vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized strategy '{0}'")]
pub struct ParseStrategyError(pub String);

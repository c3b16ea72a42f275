//! Error types for deck and round operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been drawn.
    #[error("no cards left in the deck")]
    Exhausted,
    /// A stacked draw order named the same card twice.
    #[error("{0} appears more than once in the draw order")]
    DuplicateCard(Card),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than four cards are left to deal.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Drawing from the deck failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during the dealer's turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for the dealer's turn or showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// Drawing from the deck failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that end a console session or void one of its rounds.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The opening deal failed.
    #[error("could not deal: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer's turn or the showdown failed.
    #[error("dealer turn failed: {0}")]
    Showdown(#[from] ShowdownError),
}

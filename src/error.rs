//! Error types for shoe and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised by the shoe.
///
/// `Empty` is an invariant violation: the engine reshuffles before fewer
/// than one deck remains, so a round should never run the shoe dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
    /// The card is not among the undealt cards.
    #[error("card {0} is not in the undealt pile")]
    CardUnavailable(Card),
}

/// Why an intent was ignored.
///
/// An ignored intent leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The intent is not legal in the current game state.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The active hand is already completed.
    #[error("hand is already completed")]
    HandCompleted,
    /// The active hand has already taken a card.
    #[error("hand has already acted")]
    AlreadyActed,
    /// The active hand is not a two-card pair.
    #[error("hand is not a pair")]
    NotAPair,
    /// The hand limit has been reached.
    #[error("maximum number of hands reached")]
    MaxHandsReached,
    /// Not enough balance for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// Bet amount is zero or exceeds the balance.
    #[error("invalid bet amount")]
    InvalidBet,
    /// Deck count is outside the supported range.
    #[error("invalid deck count")]
    InvalidDeckCount,
}

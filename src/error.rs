//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while configuring a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigureError {
    /// Player count outside the supported range.
    #[error("number of players must be between 1 and 4, got {0}")]
    InvalidPlayerCount(usize),
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// No player is waiting to bet.
    #[error("not accepting bets right now")]
    NotAcceptingBets,
    /// Bet input is not a whole number.
    #[error("bet is not a number")]
    NotANumber,
    /// Bet amount is zero or negative.
    #[error("bet must be a positive number of tokens")]
    NotPositive,
    /// Bet is larger than the player's balance.
    #[error("bet exceeds balance of {balance} tokens")]
    ExceedsBalance {
        /// The acting player's balance.
        balance: usize,
    },
    /// The deck ran out while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during hit and stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The deck ran out while the player or dealer drew.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

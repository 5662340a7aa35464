//! Game state types.

use crate::card::Card;
use crate::result::RoundResult;

/// Where the table is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No players seated yet.
    Unconfigured,
    /// Waiting for the given seat to bet. Seat 0 opens a new round.
    AwaitingBet(usize),
    /// The given seat may hit or stand.
    PlayerTurn(usize),
    /// Dealer plays out their hand.
    DealerTurn,
    /// Bets are being paid out.
    Settlement,
    /// A player is out of tokens; the table resets after the delay.
    GameOver,
}

impl Phase {
    /// Returns the seat whose input is expected, if any.
    #[must_use]
    pub const fn seat(self) -> Option<usize> {
        match self {
            Self::AwaitingBet(index) | Self::PlayerTurn(index) => Some(index),
            _ => None,
        }
    }
}

/// What a hit or stand led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// No turn was in progress, or the acting player was already done.
    Ignored,
    /// The player drew this card and may act again.
    Continue(Card),
    /// The turn passed to the next seat, which must now bet.
    NextPlayer(usize),
    /// Everyone acted; the dealer played and bets were settled.
    RoundOver(RoundResult),
}

//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of a single player's hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player busted and loses the bet.
    Bust,
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Equal totals; the bet is returned.
    Push,
    /// Dealer has the higher total.
    Lose,
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat index, starting at 0.
    pub player_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this round.
    pub bet: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// Net token change (positive = profit, negative = loss).
    pub net: isize,
    /// Balance after settlement.
    pub tokens: usize,
    /// Human-readable outcome line.
    pub message: String,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether a player ran out of tokens and the table must reset.
    pub game_over: bool,
}

impl RoundResult {
    /// Returns the outcome messages in seat order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.players.iter().map(|p| p.message.clone()).collect()
    }
}

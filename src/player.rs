//! Seated player state.

use crate::hand::Hand;

/// A player at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    tokens: usize,
    hand: Hand,
    bet: usize,
    active: bool,
    done: bool,
}

impl Player {
    /// Creates a player holding `tokens`.
    #[must_use]
    pub const fn new(tokens: usize) -> Self {
        Self {
            tokens,
            hand: Hand::new(),
            bet: 0,
            active: false,
            done: false,
        }
    }

    /// Returns the token balance.
    #[must_use]
    pub const fn tokens(&self) -> usize {
        self.tokens
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the bet placed this round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether it is this player's turn.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether the player has finished acting this round.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns whether the player is out of tokens.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.tokens == 0
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) const fn set_bet(&mut self, bet: usize) {
        self.bet = bet;
    }

    pub(crate) const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) const fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub(crate) const fn win_bet(&mut self) {
        self.tokens += self.bet;
    }

    pub(crate) const fn lose_bet(&mut self) {
        self.tokens = self.tokens.saturating_sub(self.bet);
    }

    /// Clears round state ahead of a new deal.
    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.bet = 0;
        self.active = false;
        self.done = false;
    }
}

//! Table configuration options.

use core::time::Duration;

/// Fewest players a table can seat.
pub const MIN_PLAYERS: usize = 1;

/// Most players a table can seat.
pub const MAX_PLAYERS: usize = 4;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_tokens(20)
///     .with_reset_delay(Duration::from_secs(1));
/// assert_eq!(options.starting_tokens, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Tokens every player starts with, and gets back after a game over.
    pub starting_tokens: usize,
    /// Dealer stops drawing once the total reaches this value.
    pub dealer_stands_at: u8,
    /// How long the host should wait before resetting after a game over.
    pub reset_delay: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_tokens: 10,
            dealer_stands_at: 17,
            reset_delay: Duration::from_millis(2000),
        }
    }
}

impl TableOptions {
    /// Sets the starting token balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_tokens(50);
    /// assert_eq!(options.starting_tokens, 50);
    /// ```
    #[must_use]
    pub const fn with_starting_tokens(mut self, tokens: usize) -> Self {
        self.starting_tokens = tokens;
        self
    }

    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets the delay before the automatic reset after a game over.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_reset_delay(Duration::ZERO);
    /// assert_eq!(options.reset_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }
}

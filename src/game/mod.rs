//! Game session and round flow.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::deck::Deck;
use crate::error::ConfigureError;
use crate::hand::DealerHand;
use crate::options::{MAX_PLAYERS, MIN_PLAYERS, TableOptions};
use crate::player::Player;
use crate::presenter::{HandOwner, NullPresenter, Presenter};
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Phase, TurnOutcome};

/// A blackjack table session: seated players, the dealer, and the round in
/// progress.
///
/// All commands take `&mut self` and finish synchronously. State changes are
/// reported to the [`Presenter`] `P`.
#[derive(Debug)]
pub struct GameSession<P = NullPresenter> {
    options: TableOptions,
    phase: Phase,
    players: Vec<Player>,
    deck: Deck,
    /// Used in place of a shuffled deck at the next round opening.
    prepared_deck: Option<Deck>,
    dealer_hand: DealerHand,
    last_result: Option<RoundResult>,
    rng: ChaCha8Rng,
    presenter: P,
}

impl GameSession<NullPresenter> {
    /// Creates a session that renders nothing.
    ///
    /// ```
    /// use bjtable::{GameSession, Phase, TableOptions};
    ///
    /// let mut session = GameSession::headless(TableOptions::default(), 42);
    /// session.configure(2).unwrap();
    /// assert_eq!(session.phase(), Phase::AwaitingBet(0));
    /// ```
    #[must_use]
    pub fn headless(options: TableOptions, seed: u64) -> Self {
        Self::new(options, seed, NullPresenter)
    }
}

impl<P: Presenter> GameSession<P> {
    /// Creates a new session with the given seed.
    ///
    /// The table has no players until [`configure`](Self::configure) runs.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64, presenter: P) -> Self {
        Self {
            options,
            phase: Phase::Unconfigured,
            players: Vec::new(),
            deck: Deck::new(),
            prepared_deck: None,
            dealer_hand: DealerHand::new(),
            last_result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            presenter,
        }
    }

    /// Seats `num_players` players with fresh token balances.
    ///
    /// Any round in progress is abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigureError::InvalidPlayerCount`] unless the count is
    /// between 1 and 4. The table is left untouched in that case.
    pub fn configure(&mut self, num_players: usize) -> Result<(), ConfigureError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(ConfigureError::InvalidPlayerCount(num_players));
        }

        self.players = (0..num_players)
            .map(|_| Player::new(self.options.starting_tokens))
            .collect();
        self.dealer_hand.clear();
        self.last_result = None;
        self.phase = Phase::AwaitingBet(0);

        info!(
            players = num_players,
            tokens = self.options.starting_tokens,
            "table configured"
        );

        self.presenter.on_players_changed(&self.players, Some(0));
        self.presenter.on_result(&[]);
        self.presenter.on_play_buttons_visible(false);
        self.presenter
            .on_bet_phase(0, self.options.starting_tokens);

        Ok(())
    }

    /// Re-seats everyone with fresh balances after a game over.
    ///
    /// Returns `true` if a reset happened. Calling it again, or outside
    /// [`Phase::GameOver`], does nothing and returns `false`.
    pub fn reset_after_game_over(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }

        info!("resetting table after game over");
        let count = self.players.len();
        self.configure(count).is_ok()
    }

    /// Queues a prepared deck for the next round instead of a shuffled one.
    ///
    /// Useful for replaying a known deal.
    pub fn set_next_deck(&mut self, deck: Deck) {
        self.prepared_deck = Some(deck);
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the seated players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in the given seat.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the seat whose turn it is to hit or stand.
    pub const fn current_player(&self) -> Option<usize> {
        match self.phase {
            Phase::PlayerTurn(index) => Some(index),
            _ => None,
        }
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the number of cards left in this round's deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the most recent settlement, cleared when a new round opens.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the presenter.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the session and returns its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn notify_players(&mut self) {
        let active = self.phase.seat();
        self.presenter.on_players_changed(&self.players, active);
    }

    fn notify_table(&mut self, index: usize) {
        if let Some(player) = self.players.get(index) {
            self.presenter
                .on_hand_changed(HandOwner::Player(index), player.hand().cards(), false);
        }
        self.notify_dealer();
    }

    fn notify_dealer(&mut self) {
        self.presenter.on_hand_changed(
            HandOwner::Dealer,
            self.dealer_hand.cards(),
            self.dealer_hand.is_hole_revealed(),
        );
    }
}

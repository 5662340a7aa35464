//! Notifications sent from the game core to whatever draws the table.
//!
//! Every method has an empty default so a front end only implements what it
//! renders.

extern crate alloc;

use alloc::string::String;
use core::time::Duration;

use crate::card::Card;
use crate::player::Player;

/// Who holds a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOwner {
    /// Seat index, starting at 0.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// Receives state changes from a [`GameSession`](crate::GameSession).
pub trait Presenter {
    /// Balances or the active seat changed.
    fn on_players_changed(&mut self, _players: &[Player], _active: Option<usize>) {}

    /// A hand's visible cards changed.
    ///
    /// For the dealer, only the first card is visible unless `reveal_all`.
    fn on_hand_changed(&mut self, _owner: HandOwner, _cards: &[Card], _reveal_all: bool) {}

    /// Outcome text to show. An empty slice clears it.
    fn on_result(&mut self, _messages: &[String]) {}

    /// The given seat should enter a bet.
    fn on_bet_phase(&mut self, _player_index: usize, _balance: usize) {}

    /// Hit and stand controls should be shown or hidden.
    fn on_play_buttons_visible(&mut self, _visible: bool) {}

    /// A player ran out of tokens. The host should call
    /// [`GameSession::reset_after_game_over`](crate::GameSession::reset_after_game_over)
    /// once `delay` has passed.
    fn on_game_over(&mut self, _delay: Duration) {}
}

/// A presenter that ignores every notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

use alloc::format;
use tracing::debug;

use crate::error::ActionError;
use crate::presenter::{HandOwner, Presenter};

use super::{GameSession, Phase, TurnOutcome};

impl<P: Presenter> GameSession<P> {
    /// Returns the seat allowed to hit or stand right now.
    fn acting_seat(&self) -> Option<usize> {
        let Phase::PlayerTurn(index) = self.phase else {
            return None;
        };
        self.players
            .get(index)
            .filter(|player| !player.is_done())
            .map(|_| index)
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the player's turn at once. Outside a player turn,
    /// or once the player is done, the call is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the player or, after the
    /// last seat, the dealer draws.
    pub fn hit(&mut self) -> Result<TurnOutcome, ActionError> {
        let Some(index) = self.acting_seat() else {
            debug!(phase = ?self.phase, "hit ignored");
            return Ok(TurnOutcome::Ignored);
        };

        let card = self.deck.draw()?;
        let Some(player) = self.players.get_mut(index) else {
            return Ok(TurnOutcome::Ignored);
        };
        player.hand_mut().add_card(card);
        let total = player.hand().value();
        let bust = player.hand().is_bust();
        debug!(seat = index, %card, total, "hit");

        self.presenter.on_hand_changed(
            HandOwner::Player(index),
            player.hand().cards(),
            false,
        );

        if !bust {
            return Ok(TurnOutcome::Continue(card));
        }

        self.presenter.on_play_buttons_visible(false);
        self.presenter
            .on_result(&[format!("Player {} busted!", index + 1)]);
        self.advance_turn(index)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Outside a player turn, or once the player is done, the call is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out during the dealer's turn.
    pub fn stand(&mut self) -> Result<TurnOutcome, ActionError> {
        let Some(index) = self.acting_seat() else {
            debug!(phase = ?self.phase, "stand ignored");
            return Ok(TurnOutcome::Ignored);
        };

        debug!(seat = index, "stand");
        self.presenter.on_play_buttons_visible(false);
        self.advance_turn(index)
    }

    /// Finishes `index`'s turn and hands play to the next seat or the
    /// dealer.
    fn advance_turn(&mut self, index: usize) -> Result<TurnOutcome, ActionError> {
        if let Some(player) = self.players.get_mut(index) {
            player.set_done(true);
            player.set_active(false);
        }

        let next = index + 1;
        if next >= self.players.len() {
            let result = self.finish_round()?;
            return Ok(TurnOutcome::RoundOver(result));
        }

        self.phase = Phase::AwaitingBet(next);
        debug!(seat = next, "awaiting bet");

        let balance = self.players.get(next).map_or(0, crate::Player::tokens);
        self.notify_players();
        self.presenter.on_result(&[]);
        self.presenter
            .on_hand_changed(HandOwner::Player(next), &[], false);
        self.presenter.on_bet_phase(next, balance);
        self.presenter.on_play_buttons_visible(false);

        Ok(TurnOutcome::NextPlayer(next))
    }
}

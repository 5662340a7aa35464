use tracing::{debug, info};

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::{BetError, DeckError};
use crate::presenter::Presenter;

use super::{GameSession, Phase};

/// Cards dealt to a player, and to the dealer, at the start of their hand.
const INITIAL_CARDS: usize = 2;

impl<P: Presenter> GameSession<P> {
    /// Starts a new round: fresh deck, two cards to the dealer, every seat
    /// cleared.
    fn open_round(&mut self) -> Result<(), DeckError> {
        self.deck = match self.prepared_deck.take() {
            Some(deck) => deck,
            None => Deck::shuffled(&mut self.rng),
        };
        self.last_result = None;

        self.dealer_hand.clear();
        for _ in 0..INITIAL_CARDS {
            let card = self.deck.draw()?;
            self.dealer_hand.add_card(card);
        }

        for player in &mut self.players {
            player.reset_for_round();
        }

        info!(
            players = self.players.len(),
            dealer_up = ?self.dealer_hand.up_card(),
            "round opened"
        );
        Ok(())
    }

    /// Places a bet for the seat that is due to bet and deals its hand.
    ///
    /// The first bet of a round (seat 0) also builds and shuffles a fresh
    /// deck and deals the dealer two cards.
    ///
    /// # Errors
    ///
    /// Returns an error if no seat is waiting to bet, the amount is zero or
    /// larger than the player's balance, or the deck cannot cover the deal.
    /// Nothing changes when an error is returned.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        let Phase::AwaitingBet(index) = self.phase else {
            return Err(BetError::NotAcceptingBets);
        };
        let balance = self
            .players
            .get(index)
            .map(crate::Player::tokens)
            .ok_or(BetError::NotAcceptingBets)?;

        if amount == 0 {
            return Err(BetError::NotPositive);
        }
        if amount > balance {
            return Err(BetError::ExceedsBalance { balance });
        }

        let opening = index == 0;
        let available = if opening {
            self.prepared_deck.as_ref().map_or(DECK_SIZE, Deck::len)
        } else {
            self.deck.len()
        };
        let needed = if opening {
            INITIAL_CARDS * 2
        } else {
            INITIAL_CARDS
        };
        if available < needed {
            return Err(DeckError::Empty.into());
        }

        if opening {
            self.open_round()?;
        }

        for _ in 0..INITIAL_CARDS {
            let card = self.deck.draw()?;
            debug!(seat = index, %card, "dealt");
            if let Some(player) = self.players.get_mut(index) {
                player.hand_mut().add_card(card);
            }
        }

        for (seat, player) in self.players.iter_mut().enumerate() {
            player.set_active(seat == index);
            if seat == index {
                player.set_bet(amount);
            }
        }
        self.phase = Phase::PlayerTurn(index);

        info!(seat = index, bet = amount, balance, "bet placed");

        self.notify_players();
        self.notify_table(index);
        self.presenter.on_play_buttons_visible(true);
        self.presenter.on_result(&[]);

        Ok(())
    }

    /// Parses a typed bet and places it.
    ///
    /// ```
    /// use bjtable::{BetError, GameSession, TableOptions};
    ///
    /// let mut session = GameSession::headless(TableOptions::default(), 7);
    /// session.configure(1).unwrap();
    /// assert_eq!(session.place_bet_input("lots"), Err(BetError::NotANumber));
    /// assert_eq!(session.place_bet_input("-2"), Err(BetError::NotPositive));
    /// assert!(session.place_bet_input(" 3 ").is_ok());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotANumber`] for text that is not a whole number,
    /// [`BetError::NotPositive`] for zero or negative amounts, and otherwise
    /// the errors of [`place_bet`](Self::place_bet).
    pub fn place_bet_input(&mut self, input: &str) -> Result<(), BetError> {
        let amount: i64 = input.trim().parse().map_err(|_| BetError::NotANumber)?;
        if amount <= 0 {
            return Err(BetError::NotPositive);
        }
        let amount = usize::try_from(amount).map_err(|_| BetError::NotANumber)?;
        self.place_bet(amount)
    }
}

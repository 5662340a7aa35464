use alloc::format;
use alloc::vec::Vec;
use tracing::{debug, info};

use crate::error::DeckError;
use crate::presenter::Presenter;
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{GameSession, Phase};

impl<P: Presenter> GameSession<P> {
    /// Dealer reveals the hole card and draws until reaching the stand total.
    ///
    /// The dealer always plays, even when every player has busted.
    fn dealer_turn(&mut self) -> Result<(), DeckError> {
        self.phase = Phase::DealerTurn;
        self.dealer_hand.reveal_hole();
        self.notify_dealer();

        while self.dealer_hand.value() < self.options.dealer_stands_at {
            let card = self.deck.draw()?;
            self.dealer_hand.add_card(card);
            debug!(%card, total = self.dealer_hand.value(), "dealer draws");
            self.notify_dealer();
        }

        Ok(())
    }

    /// Pays out or collects every player's bet against the dealer's total.
    fn settle(&mut self) -> RoundResult {
        self.phase = Phase::Settlement;

        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();
        let mut results = Vec::with_capacity(self.players.len());

        for (index, player) in self.players.iter_mut().enumerate() {
            let seat = index + 1;
            let bet = player.bet();
            let player_value = player.hand().value();

            let outcome = if player.hand().is_bust() {
                HandOutcome::Bust
            } else if dealer_bust || player_value > dealer_value {
                HandOutcome::Win
            } else if player_value == dealer_value {
                HandOutcome::Push
            } else {
                HandOutcome::Lose
            };

            #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
            let (net, message) = match outcome {
                HandOutcome::Bust => {
                    player.lose_bet();
                    (
                        -(bet as isize),
                        format!("Player {seat} busted and loses {bet} tokens."),
                    )
                }
                HandOutcome::Win => {
                    player.win_bet();
                    (bet as isize, format!("Player {seat} wins! +{bet} tokens."))
                }
                HandOutcome::Push => (0, format!("Player {seat} draws. Bet returned.")),
                HandOutcome::Lose => {
                    player.lose_bet();
                    (-(bet as isize), format!("Player {seat} loses {bet} tokens."))
                }
            };

            results.push(PlayerResult {
                player_index: index,
                outcome,
                bet,
                player_value,
                net,
                tokens: player.tokens(),
                message,
            });
        }

        let game_over = self.players.iter().any(crate::Player::is_broke);

        RoundResult {
            players: results,
            dealer_value,
            dealer_bust,
            game_over,
        }
    }

    /// Runs the dealer turn and settlement, then moves to the next round or
    /// to game over.
    pub(super) fn finish_round(&mut self) -> Result<RoundResult, DeckError> {
        self.dealer_turn()?;
        let result = self.settle();

        info!(
            dealer = result.dealer_value,
            dealer_bust = result.dealer_bust,
            game_over = result.game_over,
            "round settled"
        );

        self.presenter.on_result(&result.messages());
        self.presenter.on_play_buttons_visible(false);

        if result.game_over {
            self.phase = Phase::GameOver;
            info!(delay = ?self.options.reset_delay, "a player is out of tokens");
            self.notify_players();
            self.presenter.on_game_over(self.options.reset_delay);
        } else {
            self.phase = Phase::AwaitingBet(0);
            let balance = self.players.first().map_or(0, crate::Player::tokens);
            self.notify_players();
            self.presenter.on_bet_phase(0, balance);
        }

        self.last_result = Some(result.clone());
        Ok(result)
    }
}

use bjtable::{
    Card, DealerHand, GameSession, HandOutcome, HandOwner, Phase, Player, Presenter, RoundResult,
    Suit, TableOptions, TurnOutcome,
};
use core::time::Duration;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession<EventLog>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            session: GameSession::new(TableOptions::default(), seed as u64, EventLog::default()),
        }
    }

    pub fn configure(&mut self, num_players: u32) -> Result<(), JsValue> {
        self.session
            .configure(num_players as usize)
            .map_err(js_err)
    }

    pub fn place_bet(&mut self, input: &str) -> Result<(), JsValue> {
        self.session.place_bet_input(input).map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.session.hit().map_err(js_err)?;
        to_js_value(&JsTurnOutcome::from(outcome))
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.session.stand().map_err(js_err)?;
        to_js_value(&JsTurnOutcome::from(outcome))
    }

    /// Milliseconds the page should wait before calling `reset_after_game_over`.
    pub fn reset_delay_ms(&self) -> u32 {
        self.session.options().reset_delay.as_millis() as u32
    }

    pub fn reset_after_game_over(&mut self) -> bool {
        self.session.reset_after_game_over()
    }

    /// Returns and clears the notifications queued since the last call.
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events = core::mem::take(&mut self.session.presenter_mut().events);
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            phase: phase_to_str(self.session.phase()),
            seat: self.session.phase().seat().map(|index| index as u32),
            players: self
                .session
                .players()
                .iter()
                .map(JsPlayer::from)
                .collect(),
            dealer: JsDealer::from(self.session.dealer_hand()),
            result: self.session.last_result().map(JsRoundResult::from),
            cards_remaining: self.session.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

/// Queues presenter notifications for the page to drain.
#[derive(Debug, Default)]
struct EventLog {
    events: Vec<JsEvent>,
}

impl Presenter for EventLog {
    fn on_players_changed(&mut self, players: &[Player], active: Option<usize>) {
        self.events.push(JsEvent::PlayersChanged {
            players: players.iter().map(JsPlayer::from).collect(),
            active: active.map(|index| index as u32),
        });
    }

    fn on_hand_changed(&mut self, owner: HandOwner, cards: &[Card], reveal_all: bool) {
        let owner = match owner {
            HandOwner::Player(index) => Some(index as u32),
            HandOwner::Dealer => None,
        };
        let cards = cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                (owner.is_some() || reveal_all || index == 0).then(|| card_to_js(*card))
            })
            .collect();
        self.events.push(JsEvent::HandChanged {
            player: owner,
            cards,
        });
    }

    fn on_result(&mut self, messages: &[String]) {
        self.events.push(JsEvent::Result {
            messages: messages.to_vec(),
        });
    }

    fn on_bet_phase(&mut self, player_index: usize, balance: usize) {
        self.events.push(JsEvent::BetPhase {
            player: player_index as u32,
            balance: balance as u32,
        });
    }

    fn on_play_buttons_visible(&mut self, visible: bool) {
        self.events.push(JsEvent::PlayButtons { visible });
    }

    fn on_game_over(&mut self, delay: Duration) {
        self.events.push(JsEvent::GameOver {
            delay_ms: delay.as_millis() as u32,
        });
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    PlayersChanged {
        players: Vec<JsPlayer>,
        active: Option<u32>,
    },
    HandChanged {
        player: Option<u32>,
        cards: Vec<Option<JsCard>>,
    },
    Result {
        messages: Vec<String>,
    },
    BetPhase {
        player: u32,
        balance: u32,
    },
    PlayButtons {
        visible: bool,
    },
    GameOver {
        delay_ms: u32,
    },
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    seat: Option<u32>,
    players: Vec<JsPlayer>,
    dealer: JsDealer,
    result: Option<JsRoundResult>,
    cards_remaining: u32,
}

#[derive(Debug, Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: String,
}

#[derive(Debug, Serialize)]
struct JsPlayer {
    tokens: u32,
    bet: u32,
    cards: Vec<JsCard>,
    total: u8,
    active: bool,
    done: bool,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            tokens: player.tokens() as u32,
            bet: player.bet() as u32,
            cards: player.hand().cards().iter().copied().map(card_to_js).collect(),
            total: player.hand().value(),
            active: player.is_active(),
            done: player.is_done(),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    visible_value: u8,
    hole_revealed: bool,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        Self {
            cards: dealer
                .visible_cards()
                .map(|card| card.map(card_to_js))
                .collect(),
            visible_value: dealer.visible_value(),
            hole_revealed: dealer.is_hole_revealed(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    players: Vec<JsPlayerResult>,
    dealer_value: u8,
    dealer_bust: bool,
    game_over: bool,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            players: result
                .players
                .iter()
                .map(|player| JsPlayerResult {
                    player: player.player_index as u32,
                    outcome: outcome_to_str(player.outcome),
                    bet: player.bet as u32,
                    net: player.net as i32,
                    message: player.message.clone(),
                })
                .collect(),
            dealer_value: result.dealer_value,
            dealer_bust: result.dealer_bust,
            game_over: result.game_over,
        }
    }
}

#[derive(Serialize)]
struct JsPlayerResult {
    player: u32,
    outcome: &'static str,
    bet: u32,
    net: i32,
    message: String,
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsTurnOutcome {
    Ignored,
    Continue { card: JsCard },
    NextPlayer { player: u32 },
    RoundOver { result: JsRoundResult },
}

impl From<TurnOutcome> for JsTurnOutcome {
    fn from(outcome: TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::Ignored => Self::Ignored,
            TurnOutcome::Continue(card) => Self::Continue {
                card: card_to_js(card),
            },
            TurnOutcome::NextPlayer(index) => Self::NextPlayer {
                player: index as u32,
            },
            TurnOutcome::RoundOver(result) => Self::RoundOver {
                result: JsRoundResult::from(&result),
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Unconfigured => "Unconfigured",
        Phase::AwaitingBet(_) => "AwaitingBet",
        Phase::PlayerTurn(_) => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Settlement => "Settlement",
        Phase::GameOver => "GameOver",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Bust => "Bust",
        HandOutcome::Win => "Win",
        HandOutcome::Push => "Push",
        HandOutcome::Lose => "Lose",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, GameSession, HandOwner, MAX_PLAYERS, Phase, Player, Presenter, Suit, TableOptions,
};

/// Prints table changes as they happen.
struct Terminal;

impl Presenter for Terminal {
    fn on_players_changed(&mut self, players: &[Player], active: Option<usize>) {
        println!();
        for (index, player) in players.iter().enumerate() {
            let marker = if Some(index) == active { "*" } else { " " };
            println!("{marker} Player {}: {} tokens", index + 1, player.tokens());
        }
    }

    fn on_hand_changed(&mut self, owner: HandOwner, cards: &[Card], reveal_all: bool) {
        match owner {
            HandOwner::Player(index) if !cards.is_empty() => {
                println!(
                    "Player {} hand: {} (total {})",
                    index + 1,
                    format_cards(cards),
                    bjtable::calculate_total(cards)
                );
            }
            HandOwner::Player(_) => {}
            HandOwner::Dealer => {
                let view = cards
                    .iter()
                    .enumerate()
                    .map(|(index, card)| {
                        if reveal_all || index == 0 {
                            format_card(card)
                        } else {
                            "??".to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                let total = if reveal_all {
                    bjtable::calculate_total(cards).to_string()
                } else {
                    "?".to_string()
                };
                println!("Dealer: {view} (total {total})");
            }
        }
    }

    fn on_result(&mut self, messages: &[String]) {
        for message in messages {
            println!("{message}");
        }
    }

    fn on_bet_phase(&mut self, player_index: usize, balance: usize) {
        println!("\nPlayer {} to bet ({balance} tokens).", player_index + 1);
    }

    fn on_game_over(&mut self, delay: Duration) {
        println!(
            "\nOne or more players lost all tokens! Game resets in {}s.",
            delay.as_secs()
        );
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = GameSession::new(TableOptions::default(), seed, Terminal);

    loop {
        let Some(input) = prompt_line(&format!("Number of players (1-{MAX_PLAYERS}): ")) else {
            return;
        };
        if is_quit(&input) {
            return;
        }
        match input.parse::<usize>() {
            Ok(count) => match session.configure(count) {
                Ok(()) => break,
                Err(err) => println!("{err}"),
            },
            Err(_) => println!("Please enter a number."),
        }
    }

    loop {
        match session.phase() {
            Phase::AwaitingBet(index) => {
                let Some(input) = prompt_line(&format!("Player {} bet: ", index + 1)) else {
                    break;
                };
                if is_quit(&input) {
                    break;
                }
                if let Err(err) = session.place_bet_input(&input) {
                    let balance = session.player(index).map_or(0, Player::tokens);
                    println!(
                        "Invalid bet ({err}). Player {} has {balance} tokens.",
                        index + 1
                    );
                }
            }
            Phase::PlayerTurn(index) => {
                let Some(input) = prompt_line(&format!("Player {}: [h]it or [s]tand? ", index + 1))
                else {
                    break;
                };
                let result = match input.as_str() {
                    "h" | "hit" => session.hit(),
                    "s" | "stand" => session.stand(),
                    "q" | "quit" => break,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };
                if let Err(err) = result {
                    println!("Action error: {err}");
                }
            }
            Phase::GameOver => {
                thread::sleep(session.options().reset_delay);
                session.reset_after_game_over();
            }
            Phase::Unconfigured | Phase::DealerTurn | Phase::Settlement => break,
        }
    }

    println!("Goodbye.");
}

fn is_quit(input: &str) -> bool {
    input == "q" || input == "quit"
}

/// Reads one trimmed, lowercased line. `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

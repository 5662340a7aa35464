//! A multi-player token blackjack table with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] that runs the round flow: each seat
//! bets and plays in turn, the dealer draws to 17, and bets are settled
//! one-to-one. Rendering is left to a [`Presenter`].
//!
//! # Example
//!
//! ```
//! use bjtable::{GameSession, TableOptions, TurnOutcome};
//!
//! let mut session = GameSession::headless(TableOptions::default(), 42);
//! session.configure(1).unwrap();
//! session.place_bet(5).unwrap();
//! let outcome = session.stand().unwrap();
//! assert!(matches!(outcome, TurnOutcome::RoundOver(_)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod presenter;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, ConfigureError, DeckError};
pub use game::{GameSession, Phase, TurnOutcome};
pub use hand::{BLACKJACK, DealerHand, Hand, calculate_total};
pub use options::{MAX_PLAYERS, MIN_PLAYERS, TableOptions};
pub use player::Player;
pub use presenter::{HandOwner, NullPresenter, Presenter};
pub use result::{HandOutcome, PlayerResult, RoundResult};

//! The single 52-card deck used for one round.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// A deck of cards. Cards are drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck holding every suit and rank once.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a fresh deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Builds a full deck whose first draws are `top`, in order.
    ///
    /// The remaining cards of the standard deck follow. Repeated cards in
    /// `top` are only used once, so the deck always holds 52 unique cards.
    ///
    /// ```
    /// use bjtable::{Card, Deck, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, 1);
    /// let mut deck = Deck::with_top_cards(&[ace]);
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.draw(), Ok(ace));
    /// ```
    #[must_use]
    pub fn with_top_cards(top: &[Card]) -> Self {
        let mut wanted: Vec<Card> = Vec::with_capacity(top.len());
        for card in top {
            if !wanted.contains(card) {
                wanted.push(*card);
            }
        }

        let mut cards: Vec<Card> = Self::new()
            .cards
            .into_iter()
            .rev()
            .filter(|card| !wanted.contains(card))
            .collect();
        cards.extend(wanted.into_iter().rev());
        Self { cards }
    }

    /// Shuffles the remaining cards in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the remaining cards, last element drawn first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

//! Deck and hand scoring tests.

use std::collections::HashSet;

use bjtable::{Card, DECK_SIZE, DealerHand, Deck, DeckError, Hand, Suit, calculate_total};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn aces_soften_one_at_a_time() {
    let two_aces = [card(Suit::Spades, 1), card(Suit::Hearts, 1)];
    assert_eq!(calculate_total(&two_aces), 12);

    let four_aces = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 1),
    ];
    assert_eq!(calculate_total(&four_aces), 14);

    assert_eq!(
        calculate_total(&[card(Suit::Clubs, 13), card(Suit::Spades, 1)]),
        21
    );
}

#[test]
fn bust_without_aces_stays_bust() {
    let cards = [
        card(Suit::Hearts, 10),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 5),
    ];
    assert_eq!(calculate_total(&cards), 24);

    let mut hand = Hand::new();
    for c in cards {
        hand.add_card(c);
    }
    assert!(hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn face_cards_count_ten() {
    let cards = [
        card(Suit::Hearts, 11),
        card(Suit::Spades, 12),
        card(Suit::Clubs, 1),
    ];
    assert_eq!(calculate_total(&cards), 21);
    assert_eq!(calculate_total(&[]), 0);
}

#[test]
fn hand_natural_and_soft() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 13));
    assert_eq!(hand.value(), 21);
    assert!(hand.is_natural());
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Diamonds, 5));
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_natural());
    assert!(!hand.is_soft());

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 1));
    dealer.add_card(card(Suit::Clubs, 6));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);
    let visible: Vec<_> = dealer.visible_cards().collect();
    assert_eq!(visible, vec![Some(card(Suit::Hearts, 1)), None]);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
    assert!(dealer.visible_cards().all(|c| c.is_some()));

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn card_display_uses_symbols() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "A♠");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10♥");
    assert_eq!(card(Suit::Diamonds, 13).to_string(), "K♦");
    assert_eq!(card(Suit::Clubs, 11).to_string(), "J♣");
}

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            assert!(unique.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn shuffle_keeps_cards_and_changes_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let shuffled = Deck::shuffled(&mut rng);

    assert_ne!(shuffled, Deck::new());

    let mut before: Vec<Card> = Deck::new().cards().to_vec();
    let mut after: Vec<Card> = shuffled.cards().to_vec();
    let key = |c: &Card| (c.suit as u8, c.rank);
    before.sort_by_key(key);
    after.sort_by_key(key);
    assert_eq!(before, after);
}

#[test]
fn shuffle_spreads_positions_evenly() {
    const TRIALS: usize = 5200;

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let target = card(Suit::Spades, 1);
    let mut counts = [0_usize; DECK_SIZE];

    for _ in 0..TRIALS {
        let deck = Deck::shuffled(&mut rng);
        let position = deck
            .cards()
            .iter()
            .position(|c| *c == target)
            .unwrap();
        counts[position] += 1;
    }

    // Expected 100 per position.
    for count in counts {
        assert!((50..=160).contains(&count), "skewed count {count}");
    }
}

#[test]
fn draw_empties_deck_then_errors() {
    let mut deck = Deck::new();
    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        seen.insert(deck.draw().unwrap());
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn top_cards_come_out_first() {
    let top = [
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 1),
        card(Suit::Hearts, 9),
        card(Suit::Diamonds, 12),
    ];
    let mut deck = Deck::with_top_cards(&top);
    assert_eq!(deck.len(), DECK_SIZE);

    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, 9)));
    assert_eq!(deck.draw(), Ok(card(Suit::Clubs, 1)));
    assert_eq!(deck.draw(), Ok(card(Suit::Diamonds, 12)));

    let rest: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(rest.len(), DECK_SIZE - 3);
    assert!(!rest.contains(&card(Suit::Hearts, 9)));
}

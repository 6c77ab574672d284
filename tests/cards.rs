//! Card, hand, shoe and count tests.

#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use bjcount::{
    Card, CountTracker, DECK_SIZE, DealerHand, GameOptions, Hand, PlayerHand, Rank, RoundingMode,
    Shoe, ShoeError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(Suit::Spades, rank));
    }
    hand
}

#[test]
fn card_values_and_weights() {
    let expected = [
        (Rank::Two, 2, 1),
        (Rank::Three, 3, 1),
        (Rank::Four, 4, 1),
        (Rank::Five, 5, 1),
        (Rank::Six, 6, 1),
        (Rank::Seven, 7, 0),
        (Rank::Eight, 8, 0),
        (Rank::Nine, 9, 0),
        (Rank::Ten, 10, -1),
        (Rank::Jack, 10, -1),
        (Rank::Queen, 10, -1),
        (Rank::King, 10, -1),
        (Rank::Ace, 11, -1),
    ];
    for (rank, value, weight) in expected {
        let card = card(Suit::Clubs, rank);
        assert_eq!(card.value(), value, "{rank:?}");
        assert_eq!(card.hi_lo(), weight, "{rank:?}");
    }

    // A full deck counts to zero.
    let total: i32 = Rank::ALL.iter().map(|&rank| rank.hi_lo()).sum();
    assert_eq!(total, 0);
}

#[test]
fn card_display_and_colour() {
    assert_eq!(card(Suit::Spades, Rank::Ten).to_string(), "10♠");
    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "A♥");
    assert_eq!(card(Suit::Clubs, Rank::Queen).to_string(), "Q♣");
    assert!(card(Suit::Diamonds, Rank::Two).is_red());
    assert!(!card(Suit::Clubs, Rank::Two).is_red());
    assert!(card(Suit::Spades, Rank::Ace).is_ace());
}

#[test]
fn hand_soft_aces() {
    let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());
    assert!(!hand.is_blackjack());

    let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
    assert_eq!(hand.value(), 14);
    assert!(hand.is_soft());

    let hand = hand_of(&[Rank::Ace, Rank::Five, Rank::King]);
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_soft());

    let hand = hand_of(&[Rank::Ace, Rank::King]);
    assert!(hand.is_blackjack());

    let hand = hand_of(&[Rank::King, Rank::Queen, Rank::Two]);
    assert_eq!(hand.value(), 22);
    assert!(hand.is_busted());
}

#[test]
fn hand_value_stays_between_hard_and_soft_totals() {
    let mut shoe = Shoe::new(2, 17);
    for size in (2..=6).cycle().take(40) {
        let mut hand = Hand::new();
        for _ in 0..size {
            hand.add_card(shoe.draw().unwrap());
        }

        let hard: u8 = hand
            .cards()
            .iter()
            .map(|c| if c.is_ace() { 1 } else { c.value() })
            .sum();
        let soft: u8 = hand.cards().iter().map(|c| c.value()).sum();
        let value = hand.value();

        assert!(hard <= value && value <= soft, "{:?}", hand.cards());
        if value > 21 {
            assert_eq!(value, hard);
        }
    }
}

#[test]
fn pairs_need_equal_rank() {
    assert!(hand_of(&[Rank::Eight, Rank::Eight]).is_pair());
    assert!(!hand_of(&[Rank::King, Rank::Queen]).is_pair());
    assert!(!hand_of(&[Rank::Eight, Rank::Eight, Rank::Two]).is_pair());

    let mut hand = hand_of(&[Rank::Nine, Rank::Nine]);
    assert_eq!(hand.take_split_card(), Some(card(Suit::Spades, Rank::Nine)));
    assert_eq!(hand.len(), 1);
    assert_eq!(hand.take_split_card(), None);

    let split = PlayerHand::from_split(card(Suit::Hearts, Rank::Nine), 25);
    assert_eq!(split.stake(), 25);
    assert_eq!(split.hand().len(), 1);
    assert!(!split.has_acted());
    assert!(!split.is_completed());
}

#[test]
fn dealer_hole_card_visibility() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, Rank::Ace));
    dealer.add_card(card(Suit::Clubs, Rank::Six));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_cards(), &[card(Suit::Hearts, Rank::Ace)]);
    assert_eq!(dealer.visible_value(), 11);

    assert_eq!(dealer.reveal_hole(), Some(card(Suit::Clubs, Rank::Six)));
    assert_eq!(dealer.reveal_hole(), None);
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert_eq!(dealer.visible_cards().len(), 2);
    assert!(dealer.is_soft());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.reveal_hole(), None);
}

#[test]
fn shoe_holds_every_card_per_deck() {
    let mut shoe = Shoe::new(3, 1);
    assert_eq!(shoe.total_cards(), 3 * DECK_SIZE);

    let mut seen: HashMap<Card, usize> = HashMap::new();
    while let Ok(card) = shoe.draw() {
        *seen.entry(card).or_default() += 1;
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(seen.values().all(|&n| n == 3));
    assert_eq!(shoe.draw(), Err(ShoeError::Empty));
    assert_eq!(shoe.dealt().len(), 3 * DECK_SIZE);
}

#[test]
fn shoe_draw_moves_cards_to_dealt() {
    let mut shoe = Shoe::new(2, 9);
    for _ in 0..26 {
        shoe.draw().unwrap();
    }

    assert_eq!(shoe.cards_remaining(), 78);
    assert_eq!(shoe.dealt().len(), 26);
    assert_eq!(shoe.decks_remaining(), 1.5);

    shoe.reshuffle();
    assert_eq!(shoe.cards_remaining(), 104);
    assert!(shoe.dealt().is_empty());
}

#[test]
fn shoe_needs_reshuffle_below_one_deck() {
    let mut shoe = Shoe::new(2, 4);
    for _ in 0..52 {
        shoe.draw().unwrap();
    }
    assert!(!shoe.needs_reshuffle());
    shoe.draw().unwrap();
    assert!(shoe.needs_reshuffle());

    shoe.set_deck_count(1);
    assert_eq!(shoe.cards_remaining(), 52);
    assert_eq!(shoe.deck_count(), 1);
    assert!(!shoe.needs_reshuffle());
}

#[test]
fn same_seed_same_order() {
    let mut a = Shoe::new(6, 42);
    let mut b = Shoe::new(6, 42);
    for _ in 0..50 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn place_on_top_sets_draw_order() {
    let mut shoe = Shoe::new(1, 8);
    let stacked = [
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::King),
    ];

    shoe.place_on_top(&stacked).unwrap();
    assert_eq!(shoe.cards_remaining(), 52);
    for expected in stacked {
        assert_eq!(shoe.draw(), Ok(expected));
    }

    // The ace of spades has been dealt and cannot be stacked again.
    assert_eq!(
        shoe.place_on_top(&[card(Suit::Spades, Rank::Ace)]),
        Err(ShoeError::CardUnavailable(card(Suit::Spades, Rank::Ace)))
    );
}

#[test]
fn place_on_top_claims_each_copy_once() {
    let mut shoe = Shoe::new(1, 8);
    let twice = card(Suit::Diamonds, Rank::Seven);
    assert_eq!(
        shoe.place_on_top(&[twice, twice]),
        Err(ShoeError::CardUnavailable(twice))
    );

    let mut shoe = Shoe::new(2, 8);
    shoe.place_on_top(&[twice, twice]).unwrap();
    assert_eq!(shoe.draw(), Ok(twice));
    assert_eq!(shoe.draw(), Ok(twice));
}

#[test]
fn place_on_top_beyond_remaining_is_empty() {
    let mut shoe = Shoe::new(1, 2);
    for _ in 0..51 {
        shoe.draw().unwrap();
    }
    let last = shoe.place_on_top(&[
        card(Suit::Spades, Rank::Two),
        card(Suit::Spades, Rank::Three),
    ]);
    assert_eq!(last, Err(ShoeError::Empty));
    assert_eq!(shoe.place_on_top(&[]), Ok(()));
}

#[test]
fn count_tracks_running_and_true() {
    let mut count = CountTracker::new();
    count.observe(card(Suit::Hearts, Rank::Five), 1.0);
    assert_eq!(count.running_count(), 1);
    assert_eq!(count.true_count(), 1);

    count.observe(card(Suit::Hearts, Rank::Eight), 1.0);
    assert_eq!(count.running_count(), 1);

    count.reset();
    assert_eq!(count, CountTracker::default());
}

#[test]
fn true_count_rounds_half_up() {
    let mut count = CountTracker::new();
    for _ in 0..5 {
        count.observe(card(Suit::Clubs, Rank::King), 2.0);
    }
    // -5 / 2 = -2.5
    assert_eq!(count.running_count(), -5);
    assert_eq!(count.true_count(), -2);

    let mut count = CountTracker::new();
    for _ in 0..5 {
        count.observe(card(Suit::Clubs, Rank::Two), 2.0);
    }
    assert_eq!(count.true_count(), 3);

    count.observe(card(Suit::Clubs, Rank::Seven), 4.0);
    // 5 / 4 = 1.25
    assert_eq!(count.true_count(), 1);
}

#[test]
fn true_count_is_zero_without_decks() {
    let mut count = CountTracker::new();
    count.observe(card(Suit::Clubs, Rank::Two), 0.0);
    assert_eq!(count.running_count(), 1);
    assert_eq!(count.true_count(), 0);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(2)
        .with_starting_balance(500)
        .with_default_bet(10)
        .with_blackjack_pays(1.2)
        .with_rounding_blackjack(RoundingMode::Up)
        .with_insurance(false)
        .with_max_hands(2)
        .with_recent_cards(8);

    assert_eq!(options.decks, 2);
    assert_eq!(options.starting_balance, 500);
    assert_eq!(options.default_bet, 10);
    assert_eq!(options.blackjack_pays, 1.2);
    assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    assert!(!options.insurance);
    assert_eq!(options.max_hands, 2);
    assert_eq!(options.recent_cards, 8);
}

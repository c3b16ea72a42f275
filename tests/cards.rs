//! Card, deck and hand tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    Card, DEALER_STANDS_ON, DECK_SIZE, Dealer, Deck, DeckError, Hand, Player, Rank, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for (index, &rank) in ranks.iter().enumerate() {
        hand.add_card(card(rank, Suit::ALL[index % 4]));
    }
    hand
}

#[test]
fn card_values_follow_the_table() {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let expected = match rank {
                Rank::Jack | Rank::Queen | Rank::King => 10,
                Rank::Ace => 11,
                number => number as u8,
            };
            let value = card(rank, suit).value();
            assert_eq!(value, expected, "{rank:?} of {suit:?}");
            assert!((2..=11).contains(&value));
        }
    }

    assert_eq!(card(Rank::Two, Suit::Clubs).value(), 2);
    assert_eq!(card(Rank::Ten, Suit::Clubs).value(), 10);
    assert_eq!(card(Rank::Queen, Suit::Clubs).value(), 10);
}

#[test]
fn card_display_uses_rank_symbol_and_suit_name() {
    assert_eq!(card(Rank::Ten, Suit::Diamonds).to_string(), "10 of Diamonds");
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "A of Spades");
    assert_eq!(card(Rank::Jack, Suit::Hearts).to_string(), "J of Hearts");
    assert_eq!(card(Rank::Seven, Suit::Clubs).to_string(), "7 of Clubs");
}

#[test]
fn exactly_52_distinct_cards_exist() {
    let cards: HashSet<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| card(rank, suit)))
        .collect();
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn fresh_deck_draws_in_canonical_order() {
    let mut deck = Deck::new();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.drawn(), 0);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(deck.draw(), Ok(card(rank, suit)));
        }
    }

    assert!(deck.is_exhausted());
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn drawing_past_the_end_is_an_error() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE {
        deck.draw().unwrap();
    }

    assert_eq!(deck.draw(), Err(DeckError::Exhausted));
    assert_eq!(deck.draw(), Err(DeckError::Exhausted));
    assert_eq!(deck.drawn(), DECK_SIZE);
}

#[test]
fn shuffled_deck_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let drawn: Vec<Card> = (0..DECK_SIZE).map(|_| deck.draw().unwrap()).collect();
    let unique: HashSet<Card> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(deck.draw(), Err(DeckError::Exhausted));

    let canonical: Vec<Card> = {
        let mut fresh = Deck::new();
        (0..DECK_SIZE).map(|_| fresh.draw().unwrap()).collect()
    };
    assert_ne!(drawn, canonical);
}

#[test]
fn shuffle_resets_the_cursor() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();
    for _ in 0..10 {
        deck.draw().unwrap();
    }

    deck.shuffle(&mut rng);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.drawn(), 0);
}

#[test]
fn same_seed_gives_same_order() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(42));

    for _ in 0..DECK_SIZE {
        assert_eq!(first.draw(), second.draw());
    }
}

#[test]
fn stacked_deck_draws_the_given_cards_first() {
    let top = [
        card(Rank::King, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
    ];
    let mut deck = Deck::from_draw_order(&top).unwrap();

    for expected in top {
        assert_eq!(deck.draw(), Ok(expected));
    }
    // The rest keep canonical order, skipping the cards already used.
    assert_eq!(deck.draw(), Ok(card(Rank::Three, Suit::Hearts)));

    let mut seen: HashSet<Card> = top.into_iter().collect();
    seen.insert(card(Rank::Three, Suit::Hearts));
    while let Ok(next) = deck.draw() {
        assert!(seen.insert(next), "{next} drawn twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn stacked_deck_rejects_repeats() {
    let repeated = card(Rank::Nine, Suit::Diamonds);
    let result = Deck::from_draw_order(&[repeated, card(Rank::Two, Suit::Clubs), repeated]);
    assert_eq!(result.unwrap_err(), DeckError::DuplicateCard(repeated));
}

#[test]
fn hand_totals_adjust_aces() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::King]).total(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).total(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace]).total(), 13);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Nine, Rank::Ace]).total(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::King, Rank::Five]).total(), 16);
    assert_eq!(hand_of(&[]).total(), 0);

    let busted = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
    assert_eq!(busted.total(), 24);
    assert!(busted.is_busted());
}

#[test]
fn whole_deck_in_one_hand_totals_exactly() {
    let mut deck = Deck::new();
    let mut hand = Hand::new();
    while let Ok(next) = deck.draw() {
        hand.add_card(next);
    }

    // 380 with every ace high, then all four aces lowered.
    assert_eq!(hand.len(), DECK_SIZE);
    assert_eq!(hand.total(), 340);
    assert!(hand.is_busted());
    assert!(!hand.is_soft());
}

#[test]
fn hand_total_ignores_order() {
    let forward = hand_of(&[Rank::Ace, Rank::Six, Rank::Ace, Rank::Nine]);
    let backward = hand_of(&[Rank::Nine, Rank::Ace, Rank::Six, Rank::Ace]);
    assert_eq!(forward.total(), 17);
    assert_eq!(backward.total(), forward.total());
}

#[test]
fn soft_hands_keep_an_ace_high() {
    assert!(hand_of(&[Rank::Ace, Rank::Six]).is_soft());
    assert!(!hand_of(&[Rank::Ace, Rank::Six, Rank::Ten]).is_soft());
    assert!(!hand_of(&[Rank::Ten, Rank::Seven]).is_soft());
}

#[test]
fn busted_matches_total_for_every_prefix_of_a_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let mut hand = Hand::new();
    while let Ok(next) = deck.draw() {
        hand.add_card(next);
        assert_eq!(hand.is_busted(), hand.total() > 21);
    }
}

#[test]
fn clearing_empties_the_hand() {
    let mut hand = hand_of(&[Rank::Ten, Rank::Ace]);
    assert_eq!(hand.to_string(), "10 of Hearts, A of Diamonds");

    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.total(), 0);
    assert_eq!(hand.to_string(), "(empty)");
}

#[test]
fn player_hit_draws_into_the_hand() {
    let mut deck = Deck::new();
    let mut player = Player::new();

    let drawn = player.hit(&mut deck).unwrap();
    assert_eq!(drawn, card(Rank::Two, Suit::Hearts));
    assert_eq!(player.hand().cards(), &[drawn]);
    assert_eq!(player.total(), 2);

    player.clear_hand();
    assert!(player.hand().is_empty());
}

#[test]
fn dealer_draws_to_seventeen() {
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut dealer = Dealer::new();
        dealer.add_card(deck.draw().unwrap());
        dealer.add_card(deck.draw().unwrap());
        let before = dealer.hand().len();

        let drawn = dealer.play(&mut deck).unwrap();
        assert!(dealer.total() >= DEALER_STANDS_ON, "seed {seed}");
        assert_eq!(dealer.hand().len(), before + drawn.len());
        assert_eq!(&dealer.hand().cards()[before..], drawn.as_slice());
    }
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut deck = Deck::new();
    let mut dealer = Dealer::new();
    dealer.add_card(card(Rank::Ace, Suit::Spades));
    dealer.add_card(card(Rank::Six, Suit::Spades));

    assert!(dealer.play(&mut deck).unwrap().is_empty());
    assert_eq!(dealer.total(), 17);
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn dealer_reports_an_exhausted_deck() {
    // Stack every card except 2 and 3 of hearts, which are left for last.
    let top: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| card(rank, suit)))
        .filter(|c| *c != card(Rank::Two, Suit::Hearts) && *c != card(Rank::Three, Suit::Hearts))
        .collect();
    let mut deck = Deck::from_draw_order(&top).unwrap();
    for _ in 0..top.len() {
        deck.draw().unwrap();
    }

    let mut dealer = Dealer::new();
    assert_eq!(dealer.play(&mut deck), Err(DeckError::Exhausted));
    assert_eq!(dealer.total(), 5);
    assert!(dealer.total() < DEALER_STANDS_ON);
}

#[test]
fn dealer_exposes_up_and_hole_cards() {
    let mut dealer = Dealer::new();
    assert!(dealer.up_card().is_none());

    dealer.add_card(card(Rank::Queen, Suit::Clubs));
    dealer.add_card(card(Rank::Four, Suit::Hearts));
    assert_eq!(dealer.up_card(), Some(&card(Rank::Queen, Suit::Clubs)));
    assert_eq!(dealer.hole_card(), Some(&card(Rank::Four, Suit::Hearts)));
    assert!(!dealer.is_busted());
}

//! The two seats at the table.
//!
//! [`Player`] and [`Dealer`] each own a [`Hand`] and expose only the moves
//! their role makes.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;

/// Total at which the dealer stops drawing, soft or hard.
pub const DEALER_STANDS_ON: u16 = 17;

/// The human seat.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a dealt card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Empties the hand.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Draws one card from `deck` into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, DeckError> {
        let card = deck.draw()?;
        self.hand.add_card(card);
        Ok(card)
    }

    /// Returns the hand total.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.hand.total()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }
}

/// The scripted dealer seat.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a dealt card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Empties the hand.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Returns the face-up card (first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns the hole card (second card dealt).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }

    /// Draws from `deck` until the total reaches [`DEALER_STANDS_ON`].
    ///
    /// Returns the cards drawn, in order. Cards drawn before a failure stay
    /// in the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out first.
    pub fn play(&mut self, deck: &mut Deck) -> Result<Vec<Card>, DeckError> {
        let mut drawn_cards = Vec::new();

        while self.hand.total() < DEALER_STANDS_ON {
            let card = deck.draw()?;
            self.hand.add_card(card);
            drawn_cards.push(card);
            tracing::debug!(%card, total = self.hand.total(), "dealer draws");
        }

        Ok(drawn_cards)
    }

    /// Returns the hand total.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.hand.total()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }
}

//! A single 52-card deck with a draw cursor.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A standard deck of 52 unique cards.
///
/// Drawing advances a cursor instead of removing cards, so the full set is
/// always present and [`Deck::shuffle`] can start a fresh deal from it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    cursor: usize,
}

impl Deck {
    /// Creates a deck in canonical order: suit-major, ranks ascending.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::new();
    /// assert_eq!(deck.draw(), Ok(Card::new(Rank::Two, Suit::Hearts)));
    /// assert_eq!(deck.remaining(), 51);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = [Card::new(Rank::Two, Suit::Hearts); DECK_SIZE];
        let canonical = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)));
        for (slot, card) in cards.iter_mut().zip(canonical) {
            *slot = card;
        }

        Self { cards, cursor: 0 }
    }

    /// Creates a stacked deck whose first draws are `top`, in order.
    ///
    /// The cards not named in `top` follow in canonical order, so the deck
    /// still holds each of the 52 cards exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if `top` repeats a card.
    pub fn from_draw_order(top: &[Card]) -> Result<Self, DeckError> {
        let mut deck = Self::new();

        for (position, card) in top.iter().enumerate() {
            // Earlier positions are already fixed; the card must still be below them.
            let found = deck.cards[position..]
                .iter()
                .position(|candidate| candidate == card)
                .ok_or(DeckError::DuplicateCard(*card))?;
            deck.cards[position..=position + found].rotate_right(1);
        }

        Ok(deck)
    }

    /// Shuffles all 52 cards and resets the draw cursor.
    ///
    /// Previously drawn cards go back into play; call this only between rounds.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
        tracing::debug!("deck shuffled");
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once all 52 cards have been drawn.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns the number of cards drawn since the last shuffle.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.cursor
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cursor == DECK_SIZE
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

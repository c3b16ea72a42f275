//! Round controller.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::player::{Dealer, Player};

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

/// One table: a player, a dealer, and the deck for the current round.
///
/// A round runs [`Game::deal`], then [`Game::hit`] / [`Game::stand`], then
/// [`Game::dealer_play`] unless the player busted, and ends with
/// [`Game::showdown`].
///
/// # Example
///
/// ```
/// use twentyone::{Deck, Game, GameState};
///
/// let mut game = Game::new();
/// game.deal(Deck::new()).unwrap();
/// game.stand().unwrap();
/// game.dealer_play().unwrap();
/// assert_eq!(game.state(), GameState::RoundOver);
/// let _result = game.showdown().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Game {
    deck: Deck,
    player: Player,
    dealer: Dealer,
    state: GameState,
}

impl Game {
    /// Creates an idle table with empty hands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a round with `deck`.
    ///
    /// Both hands are cleared first, whatever state the previous round was
    /// left in. Cards are dealt player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if `deck` has fewer than four
    /// cards left. The table is then left idle with empty hands.
    pub fn deal(&mut self, deck: Deck) -> Result<(), DealError> {
        self.player.clear_hand();
        self.dealer.clear_hand();
        self.deck = deck;
        self.state = GameState::Idle;

        if self.deck.remaining() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        tracing::debug!(
            player = %self.player.hand(),
            player_total = self.player.total(),
            "dealt opening hands"
        );

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    fn draw(&mut self) -> Result<Card, DealError> {
        self.deck.draw().map_err(|_| DealError::NotEnoughCards)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player seat.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer seat.
    ///
    /// The hole card is part of the hand; hiding it before the dealer's
    /// turn is up to the caller. [`Game::dealer_up_card`] gives the visible card.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.up_card().copied()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

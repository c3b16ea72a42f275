extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws until reaching 17 or higher and stands on every 17.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw. After a deck error the round
    /// cannot be settled.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let drawn_cards = self.dealer.play(&mut self.deck)?;

        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Compares the hands and reports who won.
    ///
    /// A busted player loses outright. Otherwise a busted dealer loses, and
    /// failing that the strictly higher total wins. Equal totals go to the
    /// dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let player_total = self.player.total();
        let dealer_total = self.dealer.total();
        let player_bust = self.player.is_busted();
        let dealer_bust = self.dealer.is_busted();

        let outcome = if player_bust {
            Outcome::DealerWins
        } else if dealer_bust || player_total > dealer_total {
            Outcome::PlayerWins
        } else {
            Outcome::DealerWins
        };

        tracing::info!(?outcome, player_total, dealer_total, "round settled");

        Ok(RoundResult {
            outcome,
            player_total,
            dealer_total,
            player_bust,
            dealer_bust,
        })
    }
}

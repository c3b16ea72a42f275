use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round immediately; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.player.hit(&mut self.deck)?;
        tracing::debug!(%card, total = self.player.total(), "player hits");

        if self.player.is_busted() {
            tracing::debug!(total = self.player.total(), "player busts");
            self.state = GameState::RoundOver;
        }

        Ok(card)
    }

    /// Player action: Stand (end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        tracing::debug!(total = self.player.total(), "player stands");
        self.state = GameState::DealerTurn;
        Ok(())
    }
}

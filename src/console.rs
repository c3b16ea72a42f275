//! Interactive console play.
//!
//! [`Session`] runs the welcome banner, one round after another, and the
//! play-again prompt over any line-based input and any writer, so the same
//! loop serves a terminal and scripted tests.

use alloc::string::String;
use alloc::vec::Vec;
use std::io::{BufRead, Write};

use rand::Rng;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::ConsoleError;
use crate::game::{Game, GameState};
use crate::options::SessionOptions;
use crate::result::{Outcome, RoundResult};

/// Banner printed once when the session starts.
pub const WELCOME: &str = "Welcome to the game of 21!";
/// Prompt for the player's move. Only `h` hits.
pub const HIT_PROMPT: &str = "Hit or stand? (h/s): ";
/// Prompt after each round. Only `y` continues.
pub const PLAY_AGAIN_PROMPT: &str = "Play again? (y/n): ";

/// Running tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Rounds started, including void ones.
    pub rounds: usize,
    /// Rounds won by the player.
    pub player_wins: usize,
    /// Rounds won by the dealer.
    pub dealer_wins: usize,
    /// Rounds abandoned because the deck ran out.
    pub void_rounds: usize,
}

/// A console session against the dealer.
#[derive(Debug)]
pub struct Session<R, I, O> {
    rng: R,
    input: I,
    output: O,
    options: SessionOptions,
    game: Game,
    summary: SessionSummary,
}

impl<R: Rng, I: BufRead, O: Write> Session<R, I, O> {
    /// Creates a session that shuffles with `rng`, reads moves from `input`
    /// and writes the table to `output`.
    pub fn new(rng: R, input: I, output: O, options: SessionOptions) -> Self {
        Self {
            rng,
            input,
            output,
            options,
            game: Game::new(),
            summary: SessionSummary::default(),
        }
    }

    /// Plays rounds until the player declines to continue.
    ///
    /// Every round gets a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the console cannot be read or written.
    pub fn run(&mut self) -> Result<SessionSummary, ConsoleError> {
        writeln!(self.output, "{WELCOME}")?;

        loop {
            let mut deck = Deck::new();
            deck.shuffle(&mut self.rng);
            self.play_round(deck)?;

            if self.prompt_choice(PLAY_AGAIN_PROMPT)? != Some(b'y') {
                break;
            }
        }

        let summary = self.summary;
        writeln!(
            self.output,
            "Thanks for playing! You won {} of {} rounds.",
            summary.player_wins, summary.rounds
        )?;
        self.output.flush()?;

        Ok(summary)
    }

    /// Plays one round from `deck` and records it in the summary.
    ///
    /// Returns `None` when the round had to be voided, which only happens
    /// when the deck runs out.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the console cannot be read or written.
    pub fn play_round(&mut self, deck: Deck) -> Result<Option<RoundResult>, ConsoleError> {
        self.summary.rounds += 1;

        match self.play_hand(deck) {
            Ok(result) => {
                match result.outcome {
                    Outcome::PlayerWins => self.summary.player_wins += 1,
                    Outcome::DealerWins => self.summary.dealer_wins += 1,
                }
                Ok(Some(result))
            }
            Err(ConsoleError::Io(err)) => Err(ConsoleError::Io(err)),
            Err(err) => {
                tracing::warn!(error = %err, "round voided");
                self.summary.void_rounds += 1;
                writeln!(self.output, "This round is void: {err}.")?;
                Ok(None)
            }
        }
    }

    /// Returns the tally so far.
    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Returns the table, e.g. to inspect the last round's hands.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    fn play_hand(&mut self, deck: Deck) -> Result<RoundResult, ConsoleError> {
        self.game.deal(deck)?;

        if let Some(card) = self.game.dealer_up_card() {
            let shown = self.format_card(&card);
            writeln!(self.output, "Dealer shows: {shown}")?;
        }
        let hand = self.format_cards(self.game.player().hand().cards());
        writeln!(self.output, "You have: {hand}")?;

        loop {
            writeln!(self.output, "Your total: {}", self.game.player().total())?;

            if self.game.player().is_busted() {
                break;
            }

            if self.prompt_choice(HIT_PROMPT)? == Some(b'h') {
                let card = self.game.hit()?;
                let drawn = self.format_card(&card);
                writeln!(self.output, "You drew: {drawn}")?;
            } else {
                self.game.stand()?;
                break;
            }
        }

        if self.game.state() == GameState::DealerTurn {
            if let Some(card) = self.game.dealer().hole_card() {
                let hole = self.format_card(card);
                writeln!(self.output, "Dealer reveals: {hole}")?;
            }

            for card in self.game.dealer_play()? {
                let drawn = self.format_card(&card);
                writeln!(self.output, "Dealer draws: {drawn}")?;
            }
            writeln!(self.output, "Dealer's total: {}", self.game.dealer().total())?;
        }

        let result = self.game.showdown()?;
        let message = match result.outcome {
            Outcome::DealerWins if result.player_bust => "You busted! Dealer wins.",
            Outcome::PlayerWins if result.dealer_bust => "Dealer busted! You win.",
            Outcome::PlayerWins => "You win!",
            Outcome::DealerWins => "Dealer wins.",
        };
        writeln!(self.output, "{message}")?;

        Ok(result)
    }

    /// Prints `prompt` and returns the first non-blank byte of the reply,
    /// or `None` on a blank line or end of input.
    ///
    /// Replies are raw bytes; text that is not UTF-8 is just another answer.
    fn prompt_choice(&mut self, prompt: &str) -> Result<Option<u8>, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(line.iter().copied().find(|byte| !byte.is_ascii_whitespace()))
    }

    fn format_card(&self, card: &Card) -> String {
        if !self.options.color {
            return card.to_string();
        }

        let color_code = match card.suit() {
            suit if suit.is_red() => "31",
            Suit::Clubs => "32",
            _ => "34",
        };
        format!(
            "{} of \u{1b}[{color_code}m{}\u{1b}[0m",
            card.rank().symbol(),
            card.suit().name()
        )
    }

    fn format_cards(&self, cards: &[Card]) -> String {
        cards
            .iter()
            .map(|card| self.format_card(card))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

//! Single-deck console blackjack against a dealer who stands on 17.
//!
//! The crate provides the card, deck and hand scoring core, a [`Game`] type
//! that runs one round at a time, and (with `std`) a console [`Session`]
//! that drives rounds from line-based input.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use twentyone::{Deck, Game};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng);
//!
//! let mut game = Game::new();
//! game.deal(deck).unwrap();
//! assert_eq!(game.player().hand().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::{Session, SessionSummary};
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand};
pub use options::SessionOptions;
pub use player::{DEALER_STANDS_ON, Dealer, Player};
pub use result::{Outcome, RoundResult};

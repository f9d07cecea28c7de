//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the hangman rules. It has **no dependencies** on the
//! terminal or networking layers, so the same game runs under unit tests, the
//! TCP server or a bench harness.
//!
//! # Module Structure
//!
//! - [`game`]: word state machine (guesses, misses, win/lose)
//! - [`rng`]: seeded LCG used to pick the word
//!
//! # Example
//!
//! ```
//! use hangman_tty_core::{GuessError, Hangman};
//!
//! let mut game = Hangman::new("rust");
//! assert_eq!(game.state(), "_ _ _ _ ");
//!
//! assert_eq!(game.guess(b'u').unwrap(), "_ u _ _ ");
//! assert_eq!(game.guess(b'u'), Err(GuessError::AlreadyAttempted));
//! assert_eq!(game.guess(b'?'), Err(GuessError::InvalidCharacter));
//! ```

pub mod game;
pub mod rng;

pub use hangman_tty_types as types;

pub use game::{GuessError, Hangman};
pub use rng::SimpleRng;

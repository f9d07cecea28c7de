//! Hangman rules.
//!
//! One word, a set of attempted letters and a miss counter. The visible state
//! is rendered as one `"_ "` slot per letter, revealed letters taking the place
//! of the underscore.

use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::{ALLOWED_MISSES, WORDS};

/// Why a guess was rejected. The `Display` text is shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid character")]
    InvalidCharacter,
    #[error("already attempted letter")]
    AlreadyAttempted,
    #[error("game is over")]
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Hangman {
    letters: Vec<char>,
    revealed: Vec<bool>,
    attempted: [bool; 26],
    misses: u8,
    state: String,
}

impl Hangman {
    /// Start a game for `word`. Letters outside `a..=z` (after lowercasing)
    /// cannot be guessed and are revealed from the start.
    pub fn new(word: &str) -> Self {
        let letters: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
        let revealed = letters.iter().map(|c| !c.is_ascii_lowercase()).collect();
        let mut game = Self {
            letters,
            revealed,
            attempted: [false; 26],
            misses: 0,
            state: String::new(),
        };
        game.render_state();
        game
    }

    /// Start a game with a word drawn from the built-in pool.
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::new(rng.pick(&WORDS).copied().unwrap_or(WORDS[0]))
    }

    /// Apply one guessed byte and return the new visible state.
    ///
    /// ASCII uppercase is folded to lowercase. A guess that reveals nothing
    /// counts as a miss.
    pub fn guess(&mut self, guess: u8) -> Result<&str, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = guess.to_ascii_lowercase();
        if !guess.is_ascii_lowercase() {
            return Err(GuessError::InvalidCharacter);
        }

        let slot = usize::from(guess - b'a');
        if self.attempted[slot] {
            return Err(GuessError::AlreadyAttempted);
        }
        self.attempted[slot] = true;

        let guess = char::from(guess);
        let mut revealed_any = false;
        for (letter, revealed) in self.letters.iter().zip(self.revealed.iter_mut()) {
            if !*revealed && *letter == guess {
                *revealed = true;
                revealed_any = true;
            }
        }
        if !revealed_any {
            self.misses += 1;
        }

        self.render_state();
        Ok(&self.state)
    }

    pub fn is_over(&self) -> bool {
        self.misses > ALLOWED_MISSES || self.has_won()
    }

    pub fn has_won(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    /// Visible state, e.g. `"r _ s t "`.
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn misses(&self) -> u8 {
        self.misses
    }

    fn render_state(&mut self) {
        self.state.clear();
        for (letter, revealed) in self.letters.iter().zip(self.revealed.iter()) {
            self.state.push(if *revealed { *letter } else { '_' });
            self.state.push(' ');
        }
    }
}

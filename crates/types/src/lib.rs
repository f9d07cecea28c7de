//! Core types module - shared constants and identifiers
//!
//! This module defines the small set of values shared between the game rules,
//! the render engine and the TCP server. Everything here is plain data with no
//! external dependencies.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HOST` | `0.0.0.0` | Bind address for the session server |
//! | `DEFAULT_PORT` | 9191 | TCP port for the session server |
//! | `REDRAW_INTERVAL_MS` | 200 | Period of the per-session render cycle |
//! | `READ_BUFFER_LEN` | 16 | Bytes read from a client socket per read |
//! | `INBOX_CAPACITY` | 16 | Per-client broadcast inbox size |
//! | `ALLOWED_MISSES` | 5 | Misses tolerated before the game ends |
//!
//! # Examples
//!
//! ```
//! use hangman_tty_types::{ClientId, ALLOWED_MISSES, INPUT_PROMPT};
//!
//! let id = ClientId(3);
//! assert_eq!(id.to_string(), "#3");
//! assert_eq!(ALLOWED_MISSES, 5);
//! assert_eq!(INPUT_PROMPT, '>');
//! ```

use std::fmt;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 9191;

/// Render cycle period for each session (milliseconds).
pub const REDRAW_INTERVAL_MS: u64 = 200;

/// Size of the socket read buffer; only the first byte of a read is a guess.
pub const READ_BUFFER_LEN: usize = 16;

/// Capacity of a client's broadcast inbox. Messages beyond it are dropped.
pub const INBOX_CAPACITY: usize = 16;

/// Misses tolerated before the game is lost (the game ends on the next one).
pub const ALLOWED_MISSES: u8 = 5;

/// Prompt symbol drawn at the start of the input row.
pub const INPUT_PROMPT: char = '>';

/// Words the server picks from when no fixed word is configured.
pub const WORDS: [&str; 12] = [
    "activated",
    "activates",
    "borrowing",
    "compiler",
    "ferrous",
    "iterator",
    "lifetime",
    "mutex",
    "pattern",
    "socket",
    "terminal",
    "trait",
];

/// Identifier of a connected client, unique for the lifetime of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub usize);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_pool_is_lowercase_ascii() {
        for word in WORDS {
            assert!(!word.is_empty());
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn client_ids_order_by_join() {
        assert!(ClientId(1) < ClientId(2));
        assert_eq!(ClientId(7).to_string(), "#7");
    }
}

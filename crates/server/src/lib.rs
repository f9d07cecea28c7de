//! Session server - multiplayer hangman over raw TCP
//!
//! Every TCP connection is one player. The server keeps a single shared game
//! and redraws a small block of rows on each player's terminal several times a
//! second, in place, using [`hangman_tty_term`].
//!
//! # Session Flow
//!
//! 1. **Connection**: the client connects (default: 0.0.0.0:9191)
//! 2. **Seating**: the lobby assigns an id; turn order is join order
//! 3. **Rendering**: the session redraws state, turn indicator, errors and the
//!    input prompt every `HANGMAN_REDRAW_MS`
//! 4. **Guessing**: on your turn, the first byte of each read is a guess;
//!    accepted guesses are broadcast to every player and pass the turn on
//! 5. **Game over**: every session swaps the turn indicator for the
//!    game-over line
//!
//! # Environment Variables
//!
//! - `HANGMAN_HOST`: bind address (default: "0.0.0.0")
//! - `HANGMAN_PORT`: port number (default: 9191)
//! - `HANGMAN_REDRAW_MS`: render cycle period (default: 200)
//! - `HANGMAN_SEED`: seed for picking the word
//! - `HANGMAN_WORD`: play a fixed word
//!
//! # Testing
//!
//! Connect with a raw-mode terminal so each key is sent as it is pressed:
//!
//! ```bash
//! stty raw; nc 127.0.0.1 9191; stty sane
//! ```
//!
//! # Implementation
//!
//! - Uses **tokio** for async networking, one task per connection
//! - The renderer is synchronous; [`sink::ChannelSink`] hands each render
//!   cycle to the connection's writer task
//! - See [`lobby`] for turn and broadcast rules, [`session`] for the rows

pub mod config;
pub mod lobby;
pub mod server;
pub mod session;
pub mod sink;

pub use hangman_tty_core as core;
pub use hangman_tty_term as term;
pub use hangman_tty_types as types;

pub use config::ServerConfig;
pub use lobby::{Lobby, Message, MessageKind};
pub use server::{check_tcp_listen_available, preflight, run_server};
pub use session::{run_session, Session};
pub use sink::ChannelSink;

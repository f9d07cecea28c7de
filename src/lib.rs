//! Multiplayer hangman over raw TCP (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `hangman_tty::{core,server,term,types}` and hosts the
//! binary.

pub use hangman_tty_core as core;
pub use hangman_tty_server as server;
pub use hangman_tty_term as term;
pub use hangman_tty_types as types;

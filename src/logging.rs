//! Tracing subscriber initialization for the server binary.
//!
//! # Priority (highest to lowest)
//!
//! 1. `HANGMAN_LOG` env var (per-target directives, e.g. `hangman_tty_server=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. Default level: `info`
//!
//! Logs go to stderr; player terminals only ever see rendered rows.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// Initialize the global tracing subscriber. Call once, first thing in `main`.
pub fn init_subscriber() {
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(fmt_layer)
        .init();
}

/// `HANGMAN_LOG` > `RUST_LOG` > `info`. Unparseable values fall through.
fn build_env_filter() -> EnvFilter {
    if let Ok(directives) = std::env::var("HANGMAN_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(DEFAULT_DIRECTIVE)
}

//! Hangman session server (default binary).
//!
//! Listens on `HANGMAN_HOST:HANGMAN_PORT` and serves one shared game to every
//! connected raw-mode terminal.

mod logging;

use anyhow::Result;

use hangman_tty::server::{preflight, run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_subscriber();

    let config = ServerConfig::from_env();
    preflight(&config)?;

    run_server(config, None).await
}

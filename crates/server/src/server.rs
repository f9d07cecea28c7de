//! TCP accept loop.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::lobby::Lobby;
use crate::session::run_session;

/// Check that `host:port` can be bound right now.
///
/// Used before starting the runtime so a busy port fails fast with a clear
/// error instead of from inside the accept loop.
pub fn check_tcp_listen_available(host: &str, port: u16) -> std::io::Result<()> {
    std::net::TcpListener::bind((host, port)).map(drop)
}

/// Fail fast when the configured address cannot be bound.
pub fn preflight(config: &ServerConfig) -> anyhow::Result<()> {
    check_tcp_listen_available(&config.host, config.port)
        .with_context(|| format!("cannot listen on {}", config.bind_addr()))
}

/// Start the TCP server
///
/// One game is shared by every connection. `ready_tx` receives the bound
/// address once the listener is up (useful with port 0).
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    let bound = listener.local_addr()?;
    info!(%bound, "hangman server listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let game = config.new_game();
    debug!(word = %game.word(), "new game");
    let lobby = Arc::new(Lobby::new(game));

    loop {
        let (socket, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!(error = %e, "accept failed");
                return Err(e.into());
            }
        };

        let lobby = Arc::clone(&lobby);
        let redraw_interval = config.redraw_interval;
        tokio::spawn(async move {
            if let Err(e) = run_session(socket, addr, lobby, redraw_interval).await {
                let chain = format!("{e:#}");
                warn!(%addr, error = %chain, "session ended with error");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config(port: u16) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..ServerConfig::default()
        }
    }

    #[test]
    fn port_check_accepts_free_port() {
        check_tcp_listen_available("127.0.0.1", 0).unwrap();
        preflight(&local_config(0)).unwrap();
    }

    #[test]
    fn preflight_names_the_busy_address() {
        let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();

        let err = preflight(&local_config(port)).unwrap_err();
        assert_eq!(err.to_string(), format!("cannot listen on 127.0.0.1:{port}"));

        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::AddrInUse);
    }
}

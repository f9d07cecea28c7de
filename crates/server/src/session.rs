//! One connected player.
//!
//! A session owns a [`LineRenderer`] drawing five rows onto the player's
//! terminal:
//!
//! ```text
//! r _ s t            state
//! It's your turn     turn indicator (color wave when it is yours)
//! Game is over ...   only once the game has ended
//! invalid character  only while the last guess was rejected
//! > _                input row, shared with the terminal's own echo
//! ```
//!
//! Three things drive it: the redraw ticker, raw input from the socket and
//! lobby broadcasts. They run in one `select!` loop; the renderer lock keeps a
//! draw and an input notification from interleaving either way.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::lobby::{Lobby, Message};
use crate::sink::ChannelSink;
use crate::term::{animate, Color, Line, LineId, LineRenderer};
use crate::types::{ClientId, INPUT_PROMPT, READ_BUFFER_LEN};

pub const YOUR_TURN: &str = "It's your turn";
pub const NOT_YOUR_TURN: &str = "It is NOT your turn";

/// Colors of the turn and game-over waves.
pub const WAVE_PALETTE: [Color; 4] = [Color::Blue, Color::Green, Color::Red, Color::Orange];

#[derive(Debug, Clone, Copy)]
struct SessionLines {
    state: LineId,
    turn: LineId,
    game_over: LineId,
    error: LineId,
    input: LineId,
}

pub struct Session<W> {
    id: ClientId,
    lobby: Arc<Lobby>,
    renderer: LineRenderer<W>,
    error: Arc<Mutex<Option<String>>>,
    lines: SessionLines,
}

impl<W: Write> Session<W> {
    pub fn new(id: ClientId, lobby: Arc<Lobby>, sink: W) -> Self {
        let renderer = LineRenderer::new(sink);
        let error = Arc::new(Mutex::new(None::<String>));

        let state = {
            let lobby = Arc::clone(&lobby);
            renderer.add_line(Line::from_generator(move || {
                Some(lobby.state().into_bytes())
            }))
        };

        let turn = {
            let lobby = Arc::clone(&lobby);
            let mut wave = animate(|| Some(YOUR_TURN.as_bytes().to_vec()), &WAVE_PALETTE);
            renderer.add_line(Line::from_generator(move || {
                if lobby.is_turn_of(id) {
                    wave()
                } else {
                    Some(Color::Red.paint(NOT_YOUR_TURN))
                }
            }))
        };

        let game_over = {
            let lobby = Arc::clone(&lobby);
            renderer.add_line(Line::animated(
                move || {
                    lobby.is_over().then(|| game_over_text(&lobby).into_bytes())
                },
                &WAVE_PALETTE,
            ))
        };

        let error_line = {
            let error = Arc::clone(&error);
            renderer.add_line(Line::from_generator(move || {
                error.lock().as_deref().map(|msg| Color::Red.paint(msg))
            }))
        };

        let input = renderer.add_line(renderer.create_input_line(INPUT_PROMPT));

        renderer.hide_line(error_line);
        renderer.hide_line(game_over);

        Self {
            id,
            lobby,
            renderer,
            error,
            lines: SessionLines {
                state,
                turn,
                game_over,
                error: error_line,
                input,
            },
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn renderer(&self) -> &LineRenderer<W> {
        &self.renderer
    }

    pub fn state_line(&self) -> LineId {
        self.lines.state
    }

    pub fn turn_line(&self) -> LineId {
        self.lines.turn
    }

    pub fn game_over_line(&self) -> LineId {
        self.lines.game_over
    }

    pub fn error_line(&self) -> LineId {
        self.lines.error
    }

    pub fn input_line(&self) -> LineId {
        self.lines.input
    }

    pub fn pending_error(&self) -> Option<String> {
        self.error.lock().clone()
    }

    /// Raw bytes arrived from the player's terminal.
    ///
    /// Any input dismisses the previous error. Only the first byte counts as a
    /// guess, and only when it is this player's turn.
    pub fn on_input(&self, bytes: &[u8]) {
        *self.error.lock() = None;
        self.renderer.hide_line(self.lines.error);

        self.renderer.had_input();

        if self.lobby.is_over() || !self.lobby.is_turn_of(self.id) {
            return;
        }

        let Some(&guess) = bytes.first() else {
            return;
        };

        if let Err(err) = self.lobby.guess(self.id, guess) {
            debug!(client_id = self.id.0, guess, error = %err, "guess rejected");
            *self.error.lock() = Some(err.to_string());
            self.renderer.show_line(self.lines.error);
        }
    }

    /// A lobby broadcast arrived. Once the game is over the turn indicator
    /// gives way to the game-over line.
    pub fn on_message(&self, _message: &Message) {
        if self.lobby.is_over() {
            self.renderer.hide_line(self.lines.turn);
            self.renderer.show_line(self.lines.game_over);
            self.renderer.hide_line(self.lines.error);
        }
    }

    /// Drive the session until the reader hits EOF or a draw fails.
    pub async fn run<R>(
        &self,
        mut reader: R,
        mut inbox: mpsc::Receiver<Message>,
        redraw_interval: Duration,
    ) -> Result<()>
    where
        R: AsyncRead + Unpin,
    {
        let mut ticker = tokio::time::interval(redraw_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut buf = [0u8; READ_BUFFER_LEN];

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.renderer.draw().context("render cycle failed")?;
                }
                Some(message) = inbox.recv() => {
                    self.on_message(&message);
                }
                read = reader.read(&mut buf) => {
                    let n = read.context("read from client failed")?;
                    if n == 0 {
                        return Ok(());
                    }
                    self.on_input(&buf[..n]);
                }
            }
        }
    }
}

/// Closing line for a finished game, naming the word either way.
pub fn game_over_text(lobby: &Lobby) -> String {
    if lobby.has_won() {
        format!("Game is over, you found \"{}\"", lobby.word())
    } else {
        format!("Game is over, the word was \"{}\"", lobby.word())
    }
}

/// Serve one TCP connection until it closes.
pub async fn run_session(
    socket: TcpStream,
    addr: SocketAddr,
    lobby: Arc<Lobby>,
    redraw_interval: Duration,
) -> Result<()> {
    let (reader, mut writer) = socket.into_split();
    let (sink, mut out_rx) = ChannelSink::channel();

    let write_task = tokio::spawn(async move {
        while let Some(chunk) = out_rx.recv().await {
            if writer.write_all(&chunk).await.is_err() {
                break;
            }
            if writer.flush().await.is_err() {
                break;
            }
        }
    });

    let (id, inbox) = lobby.join(addr);
    info!(client_id = id.0, %addr, players = lobby.player_count(), "client joined");

    let session = Session::new(id, Arc::clone(&lobby), sink);
    let result = session.run(reader, inbox, redraw_interval).await;

    lobby.leave(id);
    info!(client_id = id.0, %addr, players = lobby.player_count(), "client left");

    // Dropping the session drops the sink, which ends the writer task.
    drop(session);
    let _ = write_task.await;

    result
}

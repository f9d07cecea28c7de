//! Shared game table and the clients seated at it.
//!
//! Turn order follows join order: the client at `turn % seats` may guess.
//! Every accepted guess is broadcast to all inboxes and passes the turn on.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::core::{GuessError, Hangman};
use crate::types::{ClientId, INBOX_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub content: Vec<u8>,
    pub kind: MessageKind,
    /// `None` when the lobby itself is the sender.
    pub origin: Option<ClientId>,
}

impl Message {
    pub fn normal(content: impl Into<Vec<u8>>, origin: Option<ClientId>) -> Self {
        Self {
            content: content.into(),
            kind: MessageKind::Normal,
            origin,
        }
    }

    pub fn error(content: impl Into<Vec<u8>>, origin: Option<ClientId>) -> Self {
        Self {
            content: content.into(),
            kind: MessageKind::Error,
            origin,
        }
    }
}

struct Seat {
    id: ClientId,
    addr: SocketAddr,
    inbox: mpsc::Sender<Message>,
}

struct Table {
    game: Hangman,
    turn: usize,
}

/// Lock order: `table` before `seats`.
pub struct Lobby {
    table: Mutex<Table>,
    seats: Mutex<Vec<Seat>>,
    next_id: AtomicUsize,
}

impl Lobby {
    pub fn new(game: Hangman) -> Self {
        Self {
            table: Mutex::new(Table { game, turn: 0 }),
            seats: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    /// Seat a new client. Its inbox starts with the current game state.
    pub fn join(&self, addr: SocketAddr) -> (ClientId, mpsc::Receiver<Message>) {
        let id = ClientId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = mpsc::channel(INBOX_CAPACITY);

        let state = self.state();
        let _ = tx.try_send(Message::normal(state + "\n", None));

        self.seats.lock().push(Seat {
            id,
            addr,
            inbox: tx,
        });
        (id, rx)
    }

    pub fn leave(&self, id: ClientId) {
        self.seats.lock().retain(|seat| seat.id != id);
    }

    /// Deliver to every inbox without waiting. Full inboxes miss the message.
    /// Returns how many inboxes accepted it.
    pub fn broadcast(&self, message: &Message) -> usize {
        let seats = self.seats.lock();
        broadcast_to(&seats, message)
    }

    /// Apply a guess from `id`. Accepted guesses are broadcast and pass the
    /// turn on; the caller is responsible for checking whose turn it is.
    pub fn guess(&self, id: ClientId, guess: u8) -> Result<String, GuessError> {
        let mut table = self.table.lock();
        let next_state = table.game.guess(guess)?.to_string();

        let seats = self.seats.lock();
        broadcast_to(&seats, &Message::normal(next_state.clone() + "\n", Some(id)));
        table.turn += 1;

        Ok(next_state)
    }

    pub fn is_turn_of(&self, id: ClientId) -> bool {
        let turn = self.table.lock().turn;
        let seats = self.seats.lock();
        if seats.is_empty() {
            return false;
        }
        seats[turn % seats.len()].id == id
    }

    pub fn state(&self) -> String {
        self.table.lock().game.state().to_string()
    }

    pub fn is_over(&self) -> bool {
        self.table.lock().game.is_over()
    }

    pub fn has_won(&self) -> bool {
        self.table.lock().game.has_won()
    }

    pub fn word(&self) -> String {
        self.table.lock().game.word()
    }

    pub fn player_count(&self) -> usize {
        self.seats.lock().len()
    }

    pub fn addr_of(&self, id: ClientId) -> Option<SocketAddr> {
        self.seats
            .lock()
            .iter()
            .find(|seat| seat.id == id)
            .map(|seat| seat.addr)
    }
}

fn broadcast_to(seats: &[Seat], message: &Message) -> usize {
    seats
        .iter()
        .filter(|seat| seat.inbox.try_send(message.clone()).is_ok())
        .count()
}

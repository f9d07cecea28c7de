//! Blocking `Write` front for an async socket writer.
//!
//! The renderer writes synchronously under its lock; the socket is owned by a
//! tokio task. `ChannelSink` buffers one render cycle and hands it to that task
//! on `flush`. Once the task has gone away (the socket failed or closed) every
//! write reports `BrokenPipe`, which ends the session.

use std::io::{self, Write};

use tokio::sync::mpsc;

pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Vec<u8>>,
    buf: Vec<u8>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<Vec<u8>>) -> Self {
        Self {
            tx,
            buf: Vec::with_capacity(1024),
        }
    }

    /// Pair a sink with the receiver a writer task should drain.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Vec<u8>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Write for ChannelSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.tx.is_closed() {
            return Err(writer_gone());
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let chunk = std::mem::replace(&mut self.buf, Vec::with_capacity(1024));
        self.tx.send(chunk).map_err(|_| writer_gone())
    }
}

fn writer_gone() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "session writer is closed")
}

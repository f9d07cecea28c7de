//! LineRenderer: redraws registered lines in place over a byte stream.
//!
//! Every cycle first walks the registry backwards undoing what the previous
//! cycle drew (the clear pass), then walks it forwards drawing fresh content
//! (the draw pass). Two counters keep this aligned:
//!
//! - `cursor`: rows below the render origin currently occupied;
//! - per-line clear balance: rows a line has drawn and not yet cleared.
//!
//! Lines with manual cleanup settle only their balance and leave `cursor` to
//! their own escape sequences, which is what lets the input row (partly drawn
//! by the remote terminal's echo) coexist with the generic lines.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::QueueableCommand;
use parking_lot::Mutex;

use crate::ansi::{CarriageReturn, ClearLine, CursorUp, NewLine};
use crate::input::EchoState;
use crate::line::Line;
use crate::registry::{LineId, LineRegistry};

/// Point-in-time view of renderer bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStats {
    pub cursor: usize,
    pub off_the_bottom: usize,
    pub lines: usize,
    pub clear_balances: Vec<u32>,
    pub echo: EchoState,
}

struct RenderState<W> {
    sink: W,
    registry: LineRegistry,
    cursor: usize,
    off_the_bottom: usize,
    echo: EchoState,
}

/// One renderer per session. All methods take the internal lock for their
/// whole duration, so a cycle never interleaves with an input notification.
pub struct LineRenderer<W> {
    state: Mutex<RenderState<W>>,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            state: Mutex::new(RenderState {
                sink,
                registry: LineRegistry::new(),
                cursor: 0,
                off_the_bottom: 0,
                echo: EchoState::default(),
            }),
        }
    }

    pub fn add_line(&self, line: Line) -> LineId {
        self.state.lock().registry.add(line)
    }

    pub fn remove_line(&self, id: LineId) {
        self.state.lock().registry.remove(id);
    }

    pub fn show_line(&self, id: LineId) {
        self.state.lock().registry.show(id);
    }

    pub fn hide_line(&self, id: LineId) {
        self.state.lock().registry.hide(id);
    }

    /// Build the input row for this renderer. It still has to be added.
    pub fn create_input_line(&self, prompt: char) -> Line {
        Line::input(prompt)
    }

    /// Run one clear pass and one draw pass.
    ///
    /// A failed write aborts the rest of the cycle; the terminal is then in an
    /// unknown state and the caller should drop the session.
    pub fn draw(&self) -> Result<()> {
        let mut state = self.state.lock();
        state
            .clear_pass()
            .context("failed to write clear pass to session sink")?;
        state
            .draw_pass()
            .context("failed to write draw pass to session sink")?;
        Ok(())
    }

    /// Record that the remote terminal echoed input, pushing the cursor down
    /// one row behind our back.
    pub fn had_input(&self) {
        let mut state = self.state.lock();
        state.cursor += 1;
        state.off_the_bottom += 1;
        state.echo.need_to_clear_input = true;
    }

    pub fn stats(&self) -> RenderStats {
        let state = self.state.lock();
        RenderStats {
            cursor: state.cursor,
            off_the_bottom: state.off_the_bottom,
            lines: state.registry.len(),
            clear_balances: state.registry.clear_balances().to_vec(),
            echo: state.echo,
        }
    }

    pub fn is_hidden(&self, id: LineId) -> Option<bool> {
        self.state.lock().registry.is_hidden(id)
    }

    pub fn clear_balance(&self, id: LineId) -> Option<u32> {
        self.state.lock().registry.clear_balance(id)
    }

    /// Run `f` against the sink under the renderer lock.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.state.lock().sink)
    }

    pub fn into_sink(self) -> W {
        self.state.into_inner().sink
    }
}

impl<W: Write> RenderState<W> {
    fn clear_pass(&mut self) -> io::Result<()> {
        let Self {
            sink,
            registry,
            cursor,
            off_the_bottom,
            echo,
        } = self;

        let pushed = std::mem::take(off_the_bottom);
        for _ in 0..pushed {
            sink.queue(CarriageReturn)?.queue(ClearLine)?.queue(CursorUp)?;
        }
        *cursor = cursor.saturating_sub(pushed);

        for slot in registry.slots_mut().rev() {
            if *slot.clear_balance == 0 {
                continue;
            }

            if let Some(bytes) = slot.line.manual_cleanup(echo) {
                sink.write_all(&bytes)?;
                *slot.clear_balance -= 1;
                continue;
            }

            if slot.line.with_next_line() {
                sink.queue(CarriageReturn)?.queue(ClearLine)?.queue(CursorUp)?;
                *cursor = cursor.saturating_sub(1);
                *slot.clear_balance -= 1;
            }
        }

        Ok(())
    }

    fn draw_pass(&mut self) -> io::Result<()> {
        let Self {
            sink,
            registry,
            cursor,
            echo,
            ..
        } = self;

        for slot in registry.slots_mut() {
            if slot.hidden {
                continue;
            }

            let next = slot.line.next(echo);

            sink.queue(ClearLine)?;
            if let Some(bytes) = next {
                sink.write_all(&bytes)?;
                *slot.clear_balance += 1;
            }

            if slot.line.with_next_line() {
                sink.queue(NewLine)?;
                *cursor += 1;
            }
        }

        sink.flush()
    }
}

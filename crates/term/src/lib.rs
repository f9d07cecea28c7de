//! In-place multi-line terminal renderer.
//!
//! Renders a handful of independently updating rows over a raw byte stream
//! (a remote terminal on the other end of a TCP socket), redrawing them every
//! cycle without losing track of where the cursor is.
//!
//! There is no screen model and no per-cell diffing: every cycle clears what
//! the previous cycle drew and draws whole lines again. The only thing tracked
//! is row accounting, see [`renderer`].
//!
//! - [`ansi`]: the fixed escape vocabulary, as crossterm commands
//! - [`line`]: content producers plus layout options
//! - [`registry`]: ordered lines with visibility and clear balance
//! - [`renderer`]: the locked clear/draw cycle
//! - [`animate`]: color-wave decoration
//! - [`input`]: the input row that shares its line with remote echo

pub mod animate;
pub mod ansi;
pub mod input;
pub mod line;
pub mod registry;
pub mod renderer;

pub use animate::{animate, paint_wave};
pub use ansi::Color;
pub use input::EchoState;
pub use line::{Cleanup, Generator, Line, Options};
pub use registry::{LineId, LineRegistry};
pub use renderer::{LineRenderer, RenderStats};

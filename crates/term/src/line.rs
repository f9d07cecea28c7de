//! Renderable lines.
//!
//! A [`Line`] is one logical row: something that produces bytes every render
//! cycle (or nothing, meaning "skip this cycle") plus [`Options`] describing
//! how the row is laid out and cleaned up.

use std::fmt;

use crate::animate::animate;
use crate::ansi::Color;
use crate::input::{self, EchoState};

/// Content producer. `None` means "draw nothing this cycle".
pub type Generator = Box<dyn FnMut() -> Option<Vec<u8>> + Send>;

/// Bytes emitted instead of the generic row clear.
pub type Cleanup = Box<dyn FnMut() -> Vec<u8> + Send>;

pub struct Options {
    /// The line occupies a terminal row and is followed by a newline.
    pub with_next_line: bool,
    /// Replaces the generic clear sequence. The producer owns its own cursor
    /// movement; the renderer only settles the line's clear balance.
    pub manual_cleanup: Option<Cleanup>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            with_next_line: true,
            manual_cleanup: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("with_next_line", &self.with_next_line)
            .field("manual_cleanup", &self.manual_cleanup.is_some())
            .finish()
    }
}

enum Source {
    Generator(Generator),
    /// Occupies a row but never has content to clear.
    Spacer,
    /// The input row; its behaviour depends on renderer state.
    Input { prompt: char },
}

pub struct Line {
    source: Source,
    options: Options,
}

impl Line {
    /// A full row (`with_next_line = true`).
    pub fn from_generator<F>(generator: F) -> Self
    where
        F: FnMut() -> Option<Vec<u8>> + Send + 'static,
    {
        Self::with_options(generator, Options::default())
    }

    /// Content written in place, without consuming a row.
    pub fn inline_from_generator<F>(generator: F) -> Self
    where
        F: FnMut() -> Option<Vec<u8>> + Send + 'static,
    {
        Self::with_options(
            generator,
            Options {
                with_next_line: false,
                manual_cleanup: None,
            },
        )
    }

    pub fn with_options<F>(generator: F, options: Options) -> Self
    where
        F: FnMut() -> Option<Vec<u8>> + Send + 'static,
    {
        Self {
            source: Source::Generator(Box::new(generator)),
            options,
        }
    }

    /// A full row whose content is painted as a moving color wave.
    pub fn animated<F>(generator: F, palette: &[Color]) -> Self
    where
        F: FnMut() -> Option<Vec<u8>> + Send + 'static,
    {
        Self::from_generator(animate(generator, palette))
    }

    /// An empty row. It has nothing to clear, so the clear pass never climbs
    /// back over it: the block below a visible spacer moves down one row per
    /// cycle. Keep spacers hidden unless that is wanted.
    pub fn spacer() -> Self {
        Self {
            source: Source::Spacer,
            options: Options::default(),
        }
    }

    /// The input row, prefixed with `prompt`.
    pub fn input(prompt: char) -> Self {
        Self {
            source: Source::Input { prompt },
            options: Options {
                with_next_line: false,
                manual_cleanup: None,
            },
        }
    }

    pub fn with_next_line(&self) -> bool {
        self.options.with_next_line
    }

    pub fn has_manual_cleanup(&self) -> bool {
        matches!(self.source, Source::Input { .. }) || self.options.manual_cleanup.is_some()
    }

    pub(crate) fn next(&mut self, echo: &mut EchoState) -> Option<Vec<u8>> {
        match &mut self.source {
            Source::Generator(generator) => generator(),
            Source::Spacer => None,
            Source::Input { prompt } => Some(input::draw(*prompt, echo)),
        }
    }

    /// `None` when the line uses the generic clear sequence.
    pub(crate) fn manual_cleanup(&mut self, echo: &mut EchoState) -> Option<Vec<u8>> {
        if let Source::Input { .. } = self.source {
            return Some(input::cleanup(echo));
        }
        self.options.manual_cleanup.as_mut().map(|cleanup| cleanup())
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.source {
            Source::Generator(_) => "generator".to_string(),
            Source::Spacer => "spacer".to_string(),
            Source::Input { prompt } => format!("input({prompt})"),
        };
        f.debug_struct("Line")
            .field("kind", &kind)
            .field("options", &self.options)
            .finish()
    }
}

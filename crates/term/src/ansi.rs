//! Fixed ANSI vocabulary spoken to the remote terminal.
//!
//! The byte sequences are fixed: remote clients are plain raw-mode terminals
//! (`nc` and friends), so we cannot rely on crossterm's own encodings (which
//! prefer DECSC/DECRC and 256-color escapes). Each sequence is still a
//! `crossterm::Command`, so it can be queued into any writer with
//! `QueueableCommand::queue` exactly like crossterm's built-in commands.

use std::fmt;

use crossterm::Command;

macro_rules! ansi_commands {
    ($($(#[$meta:meta])* $name:ident => $seq:expr;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl $name {
                pub const ANSI: &'static str = $seq;
            }

            impl Command for $name {
                fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
                    f.write_str(Self::ANSI)
                }

                #[cfg(windows)]
                fn execute_winapi(&self) -> std::io::Result<()> {
                    Err(ansi_only())
                }

                #[cfg(windows)]
                fn is_ansi_code_supported(&self) -> bool {
                    true
                }
            }
        )*
    };
}

ansi_commands! {
    /// Move the cursor up one row.
    CursorUp => "\x1b[1A";
    /// Move the cursor down one row.
    CursorDown => "\x1b[1B";
    /// Clear the whole current row.
    ClearLine => "\x1b[2K";
    /// Clear from the cursor to the end of the row.
    ClearToEnd => "\x1b[0K";
    SavePosition => "\x1b[s";
    RestorePosition => "\x1b[u";
    CarriageReturn => "\r";
    NewLine => "\n";
}

/// Foreground colors understood by the remote terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    Red,
    /// 256-color index 208.
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl Color {
    pub const fn ansi(self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Red => "\x1b[31m",
            Color::Orange => "\x1b[38;5;208m",
            Color::Yellow => "\x1b[33m",
            Color::Green => "\x1b[32m",
            Color::Cyan => "\x1b[36m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
        }
    }

    /// Wrap `text` in this color followed by a reset.
    pub fn paint(self, text: impl AsRef<[u8]>) -> Vec<u8> {
        let text = text.as_ref();
        let mut out = Vec::with_capacity(text.len() + 16);
        out.extend_from_slice(self.ansi().as_bytes());
        out.extend_from_slice(text);
        out.extend_from_slice(Color::Reset.ansi().as_bytes());
        out
    }
}

impl Command for Color {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str(self.ansi())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(ansi_only())
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

#[cfg(windows)]
fn ansi_only() -> std::io::Error {
    std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "remote terminal commands are ANSI-only",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::QueueableCommand;

    #[test]
    fn commands_queue_their_exact_bytes() {
        let mut out: Vec<u8> = Vec::new();
        out.queue(CarriageReturn).unwrap();
        out.queue(ClearLine).unwrap();
        out.queue(CursorUp).unwrap();
        assert_eq!(out, b"\r\x1b[2K\x1b[1A");
    }

    #[test]
    fn cursor_save_restore_use_csi_form() {
        let mut out: Vec<u8> = Vec::new();
        out.queue(SavePosition).unwrap();
        out.queue(RestorePosition).unwrap();
        out.queue(ClearToEnd).unwrap();
        assert_eq!(out, b"\x1b[s\x1b[u\x1b[0K");
    }

    #[test]
    fn orange_is_256_color_indexed() {
        let mut out: Vec<u8> = Vec::new();
        out.queue(Color::Orange).unwrap();
        assert_eq!(out, b"\x1b[38;5;208m");
    }

    #[test]
    fn paint_wraps_with_reset() {
        assert_eq!(Color::Red.paint("oops"), b"\x1b[31moops\x1b[0m");
    }
}

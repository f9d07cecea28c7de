//! The input row.
//!
//! The remote terminal echoes keystrokes itself, so part of what sits on the
//! input row was never written by us. Drawing and clearing this row are
//! therefore asymmetric: clearing saves the cursor (which sits right after the
//! echoed text), wipes the row below and climbs above the input row; drawing
//! comes back down and either wipes the stale echo or restores the saved
//! cursor so the player keeps typing where they left off.

use crate::ansi::{
    CarriageReturn, ClearLine, ClearToEnd, CursorDown, CursorUp, RestorePosition, SavePosition,
};

/// Renderer scalars shared with the input row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EchoState {
    /// Echoed input must be wiped on the next input-row draw.
    pub need_to_clear_input: bool,
    /// A cursor-save point emitted by the last cleanup is still valid.
    pub has_saved_position: bool,
}

pub(crate) fn draw(prompt: char, echo: &mut EchoState) -> Vec<u8> {
    let mut buf = Vec::with_capacity(24);
    buf.extend_from_slice(CursorDown::ANSI.as_bytes());

    let mut utf8 = [0u8; 4];
    buf.extend_from_slice(prompt.encode_utf8(&mut utf8).as_bytes());
    buf.push(b' ');

    if echo.need_to_clear_input {
        buf.extend_from_slice(ClearToEnd::ANSI.as_bytes());
        echo.need_to_clear_input = false;
        echo.has_saved_position = false;
    }
    if echo.has_saved_position {
        buf.extend_from_slice(RestorePosition::ANSI.as_bytes());
    }

    buf
}

pub(crate) fn cleanup(echo: &mut EchoState) -> Vec<u8> {
    let mut buf = Vec::with_capacity(24);

    buf.extend_from_slice(SavePosition::ANSI.as_bytes());
    echo.has_saved_position = true;

    buf.extend_from_slice(CursorDown::ANSI.as_bytes());
    buf.extend_from_slice(CarriageReturn::ANSI.as_bytes());
    buf.extend_from_slice(ClearLine::ANSI.as_bytes());
    buf.extend_from_slice(CursorUp::ANSI.as_bytes());

    buf.extend_from_slice(CursorUp::ANSI.as_bytes());

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_draw_is_prompt_only() {
        let mut echo = EchoState::default();
        assert_eq!(draw('>', &mut echo), b"\x1b[1B> ");
        assert_eq!(echo, EchoState::default());
    }

    #[test]
    fn pending_echo_is_wiped_and_drops_saved_position() {
        let mut echo = EchoState {
            need_to_clear_input: true,
            has_saved_position: true,
        };
        assert_eq!(draw('>', &mut echo), b"\x1b[1B> \x1b[0K");
        assert_eq!(echo, EchoState::default());
    }

    #[test]
    fn saved_position_is_restored() {
        let mut echo = EchoState::default();
        let cleared = cleanup(&mut echo);
        assert_eq!(cleared, b"\x1b[s\x1b[1B\r\x1b[2K\x1b[1A\x1b[1A");
        assert!(echo.has_saved_position);

        assert_eq!(draw('$', &mut echo), b"\x1b[1B$ \x1b[u");
        assert!(echo.has_saved_position);
    }

    #[test]
    fn prompt_may_be_multibyte() {
        let mut echo = EchoState::default();
        assert_eq!(draw('›', &mut echo), "\x1b[1B› ".as_bytes());
    }
}

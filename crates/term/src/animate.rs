//! Color-wave decoration for line content.

use crate::ansi::Color;

/// Wrap a content producer so every byte gets its own palette color, the
/// pattern advancing by one step per invocation.
///
/// Absent content passes through untouched. An empty palette leaves content
/// uncolored.
pub fn animate<F>(mut base: F, palette: &[Color]) -> impl FnMut() -> Option<Vec<u8>> + Send + 'static
where
    F: FnMut() -> Option<Vec<u8>> + Send + 'static,
{
    let palette = palette.to_vec();
    let mut shift = 0usize;

    move || {
        let current = shift;
        shift = shift.wrapping_add(1);

        let msg = base()?;
        if palette.is_empty() {
            return Some(msg);
        }
        Some(paint_wave(&msg, &palette, current))
    }
}

/// Paint one frame of the wave: a lead escape `palette[|shift - 1| % len]`,
/// then byte `i` preceded by `palette[(i + shift) % len]`.
///
/// `palette` must be non-empty.
pub fn paint_wave(msg: &[u8], palette: &[Color], shift: usize) -> Vec<u8> {
    let n = palette.len();
    let offset = shift % n;

    let mut out = Vec::with_capacity(msg.len() * 6 + 16);
    out.extend_from_slice(palette[shift.abs_diff(1) % n].ansi().as_bytes());
    for (i, byte) in msg.iter().enumerate() {
        out.extend_from_slice(palette[(i % n + offset) % n].ansi().as_bytes());
        out.push(*byte);
    }
    out.extend_from_slice(Color::Reset.ansi().as_bytes());
    out
}

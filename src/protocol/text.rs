//! # Text Styling Commands
//!
//! ESC/POS commands controlling how subsequent text bytes render:
//! alignment, emphasis, underline, character size, and code page.
//!
//! Style commands are modal — a style stays in effect until explicitly
//! changed or the printer is re-initialized. The IR optimizer relies on
//! this to drop style changes that would not alter the current state.

use serde::{Deserialize, Serialize};

use super::commands::{ESC, GS};

/// Horizontal alignment for subsequent lines.
///
/// Alignment applies to whole lines; the printer ignores the command
/// mid-line, so it must be issued before any text of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// # Select Justification (ESC a n)
///
/// ## Protocol Details
///
/// | Format  | Bytes   | n |
/// |---------|---------|---|
/// | ASCII   | ESC a n | 0 left, 1 center, 2 right |
/// | Hex     | 1B 61 n | |
///
/// ## Example
///
/// ```
/// use resibo::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
#[inline]
pub fn align(alignment: Alignment) -> Vec<u8> {
    let n = match alignment {
        Alignment::Left => 0,
        Alignment::Center => 1,
        Alignment::Right => 2,
    };
    vec![ESC, b'a', n]
}

/// # Emphasis On (ESC E 1)
///
/// | Format | Bytes    |
/// |--------|----------|
/// | ASCII  | ESC E 1  |
/// | Hex    | 1B 45 01 |
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// # Emphasis Off (ESC E 0)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

/// # Underline On (ESC - 1)
///
/// One-dot-thick underline. ESC/POS also defines a two-dot mode (n=2)
/// that this crate does not emit.
#[inline]
pub fn underline_on() -> Vec<u8> {
    vec![ESC, b'-', 1]
}

/// # Underline Off (ESC - 0)
#[inline]
pub fn underline_off() -> Vec<u8> {
    vec![ESC, b'-', 0]
}

/// # Select Character Size (GS ! n)
///
/// `height` and `width` are multipliers minus one: 0 means 1x, 1 means
/// 2x, up to 7 for 8x. The printer packs width into the high nibble and
/// height into the low nibble.
///
/// ## Protocol Details
///
/// | Format  | Bytes  | n |
/// |---------|--------|---|
/// | ASCII   | GS ! n | (width << 4) \| height |
/// | Hex     | 1D 21 n | |
///
/// ## Example
///
/// ```
/// use resibo::protocol::text::size;
///
/// // double height + double width
/// assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x11]);
/// // back to normal
/// assert_eq!(size(0, 0), vec![0x1D, 0x21, 0x00]);
/// ```
#[inline]
pub fn size(height: u8, width: u8) -> Vec<u8> {
    let n = ((width.min(7)) << 4) | (height.min(7));
    vec![GS, b'!', n]
}

/// # Select Code Page (ESC t n)
///
/// Selects the character table for bytes 0x80-0xFF. Page 0 is Code Page
/// 437, which [`super::cp437`] targets.
///
/// | Format | Bytes   |
/// |--------|---------|
/// | ASCII  | ESC t n |
/// | Hex    | 1B 74 n |
#[inline]
pub fn codepage(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(align(Alignment::Right), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold_on(), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold_off(), vec![0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(underline_on(), vec![0x1B, 0x2D, 0x01]);
        assert_eq!(underline_off(), vec![0x1B, 0x2D, 0x00]);
    }

    #[test]
    fn test_size_packing() {
        // width in the high nibble, height in the low nibble
        assert_eq!(size(0, 0), vec![0x1D, 0x21, 0x00]);
        assert_eq!(size(1, 0), vec![0x1D, 0x21, 0x01]);
        assert_eq!(size(0, 1), vec![0x1D, 0x21, 0x10]);
        assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x11]);
    }

    #[test]
    fn test_size_clamps_to_8x() {
        assert_eq!(size(9, 9), vec![0x1D, 0x21, 0x77]);
    }

    #[test]
    fn test_codepage() {
        assert_eq!(codepage(0), vec![0x1B, 0x74, 0x00]);
    }

    #[test]
    fn test_alignment_default_is_left() {
        assert_eq!(Alignment::default(), Alignment::Left);
    }
}

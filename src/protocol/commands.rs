//! # ESC/POS Control Commands
//!
//! Printer control commands shared by ESC/POS-compatible thermal
//! receipt printers (Epson TM series and the many 58mm/80mm clones
//! reachable over Bluetooth bridges).
//!
//! ## Protocol Overview
//!
//! ESC/POS interleaves raw text bytes with control sequences:
//!
//! - Single byte: `LF`, `HT`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC J n`, `GS V m n`
//!
//! ## Reference
//!
//! Based on the Epson "ESC/POS Application Programming Guide",
//! cross-checked against the command subset RawBT-class bridges accept.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the
/// start of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Prefix for extended commands: character size (`GS !`), paper cut
/// (`GS V`). Hex: 0x1D, Decimal: 29.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints the contents of the line buffer and advances the paper by the
/// current line spacing.
pub const LF: u8 = 0x0A;

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Every receipt
/// starts with this command so a job never inherits styling left over
/// from the previous one.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Emphasis and underline disabled
/// - Character size back to 1x1
/// - Alignment back to left
///
/// ## Example
///
/// ```
/// use resibo::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Feed n Lines (ESC d n)
///
/// Prints the line buffer and feeds the paper forward by `n` text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d n  |
/// | Hex     | 1B 64 n  |
/// | Decimal | 27 100 n |
///
/// ## Example
///
/// ```
/// use resibo::protocol::commands;
///
/// assert_eq!(commands::feed_lines(4), vec![0x1B, 0x64, 4]);
/// ```
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Micro Feed (ESC J n)
///
/// Feeds paper forward by `n` vertical motion units. At the default
/// motion unit on a 203 DPI mechanism one unit is 1/203 inch, so
/// 8 units is very close to 1mm.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC J n |
/// | Hex     | 1B 4A n |
/// | Decimal | 27 74 n |
#[inline]
pub fn feed_units(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// Feed paper by millimeters (convenience wrapper for `feed_units`).
///
/// Converts millimeters to motion units at 8 units/mm (203 DPI) and
/// clamps to the one-byte parameter range.
///
/// ## Example
///
/// ```
/// use resibo::protocol::commands;
///
/// // 3mm = 24 units
/// assert_eq!(commands::feed_mm(3.0), vec![0x1B, 0x4A, 24]);
/// ```
#[inline]
pub fn feed_mm(mm: f32) -> Vec<u8> {
    let units = (mm * 8.0).round().clamp(0.0, 255.0) as u8;
    feed_units(units)
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Feed to Cut Position, Then Full Cut (GS V A 0)
///
/// Feeds the paper so the last printed line clears the cutter, then
/// cuts straight through. The usual end-of-receipt command.
///
/// ## Protocol Details
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | GS V A 0   |
/// | Hex     | 1D 56 41 00|
/// | Decimal | 29 86 65 0 |
#[inline]
pub fn cut_full_feed() -> Vec<u8> {
    vec![GS, b'V', b'A', 0]
}

/// # Feed to Cut Position, Then Partial Cut (GS V B 0)
///
/// Same feed behavior as [`cut_full_feed`], but leaves a small uncut
/// hinge so the receipt hangs on the roll instead of dropping.
///
/// ## Protocol Details
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | GS V B 0   |
/// | Hex     | 1D 56 42 00|
/// | Decimal | 29 86 66 0 |
#[inline]
pub fn cut_partial_feed() -> Vec<u8> {
    vec![GS, b'V', b'B', 0]
}

// ============================================================================
// TESTS
// ============================================================================

//! # Code Page 437 Encoding
//!
//! Converts receipt text between Unicode and the CP437 single-byte
//! encoding the printer interprets once `ESC t 0` has been selected.
//!
//! ASCII (U+0000-U+007F) passes through unchanged in both directions.
//! The upper half of the table is limited to the Latin repertoire that
//! shows up on receipts — accented product and customer names, currency
//! marks, degree and fraction signs. Characters outside the table are
//! replaced with `?` and logged.

use tracing::warn;

/// Unicode ↔ CP437 pairs for the upper half (0x80-0xFF) of the code
/// page, restricted to the Latin/currency/punctuation subset. One table
/// drives both directions so encode and decode cannot drift apart.
const CP437_HIGH: &[(u8, char)] = &[
    (0x80, 'Ç'),
    (0x81, 'ü'),
    (0x82, 'é'),
    (0x83, 'â'),
    (0x84, 'ä'),
    (0x85, 'à'),
    (0x86, 'å'),
    (0x87, 'ç'),
    (0x88, 'ê'),
    (0x89, 'ë'),
    (0x8A, 'è'),
    (0x8B, 'ï'),
    (0x8C, 'î'),
    (0x8D, 'ì'),
    (0x8E, 'Ä'),
    (0x8F, 'Å'),
    (0x90, 'É'),
    (0x91, 'æ'),
    (0x92, 'Æ'),
    (0x93, 'ô'),
    (0x94, 'ö'),
    (0x95, 'ò'),
    (0x96, 'û'),
    (0x97, 'ù'),
    (0x98, 'ÿ'),
    (0x99, 'Ö'),
    (0x9A, 'Ü'),
    (0x9B, '¢'),
    (0x9C, '£'),
    (0x9D, '¥'),
    (0xA0, 'á'),
    (0xA1, 'í'),
    (0xA2, 'ó'),
    (0xA3, 'ú'),
    (0xA4, 'ñ'),
    (0xA5, 'Ñ'),
    (0xA6, 'ª'),
    (0xA7, 'º'),
    (0xA8, '¿'),
    (0xAB, '½'),
    (0xAC, '¼'),
    (0xAD, '¡'),
    (0xAE, '«'),
    (0xAF, '»'),
    (0xE1, 'ß'),
    (0xF6, '÷'),
    (0xF8, '°'),
    (0xF1, '±'),
    (0xFD, '²'),
    (0xFA, '·'),
    (0xFF, '\u{00A0}'),
];

/// Encode a Unicode string as CP437 bytes.
///
/// - ASCII: passed through as-is
/// - Mapped Latin subset: single CP437 byte
/// - Anything else: replaced with `?`, with a warning logged
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if (ch as u32) < 0x80 {
            out.push(ch as u8);
        } else if let Some(&(byte, _)) = CP437_HIGH.iter().find(|&&(_, c)| c == ch) {
            out.push(byte);
        } else {
            warn!(
                character = %ch,
                codepoint = format!("U+{:04X}", ch as u32),
                "no CP437 mapping, substituting '?'"
            );
            out.push(b'?');
        }
    }
    out
}

/// Decode a single CP437 byte back to a character.
///
/// Bytes outside ASCII and the mapped subset come back as `?` — this is
/// the best-effort direction used by the preview decoder.
pub fn decode_byte(byte: u8) -> char {
    if byte < 0x80 {
        byte as char
    } else {
        CP437_HIGH
            .iter()
            .find(|&&(b, _)| b == byte)
            .map(|&(_, c)| c)
            .unwrap_or('?')
    }
}

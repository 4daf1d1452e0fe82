//! # Preview Decoder
//!
//! Decodes an encoded receipt byte stream back into a structural
//! description — lines with their alignment and emphasis — so the UI
//! can show what will print before committing paper to it.
//!
//! This is a best-effort debug view, not a pixel-faithful rendering:
//! it recognizes the command subset the encoder emits and skips over
//! anything else.

use crate::error::ResiboError;
use crate::ir::StyleState;
use crate::protocol::commands::{ESC, GS, HT, LF};
use crate::protocol::cp437;
use crate::protocol::text::Alignment;
use std::fmt;

/// One decoded line of the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub text: String,
    pub align: Alignment,
    pub bold: bool,
    pub underline: bool,
    /// Double (or more) character width was active.
    pub wide: bool,
    /// Double (or more) character height was active.
    pub tall: bool,
}

/// Structural view of an encoded receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    pub lines: Vec<PreviewLine>,
    /// A cut command was present.
    pub cut: bool,
    /// Total paper fed outside of line spacing, in motion units
    /// (8 units per millimeter).
    pub fed_units: u32,
}

impl Preview {
    /// Render the preview as plain text, padding each line according to
    /// its alignment within `columns` character cells.
    pub fn render(&self, columns: usize) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let cells = line.text.chars().count() * if line.wide { 2 } else { 1 };
            let pad = match line.align {
                Alignment::Left => 0,
                Alignment::Center => columns.saturating_sub(cells) / 2,
                Alignment::Right => columns.saturating_sub(cells),
            };
            out.push_str(&" ".repeat(pad));
            out.push_str(&line.text);
            out.push('\n');
        }
        if self.cut {
            out.push_str(&"- ".repeat(columns / 2));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(32))
    }
}

/// Decode an ESC/POS byte stream into a [`Preview`].
///
/// Fails only when the stream ends in the middle of a command it was
/// parsing; unknown commands are skipped.
pub fn decode(bytes: &[u8]) -> Result<Preview, ResiboError> {
    Decoder::new(bytes).run()
}

struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: StyleState,
    buffer: String,
    /// Style captured when the first character of the line arrived.
    line_style: Option<StyleState>,
    preview: Preview,
}

impl<'a> Decoder<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            state: StyleState::default(),
            buffer: String::new(),
            line_style: None,
            preview: Preview::default(),
        }
    }

    fn next_byte(&mut self) -> Result<u8, ResiboError> {
        let byte = self
            .bytes
            .get(self.pos)
            .copied()
            .ok_or(ResiboError::TruncatedStream { offset: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    fn flush_line(&mut self) {
        let style = self.line_style.take().unwrap_or_else(|| self.state.clone());
        self.preview.lines.push(PreviewLine {
            text: std::mem::take(&mut self.buffer),
            align: style.alignment,
            bold: style.bold,
            underline: style.underline,
            wide: style.width_mult > 0,
            tall: style.height_mult > 0,
        });
    }

    fn push_char(&mut self, ch: char) {
        if self.buffer.is_empty() {
            self.line_style = Some(self.state.clone());
        }
        self.buffer.push(ch);
    }

    fn run(mut self) -> Result<Preview, ResiboError> {
        while self.pos < self.bytes.len() {
            let byte = self.next_byte()?;
            match byte {
                ESC => self.escape_command()?,
                GS => self.group_command()?,
                LF => self.flush_line(),
                HT => self.push_char(' '),
                b if b < 0x20 => {} // other control bytes: ignore
                b => {
                    let ch = cp437::decode_byte(b);
                    self.push_char(ch);
                }
            }
        }

        // A trailing run without a final LF still shows up
        if !self.buffer.is_empty() {
            self.flush_line();
        }

        Ok(self.preview)
    }

    fn escape_command(&mut self) -> Result<(), ResiboError> {
        let command = self.next_byte()?;
        match command {
            // ESC @ resets the printer and drops the line buffer
            b'@' => {
                self.state = StyleState::default();
                self.buffer.clear();
                self.line_style = None;
            }
            b'a' => {
                self.state.alignment = match self.next_byte()? {
                    1 => Alignment::Center,
                    2 => Alignment::Right,
                    _ => Alignment::Left,
                };
            }
            b'E' => {
                self.state.bold = self.next_byte()? != 0;
            }
            b'-' => {
                self.state.underline = self.next_byte()? != 0;
            }
            b't' => {
                self.state.codepage = self.next_byte()?;
            }
            b'J' => {
                let units = self.next_byte()?;
                self.preview.fed_units += units as u32;
            }
            b'd' => {
                let lines = self.next_byte()?;
                self.flush_line();
                // One text line is roughly 24 dots of feed
                self.preview.fed_units += lines as u32 * 24;
            }
            // Unknown ESC command: skip the command byte, carry on
            _ => {}
        }
        Ok(())
    }

    fn group_command(&mut self) -> Result<(), ResiboError> {
        let command = self.next_byte()?;
        match command {
            b'!' => {
                let n = self.next_byte()?;
                self.state.width_mult = n >> 4;
                self.state.height_mult = n & 0x0F;
            }
            b'V' => {
                let mode = self.next_byte()?;
                // Modes 'A' (65) and 'B' (66) take a feed parameter
                if mode == b'A' || mode == b'B' {
                    self.next_byte()?;
                }
                self.preview.cut = true;
            }
            // Unknown GS command: skip the command byte, carry on
            _ => {}
        }
        Ok(())
    }
}

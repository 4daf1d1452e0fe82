//! # Code Generation
//!
//! Converts IR programs to ESC/POS bytes. Text runs are CP437-encoded
//! here, so everything upstream of codegen works in plain Unicode.

use super::ops::{Op, Program};
use crate::protocol::{commands, cp437, text};

impl Program {
    /// Compile the IR program to ESC/POS bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for op in &self.ops {
            match op {
                // ===== Printer Control =====
                Op::Init => {
                    out.extend(commands::init());
                }
                Op::Cut { partial } => {
                    if *partial {
                        out.extend(commands::cut_partial_feed());
                    } else {
                        out.extend(commands::cut_full_feed());
                    }
                }
                Op::Feed { units } => {
                    out.extend(commands::feed_units(*units));
                }

                // ===== Style Changes =====
                Op::SetAlign(alignment) => {
                    out.extend(text::align(*alignment));
                }
                Op::SetBold(enabled) => {
                    if *enabled {
                        out.extend(text::bold_on());
                    } else {
                        out.extend(text::bold_off());
                    }
                }
                Op::SetUnderline(enabled) => {
                    if *enabled {
                        out.extend(text::underline_on());
                    } else {
                        out.extend(text::underline_off());
                    }
                }
                Op::SetSize { height, width } => {
                    out.extend(text::size(*height, *width));
                }
                Op::SetCodepage(page) => {
                    out.extend(text::codepage(*page));
                }

                // ===== Content =====
                Op::Text(s) => {
                    out.extend(cp437::encode(s));
                }
                Op::Newline => {
                    out.push(commands::LF);
                }
                Op::Raw(bytes) => {
                    out.extend(bytes);
                }
            }
        }

        out
    }
}

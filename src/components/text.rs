//! # Text Component
//!
//! A single run of text with optional styling.

use super::Component;
use crate::ir::Op;
use crate::protocol::text::Alignment;

/// A text component with optional styling.
///
/// ## Example
///
/// ```
/// use resibo::components::Text;
///
/// // Simple line
/// let line = Text::new("Thank you!");
///
/// // Emphasized double-size header
/// let header = Text::new("BREW & SHINE").center().bold().size(1, 1);
/// ```
pub struct Text {
    content: String,
    newline: bool,
    bold: bool,
    underline: bool,
    alignment: Option<Alignment>,
    height_mult: u8,
    width_mult: u8,
}

impl Text {
    /// Create a new text line.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            newline: true,
            bold: false,
            underline: false,
            alignment: None,
            height_mult: 0,
            width_mult: 0,
        }
    }

    /// Create inline text (no trailing newline).
    pub fn inline(content: impl Into<String>) -> Self {
        let mut text = Self::new(content);
        text.newline = false;
        text
    }

    /// Make the text bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Underline the text.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Center the text.
    pub fn center(mut self) -> Self {
        self.alignment = Some(Alignment::Center);
        self
    }

    /// Right-align the text.
    pub fn right(mut self) -> Self {
        self.alignment = Some(Alignment::Right);
        self
    }

    /// Left-align the text (explicit).
    pub fn left(mut self) -> Self {
        self.alignment = Some(Alignment::Left);
        self
    }

    /// Set character size multipliers.
    /// height/width: 0 = 1x, 1 = 2x, up to 7 = 8x.
    pub fn size(mut self, height: u8, width: u8) -> Self {
        self.height_mult = height.min(7);
        self.width_mult = width.min(7);
        self
    }

    /// Double the width only (keeps normal height).
    pub fn double_wide(self) -> Self {
        self.size(0, 1)
    }
}

impl Component for Text {
    fn emit(&self, ops: &mut Vec<Op>) {
        if let Some(alignment) = self.alignment {
            ops.push(Op::SetAlign(alignment));
        }
        if self.bold {
            ops.push(Op::SetBold(true));
        }
        if self.underline {
            ops.push(Op::SetUnderline(true));
        }
        if self.height_mult > 0 || self.width_mult > 0 {
            ops.push(Op::SetSize {
                height: self.height_mult,
                width: self.width_mult,
            });
        }

        ops.push(Op::Text(self.content.clone()));
        if self.newline {
            ops.push(Op::Newline);
        }

        // Reset what was changed, in reverse order. Alignment persists
        // deliberately (it applies per line anyway).
        if self.height_mult > 0 || self.width_mult > 0 {
            ops.push(Op::SetSize {
                height: 0,
                width: 0,
            });
        }
        if self.underline {
            ops.push(Op::SetUnderline(false));
        }
        if self.bold {
            ops.push(Op::SetBold(false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_simple_text() {
        let ir = Text::new("Latte").compile();
        assert!(ir.ops.iter().any(|op| *op == Op::Text("Latte".into())));
        assert!(ir.ops.iter().any(|op| *op == Op::Newline));
    }

    #[test]
    fn test_inline_text() {
        let ir = Text::inline("Latte").compile();
        assert!(!ir.ops.iter().any(|op| *op == Op::Newline));
    }

    #[test]
    fn test_bold_wraps_text() {
        let ir = Text::new("TOTAL").bold().compile();
        let on = ir.ops.iter().position(|op| *op == Op::SetBold(true));
        let text = ir.ops.iter().position(|op| *op == Op::Text("TOTAL".into()));
        let off = ir.ops.iter().position(|op| *op == Op::SetBold(false));
        assert!(on < text && text < off);
    }

    #[test]
    fn test_centered_text() {
        let ir = Text::new("header").center().compile();
        assert!(
            ir.ops
                .iter()
                .any(|op| *op == Op::SetAlign(Alignment::Center))
        );
    }

    #[test]
    fn test_size_resets_after_text() {
        let ir = Text::new("BIG").size(1, 1).compile();
        let set = ir.ops.iter().position(|op| {
            *op == Op::SetSize {
                height: 1,
                width: 1,
            }
        });
        let reset = ir.ops.iter().position(|op| {
            *op == Op::SetSize {
                height: 0,
                width: 0,
            }
        });
        assert!(set < reset);
    }

    #[test]
    fn test_double_wide() {
        let ir = Text::new("TOTAL 268.00").double_wide().compile();
        assert!(ir.ops.iter().any(|op| {
            *op == Op::SetSize {
                height: 0,
                width: 1,
            }
        }));
    }

    #[test]
    fn test_size_clamped() {
        let ir = Text::new("x").size(12, 12).compile();
        assert!(ir.ops.iter().any(|op| {
            *op == Op::SetSize {
                height: 7,
                width: 7,
            }
        }));
    }
}

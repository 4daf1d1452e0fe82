//! # Layout Components
//!
//! Dividers, spacing, and the two-column rows receipt bodies are made of.

use super::Component;
use crate::ir::Op;
use crate::protocol::text::Alignment;

/// Divider style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerStyle {
    /// Dashed line (default): ------------
    #[default]
    Dashed,
    /// Equals line: ============
    Equals,
}

/// A horizontal divider line.
///
/// ## Example
///
/// ```
/// use resibo::components::Divider;
///
/// let rule = Divider::dashed().width(32);
/// ```
pub struct Divider {
    style: DividerStyle,
    width: usize,
}

impl Divider {
    /// Create a divider with a specific style.
    pub fn new(style: DividerStyle) -> Self {
        Self { style, width: 32 }
    }

    /// Create a dashed divider.
    pub fn dashed() -> Self {
        Self::new(DividerStyle::Dashed)
    }

    /// Create an equals-sign divider.
    pub fn equals() -> Self {
        Self::new(DividerStyle::Equals)
    }

    /// Set the character width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::dashed()
    }
}

impl Component for Divider {
    fn emit(&self, ops: &mut Vec<Op>) {
        let line = match self.style {
            DividerStyle::Dashed => "-".repeat(self.width),
            DividerStyle::Equals => "=".repeat(self.width),
        };
        ops.push(Op::SetAlign(Alignment::Left));
        ops.push(Op::Text(line));
        ops.push(Op::Newline);
    }
}

/// A vertical spacer (paper feed).
///
/// ## Example
///
/// ```
/// use resibo::components::Spacer;
///
/// let gap = Spacer::mm(6.0);
/// ```
pub struct Spacer {
    units: u8, // motion units, 8 per mm
}

impl Spacer {
    /// Create a spacer with a specific height in millimeters.
    pub fn mm(mm: f32) -> Self {
        let units = (mm * 8.0).round().clamp(0.0, 255.0) as u8;
        Self { units }
    }

    /// Create a spacer with raw motion units.
    pub fn units(units: u8) -> Self {
        Self { units }
    }
}

impl Component for Spacer {
    fn emit(&self, ops: &mut Vec<Op>) {
        if self.units > 0 {
            ops.push(Op::Feed { units: self.units });
        }
    }
}

/// A two-column row: left-aligned label, right-aligned value, padded to
/// the paper's character width.
///
/// ## Example
///
/// ```
/// use resibo::components::Columns;
///
/// let subtotal = Columns::new("Subtotal", "335.00").width(32);
/// let total = Columns::new("TOTAL", "268.00").bold().wide();
/// ```
pub struct Columns {
    left: String,
    right: String,
    width: usize,
    bold: bool,
    wide: bool,
}

impl Columns {
    /// Create a two-column row.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            width: 32,
            bold: false,
            wide: false,
        }
    }

    /// Set the character width of the paper.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Make the row bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Print the row at double character width. Halves the usable
    /// columns, so the row is padded to `width / 2` cells.
    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    fn format_line(&self) -> String {
        let cells = if self.wide {
            self.width / 2
        } else {
            self.width
        };
        let left_len = self.left.chars().count();
        let right_len = self.right.chars().count();

        if left_len + right_len >= cells {
            // Overflow: truncate the label, keep the value intact
            let keep = cells.saturating_sub(right_len + 1);
            let truncated: String = self.left.chars().take(keep).collect();
            format!("{} {}", truncated, self.right)
        } else {
            let padding = cells - left_len - right_len;
            format!("{}{}{}", self.left, " ".repeat(padding), self.right)
        }
    }
}

impl Component for Columns {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::SetAlign(Alignment::Left));
        if self.bold {
            ops.push(Op::SetBold(true));
        }
        if self.wide {
            ops.push(Op::SetSize {
                height: 0,
                width: 1,
            });
        }

        ops.push(Op::Text(self.format_line()));
        ops.push(Op::Newline);

        if self.wide {
            ops.push(Op::SetSize {
                height: 0,
                width: 0,
            });
        }
        if self.bold {
            ops.push(Op::SetBold(false));
        }
    }
}

/// An empty line (just a newline character).
pub struct BlankLine;

impl BlankLine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BlankLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BlankLine {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::Newline);
    }
}

/// Raw ops - escape hatch for direct protocol access.
pub struct Raw {
    ops: Vec<Op>,
}

impl Raw {
    /// Create from raw bytes.
    pub fn bytes(data: Vec<u8>) -> Self {
        Self {
            ops: vec![Op::Raw(data)],
        }
    }

    /// Create from IR ops.
    pub fn ops(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// Create a single op.
    pub fn op(op: Op) -> Self {
        Self { ops: vec![op] }
    }
}

impl Component for Raw {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.extend(self.ops.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_dashed_divider() {
        let ir = Divider::dashed().width(10).compile();
        assert!(ir.ops.iter().any(|op| *op == Op::Text("----------".into())));
    }

    #[test]
    fn test_equals_divider() {
        let ir = Divider::equals().width(5).compile();
        assert!(ir.ops.iter().any(|op| *op == Op::Text("=====".into())));
    }

    #[test]
    fn test_spacer_mm() {
        let ir = Spacer::mm(6.0).compile();
        assert!(ir.ops.iter().any(|op| *op == Op::Feed { units: 48 }));
    }

    #[test]
    fn test_zero_spacer_emits_nothing() {
        let ir = Spacer::units(0).compile();
        assert!(!ir.ops.iter().any(|op| matches!(op, Op::Feed { .. })));
    }

    #[test]
    fn test_columns_padded_to_width() {
        let ir = Columns::new("Subtotal", "335.00").width(32).compile();
        let line = ir.ops.iter().find_map(|op| match op {
            Op::Text(s) => Some(s.clone()),
            _ => None,
        });
        let line = line.expect("columns should emit text");
        assert_eq!(line.chars().count(), 32);
        assert!(line.starts_with("Subtotal"));
        assert!(line.ends_with("335.00"));
    }

    #[test]
    fn test_columns_overflow_truncates_label() {
        let ir = Columns::new("A label much too long for the paper width", "99.00")
            .width(20)
            .compile();
        let line = ir.ops.iter().find_map(|op| match op {
            Op::Text(s) => Some(s.clone()),
            _ => None,
        });
        let line = line.expect("columns should emit text");
        assert!(line.chars().count() <= 20);
        assert!(line.ends_with("99.00"));
    }

    #[test]
    fn test_columns_wide_pads_to_half_width() {
        let ir = Columns::new("TOTAL", "268.00").width(32).wide().compile();
        let line = ir.ops.iter().find_map(|op| match op {
            Op::Text(s) => Some(s.clone()),
            _ => None,
        });
        assert_eq!(line.expect("text").chars().count(), 16);
        assert!(ir.ops.iter().any(|op| {
            *op == Op::SetSize {
                height: 0,
                width: 1,
            }
        }));
    }

    #[test]
    fn test_columns_bold() {
        let ir = Columns::new("TOTAL", "268.00").bold().compile();
        assert!(ir.ops.contains(&Op::SetBold(true)));
        assert!(ir.ops.contains(&Op::SetBold(false)));
    }

    #[test]
    fn test_blank_line() {
        let ir = BlankLine::new().compile();
        assert!(ir.ops.iter().any(|op| *op == Op::Newline));
    }

    #[test]
    fn test_raw_op() {
        let ir = Raw::op(Op::SetCodepage(0)).compile();
        assert!(ir.ops.contains(&Op::SetCodepage(0)));
    }
}

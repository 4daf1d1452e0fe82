//! # Receipt Component
//!
//! The root container for building receipts.

use super::Component;
use crate::ir::Op;

/// Receipt is the root container component.
///
/// It holds child components and optionally adds a cut at the end.
///
/// ## Example
///
/// ```
/// use resibo::components::*;
///
/// let receipt = Receipt::new()
///     .child(Text::new("BREW & SHINE").center().bold())
///     .child(Divider::dashed())
///     .child(Columns::new("TOTAL", "268.00").bold().wide())
///     .cut();
///
/// let bytes = receipt.build();
/// ```
pub struct Receipt {
    children: Vec<Box<dyn Component>>,
    auto_cut: bool,
    partial_cut: bool,
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

impl Receipt {
    /// Create a new empty receipt.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            auto_cut: false,
            partial_cut: false,
        }
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }

    /// Enable auto-cut at the end (full cut).
    pub fn cut(mut self) -> Self {
        self.auto_cut = true;
        self.partial_cut = false;
        self
    }

    /// Enable auto-cut at the end (partial cut, leaves hinge).
    pub fn partial_cut(mut self) -> Self {
        self.auto_cut = true;
        self.partial_cut = true;
        self
    }
}

impl Component for Receipt {
    fn emit(&self, ops: &mut Vec<Op>) {
        for child in &self.children {
            child.emit(ops);
        }

        if self.auto_cut {
            ops.push(Op::Cut {
                partial: self.partial_cut,
            });
        }
    }
}

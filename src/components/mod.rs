//! # Declarative Components
//!
//! Receipts are described as a tree of components rather than a string
//! of imperative printer calls:
//!
//! ```
//! use resibo::components::*;
//!
//! let receipt = Receipt::new()
//!     .child(Text::new("BREW & SHINE").center().bold().size(1, 1))
//!     .child(Divider::dashed())
//!     .child(Columns::new("Subtotal", "335.00"))
//!     .cut();
//!
//! let bytes = receipt.build();
//! assert!(bytes.starts_with(&[0x1B, 0x40]));
//! ```
//!
//! Every component implements [`Component`], which emits IR ops. The
//! encoder assembles receipt templates from these blocks and lets the
//! optimizer strip whatever styling turns out to be redundant.

mod layout;
mod receipt;
mod text;

pub use layout::*;
pub use receipt::*;
pub use text::*;

use crate::ir::{Op, Program};

/// Trait for declarative components.
pub trait Component {
    /// Emit IR ops for this component into the ops vector.
    fn emit(&self, ops: &mut Vec<Op>);
}

/// Extension trait for compiling components.
pub trait ComponentExt: Component {
    /// Compile this component to an IR program.
    ///
    /// The program starts with an Init op, followed by the component's ops.
    fn compile(&self) -> Program {
        let mut ops = vec![Op::Init];
        self.emit(&mut ops);
        Program { ops }
    }

    /// Compile, optimize, and generate ESC/POS bytes.
    fn build(&self) -> Vec<u8> {
        self.compile().optimize().to_bytes()
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, ops: &mut Vec<Op>) {
        self.as_ref().emit(ops);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, ops: &mut Vec<Op>) {
        (*self).emit(ops);
    }
}

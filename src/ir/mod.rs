//! # Intermediate Representation (IR)
//!
//! The IR is a small "bytecode" that sits between declarative receipt
//! components and raw ESC/POS bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │ Components  │ ──► │     IR      │ ──► │ Optimizer │ ──► │ Codegen  │
//! │(declarative)│     │  (Vec<Op>)  │     │           │     │ (bytes)  │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: see what will be printed before any bytes exist
//! 2. **Optimizable**: redundant style changes collapse away
//! 3. **Testable**: components are unit-tested without a printer
//!
//! ## Example
//!
//! ```
//! use resibo::ir::{Op, Program};
//! use resibo::protocol::text::Alignment;
//!
//! let mut program = Program::with_init();
//! program.push(Op::SetAlign(Alignment::Center));
//! program.push(Op::SetBold(true));
//! program.push(Op::Text("BREW & SHINE".into()));
//! program.push(Op::Newline);
//! program.push(Op::Cut { partial: true });
//!
//! let bytes = program.optimize().to_bytes();
//! assert!(bytes.starts_with(&[0x1B, 0x40]));
//! ```

mod codegen;
mod ops;
mod optimize;

// Re-export the ops types (codegen and optimize add methods to Program via impl)
pub use ops::*;

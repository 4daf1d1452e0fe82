//! # Resibo - POS Receipt Encoding
//!
//! Resibo turns an order from a combined coffee-shop and carwash point
//! of sale into the ESC/POS byte stream a Bluetooth thermal printer
//! understands. It provides:
//!
//! - **Order model**: line items, flat-rate discounts, payment capture,
//!   exact-decimal cart arithmetic
//! - **Encoder**: deterministic, all-or-nothing receipt byte generation
//! - **Preview**: decode a byte stream back into lines and emphasis for
//!   on-screen inspection
//! - **Bridge**: the `rawbt:` intent payload for hand-off to an
//!   installed printing app
//!
//! ## Quick Start
//!
//! ```
//! use resibo::order::{Cart, DiscountKind, LineItem, Payment};
//! use resibo::profile::DocumentKind;
//! use rust_decimal::Decimal;
//!
//! // Build up the order
//! let mut cart = Cart::new();
//! cart.add(LineItem::new("Latte", 1, Decimal::new(14500, 2)).qualified("Hot"));
//! cart.add(LineItem::new("Americano", 2, Decimal::new(9500, 2)).qualified("Cold"));
//! cart.set_discount(DiscountKind::Senior);
//!
//! // Capture payment and freeze the request
//! let request = cart.checkout(
//!     "ORD-1021",
//!     Payment::Cash { tendered: Decimal::new(30000, 2) },
//!     "2026-08-06 10:15 AM",
//! )?;
//!
//! // Encode, inspect, hand off
//! let bytes = resibo::encode(&request, DocumentKind::Coffee)?;
//! let preview = resibo::preview::decode(&bytes)?;
//! let url = resibo::bridge::rawbt_url(&bytes);
//!
//! assert!(preview.cut);
//! assert!(url.starts_with("rawbt:base64,"));
//! # Ok::<(), resibo::ResiboError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`order`] | Line items, discounts, payments, cart arithmetic |
//! | [`profile`] | Document kinds and paper geometry |
//! | [`encoder`] | ReceiptRequest → ESC/POS bytes |
//! | [`components`] | Declarative receipt building blocks |
//! | [`ir`] | Opcode layer between components and bytes |
//! | [`protocol`] | ESC/POS command builders and CP437 encoding |
//! | [`preview`] | Bytes → structural preview |
//! | [`bridge`] | RawBT intent payload |
//! | [`error`] | Error types |
//!
//! Every entry point is synchronous and pure: no I/O, no clock, no
//! shared state. Identical input produces byte-identical output.

pub mod bridge;
pub mod components;
pub mod encoder;
pub mod error;
pub mod ir;
pub mod order;
pub mod preview;
pub mod profile;
pub mod protocol;

// Re-exports for convenience
pub use encoder::encode;
pub use error::ResiboError;
pub use order::{Cart, Discount, DiscountKind, LineItem, Payment, ReceiptRequest};
pub use profile::{DocumentKind, DocumentProfile, PaperProfile};
pub use preview::{Preview, PreviewLine};

//! # Error Types
//!
//! This module defines error types used throughout the resibo library.
//!
//! Every public operation returns `Result<_, ResiboError>` so the calling
//! UI can branch on validity without exception-style control flow. A
//! validation variant always names the offending field or line item.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::profile::DocumentKind;

/// Main error type for resibo operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResiboError {
    /// A receipt must carry at least one line item
    #[error("receipt has no line items")]
    EmptyItems,

    /// Line item quantity must be >= 1
    #[error("line item '{item}': quantity must be >= 1")]
    ZeroQuantity { item: String },

    /// Line item unit price must be non-negative
    #[error("line item '{item}': unit price must not be negative")]
    NegativePrice { item: String },

    /// Declared subtotal does not equal the sum of line extensions
    #[error("subtotal {declared} does not match the sum of line extensions {computed}")]
    SubtotalMismatch { declared: Decimal, computed: Decimal },

    /// Discount amount must be non-negative
    #[error("discount amount {amount} must not be negative")]
    NegativeDiscount { amount: Decimal },

    /// Discount amount exceeds the subtotal it is applied to
    #[error("discount {amount} exceeds subtotal {subtotal}")]
    DiscountExceedsSubtotal { amount: Decimal, subtotal: Decimal },

    /// The selected document kind does not accept discounts
    #[error("{kind} receipts do not accept discounts")]
    DiscountNotSupported { kind: DocumentKind },

    /// Declared total does not equal subtotal minus discount
    #[error("total {declared} does not match subtotal minus discount ({expected})")]
    TotalMismatch { declared: Decimal, expected: Decimal },

    /// Cash tendered does not cover the total
    #[error("cash tendered {tendered} does not cover total {total}")]
    InsufficientTender { tendered: Decimal, total: Decimal },

    /// Preview decoding ran off the end of the byte stream
    #[error("byte stream truncated inside a command at offset {offset}")]
    TruncatedStream { offset: usize },
}

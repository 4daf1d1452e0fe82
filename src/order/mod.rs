//! # Order Model
//!
//! The data the point of sale hands to the encoder: line items, the
//! discount applied (if any), payment capture, and the assembled
//! [`ReceiptRequest`]. All money is [`rust_decimal::Decimal`] so cart
//! math is exact to the cent; formatting to two decimal places happens
//! only at the moment text is laid out, never the other way around.

mod cart;

pub use cart::{Cart, format_timestamp};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::ResiboError;
use crate::profile::DocumentKind;

/// Render a monetary amount with exactly two decimal places, rounding
/// half-away-from-zero at the cent first.
///
/// ## Example
///
/// ```
/// use resibo::order::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(200, 0)), "200.00");
/// assert_eq!(format_amount(Decimal::new(675, 1)), "67.50");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", cents)
}

/// The three mutually exclusive discount labels the POS offers.
///
/// All of them map to the same flat rate; keeping the rate on the kind
/// means the labels cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Senior,
    Pwd,
    Employee,
}

impl DiscountKind {
    /// Flat discount rate: 20% for every kind.
    pub fn rate(&self) -> Decimal {
        Decimal::new(20, 2)
    }

    /// Label as printed on the receipt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Senior => "Senior",
            Self::Pwd => "PWD",
            Self::Employee => "Employee",
        }
    }
}

/// A discount as applied to one order: the selected kind and the
/// computed peso amount it removed from the subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: DiscountKind,
    pub amount: Decimal,
}

/// How the order was paid.
///
/// Cash carries the tendered amount; change due is derived from it and
/// never stored, so the two cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Payment {
    Cash { tendered: Decimal },
    DigitalWallet,
}

impl Payment {
    /// Label as printed on the receipt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash { .. } => "Cash",
            Self::DigitalWallet => "Digital Wallet",
        }
    }
}

/// One sellable line on the receipt, in print order.
///
/// The qualifier is the per-business-line option: temperature for
/// coffee ("Hot"/"Cold"), vehicle type for the carwash ("Sedan"/"SUV").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    #[serde(default)]
    pub qualifier: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    /// Create a line item without a qualifier.
    pub fn new(label: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            label: label.into(),
            qualifier: None,
            quantity,
            unit_price,
        }
    }

    /// Attach the qualifier (temperature or vehicle type).
    pub fn qualified(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// The line extension: quantity × unit price, computed on decimals.
    pub fn extension(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    /// Label with the qualifier folded in: `Latte (Hot)`.
    pub fn display_label(&self) -> String {
        match &self.qualifier {
            Some(q) if !q.is_empty() => format!("{} ({})", self.label, q),
            _ => self.label.clone(),
        }
    }
}

/// Everything the encoder needs for one receipt. Immutable once built;
/// the timestamp is pre-formatted by the caller and the encoder does no
/// date arithmetic of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRequest {
    pub order_id: String,
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    #[serde(default)]
    pub discount: Option<Discount>,
    pub total: Decimal,
    pub payment: Payment,
    pub timestamp: String,
}

impl ReceiptRequest {
    /// Change due for cash payments (`tendered − total`), `None` for
    /// everything else.
    pub fn change_due(&self) -> Option<Decimal> {
        match self.payment {
            Payment::Cash { tendered } => Some(tendered - self.total),
            Payment::DigitalWallet => None,
        }
    }

    /// Check every invariant the encoder relies on. Runs before any
    /// bytes are produced so a failure can never leave a partial buffer.
    pub fn validate(&self, kind: DocumentKind) -> Result<(), ResiboError> {
        if self.items.is_empty() {
            return Err(ResiboError::EmptyItems);
        }

        let mut computed = Decimal::ZERO;
        for item in &self.items {
            if item.quantity == 0 {
                return Err(ResiboError::ZeroQuantity {
                    item: item.label.clone(),
                });
            }
            if item.unit_price < Decimal::ZERO {
                return Err(ResiboError::NegativePrice {
                    item: item.label.clone(),
                });
            }
            computed += item.extension();
        }

        if computed != self.subtotal {
            return Err(ResiboError::SubtotalMismatch {
                declared: self.subtotal,
                computed,
            });
        }

        let discount_amount = match &self.discount {
            Some(discount) => {
                if !kind.profile().discounts {
                    return Err(ResiboError::DiscountNotSupported { kind });
                }
                if discount.amount < Decimal::ZERO {
                    return Err(ResiboError::NegativeDiscount {
                        amount: discount.amount,
                    });
                }
                if discount.amount > self.subtotal {
                    return Err(ResiboError::DiscountExceedsSubtotal {
                        amount: discount.amount,
                        subtotal: self.subtotal,
                    });
                }
                discount.amount
            }
            None => Decimal::ZERO,
        };

        let expected = self.subtotal - discount_amount;
        if self.total != expected {
            return Err(ResiboError::TotalMismatch {
                declared: self.total,
                expected,
            });
        }

        if let Payment::Cash { tendered } = self.payment {
            if tendered < self.total {
                return Err(ResiboError::InsufficientTender {
                    tendered,
                    total: self.total,
                });
            }
        }

        Ok(())
    }
}

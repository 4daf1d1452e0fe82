//! # Cart Arithmetic
//!
//! The upstream half of the receipt pipeline: accumulate line items,
//! apply the flat-rate discount, capture payment, and produce a
//! [`ReceiptRequest`] whose numbers already satisfy every invariant the
//! encoder re-checks.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{Discount, DiscountKind, LineItem, Payment, ReceiptRequest};
use crate::error::ResiboError;

/// Format the wall-clock reading the POS UI supplies into the receipt's
/// timestamp line (`2026-08-06 02:45 PM`). The encoder itself never
/// touches the clock; this is the only place a date type appears.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %I:%M %p").to_string()
}

/// An in-progress order. Totals are recomputed from the items on every
/// read, so there is no stored subtotal to go stale.
///
/// ## Example
///
/// ```
/// use resibo::order::{Cart, DiscountKind, LineItem, Payment};
/// use rust_decimal::Decimal;
///
/// let mut cart = Cart::new();
/// cart.add(LineItem::new("Latte", 1, Decimal::new(14500, 2)).qualified("Hot"));
/// cart.add(LineItem::new("Americano", 2, Decimal::new(9500, 2)).qualified("Cold"));
/// cart.set_discount(DiscountKind::Senior);
///
/// assert_eq!(cart.subtotal(), Decimal::new(33500, 2));
/// assert_eq!(cart.total(), Decimal::new(26800, 2));
///
/// let request = cart
///     .checkout(
///         "ORD-1021",
///         Payment::Cash { tendered: Decimal::new(30000, 2) },
///         "2026-08-06 10:15 AM",
///     )
///     .unwrap();
/// assert_eq!(request.change_due(), Some(Decimal::new(3200, 2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    discount: Option<DiscountKind>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item. Print order follows insertion order.
    pub fn add(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Select the discount kind. The amount is computed at read time
    /// from whatever the subtotal is then.
    pub fn set_discount(&mut self, kind: DiscountKind) {
        self.discount = Some(kind);
    }

    /// Remove any selected discount.
    pub fn clear_discount(&mut self) {
        self.discount = None;
    }

    /// Items currently in the cart.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line extensions, exact.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::extension).sum()
    }

    /// The discount as it would print: kind plus the peso amount,
    /// rounded half-away-from-zero at the cent.
    pub fn discount(&self) -> Option<Discount> {
        self.discount.map(|kind| Discount {
            kind,
            amount: (self.subtotal() * kind.rate())
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        })
    }

    /// Subtotal minus the discount amount.
    pub fn total(&self) -> Decimal {
        let subtotal = self.subtotal();
        match self.discount() {
            Some(discount) => subtotal - discount.amount,
            None => subtotal,
        }
    }

    /// Close the order into an immutable [`ReceiptRequest`].
    ///
    /// Rejects an empty cart and cash tender short of the total; both
    /// checks mirror what the encoder enforces, so a request built here
    /// always encodes cleanly.
    pub fn checkout(
        &self,
        order_id: impl Into<String>,
        payment: Payment,
        timestamp: impl Into<String>,
    ) -> Result<ReceiptRequest, ResiboError> {
        if self.items.is_empty() {
            return Err(ResiboError::EmptyItems);
        }

        let total = self.total();
        if let Payment::Cash { tendered } = payment {
            if tendered < total {
                return Err(ResiboError::InsufficientTender { tendered, total });
            }
        }

        Ok(ReceiptRequest {
            order_id: order_id.into(),
            items: self.items.clone(),
            subtotal: self.subtotal(),
            discount: self.discount(),
            total,
            payment,
            timestamp: timestamp.into(),
        })
    }
}

//! # Receipt Encoder
//!
//! The public contract: turn a validated [`ReceiptRequest`] into the
//! ESC/POS byte stream for one printed receipt. All-or-nothing — the
//! request is validated up front and no bytes exist until it passes.

use tracing::{debug, instrument};

use crate::components::{
    BlankLine, Columns, ComponentExt, Divider, Raw, Receipt, Spacer, Text,
};
use crate::error::ResiboError;
use crate::ir::Op;
use crate::order::{Payment, ReceiptRequest, format_amount};
use crate::profile::{DocumentKind, DocumentProfile};

/// Encode a receipt for the given document kind.
///
/// The byte stream renders, top to bottom: init, centered header
/// (business + subtitle), timestamp and order id, a dashed rule, one
/// block per line item, a dashed rule, subtotal / optional discount /
/// emphasized total, the payment block (tendered and change for cash),
/// a thank-you block, paper feed, and a cut.
///
/// Deterministic: the same request always produces identical bytes.
///
/// ## Example
///
/// ```
/// use resibo::order::{Cart, LineItem, Payment};
/// use resibo::profile::DocumentKind;
/// use rust_decimal::Decimal;
///
/// let mut cart = Cart::new();
/// cart.add(LineItem::new("Detailed Wash", 1, Decimal::new(20000, 2)).qualified("Sedan"));
/// let request = cart
///     .checkout(
///         "CW-0007",
///         Payment::Cash { tendered: Decimal::new(30000, 2) },
///         "2026-08-06 09:00 AM",
///     )
///     .unwrap();
///
/// let bytes = resibo::encode(&request, DocumentKind::Carwash).unwrap();
/// assert!(bytes.starts_with(&[0x1B, 0x40]));
/// ```
#[instrument(skip_all, fields(order = %request.order_id, kind = %kind))]
pub fn encode(request: &ReceiptRequest, kind: DocumentKind) -> Result<Vec<u8>, ResiboError> {
    request.validate(kind)?;

    let bytes = compose(request, kind.profile()).build();
    debug!(len = bytes.len(), "receipt encoded");
    Ok(bytes)
}

/// Assemble the component tree for one receipt. Layout only — the
/// request is already validated.
fn compose(request: &ReceiptRequest, profile: &DocumentProfile) -> Receipt {
    let columns = profile.columns();

    let mut receipt = Receipt::new()
        .child(Raw::op(Op::SetCodepage(0)))
        // Header
        .child(Text::new(profile.business).center().bold().size(1, 1))
        .child(Text::new(profile.subtitle).center())
        .child(BlankLine::new())
        .child(Text::new(request.timestamp.clone()).center())
        .child(Text::new(format!("Order {}", request.order_id)).center())
        .child(Divider::dashed().width(columns));

    // Item blocks: label line, then quantity x unit price against the
    // line extension
    for item in &request.items {
        receipt = receipt
            .child(Text::new(item.display_label()))
            .child(
                Columns::new(
                    format!("  {} x {}", item.quantity, format_amount(item.unit_price)),
                    format_amount(item.extension()),
                )
                .width(columns),
            );
    }

    receipt = receipt
        .child(Divider::dashed().width(columns))
        .child(Columns::new("Subtotal", format_amount(request.subtotal)).width(columns));

    if let Some(discount) = &request.discount {
        let percent = (discount.kind.rate() * rust_decimal::Decimal::ONE_HUNDRED).normalize();
        receipt = receipt.child(
            Columns::new(
                format!("{} Discount ({}%)", discount.kind.label(), percent),
                format!("-{}", format_amount(discount.amount)),
            )
            .width(columns),
        );
    }

    receipt = receipt.child(
        Columns::new("TOTAL", format_amount(request.total))
            .width(columns)
            .bold()
            .wide(),
    );

    // Payment block
    match request.payment {
        Payment::Cash { tendered } => {
            receipt = receipt
                .child(Columns::new("Cash", format_amount(tendered)).width(columns))
                .child(
                    Columns::new(
                        "Change",
                        format_amount(tendered - request.total),
                    )
                    .width(columns),
                );
        }
        Payment::DigitalWallet => {
            receipt = receipt
                .child(Columns::new("Payment", request.payment.label()).width(columns));
        }
    }

    receipt
        .child(BlankLine::new())
        .child(Text::new("Thank you! Please come again.").center())
        .child(Text::new("This serves as your receipt.").center())
        .child(Spacer::mm(6.0))
        .cut()
}

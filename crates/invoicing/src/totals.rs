//! Totals arithmetic.
//!
//! A single pure function replaces the running-accumulator style: totals are
//! recomputed from the item list on every call, so there is no order-of-call
//! state to get wrong.

use serde::Serialize;

use paperbill_core::{Money, TaxRate};

use crate::invoice::LineItem;

/// The fixed invoice tax rate: 18%.
pub const STANDARD_TAX_RATE: TaxRate = TaxRate::from_bps(1800);

/// Derived totals block. Never persisted independently; recomputed per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

/// Compute subtotal, tax, and total for an ordered sequence of line items.
///
/// - subtotal: exact sum of line totals, no rounding during accumulation;
/// - tax: subtotal × rate, rounded to whole cents half-up;
/// - total: subtotal plus the already-rounded tax (no second rounding).
pub fn compute_totals(items: &[LineItem], tax_rate: TaxRate) -> InvoiceTotals {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();
    let tax = subtotal.apply_rate_half_up(tax_rate);
    let total = subtotal + tax;

    InvoiceTotals {
        subtotal,
        tax_rate,
        tax,
        total,
    }
}

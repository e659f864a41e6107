//! Invoicing domain module.
//!
//! This crate contains the invoice data model and totals arithmetic,
//! implemented purely as deterministic domain logic (no IO, no drawing,
//! no storage).

pub mod invoice;
pub mod totals;

pub use invoice::{CompanyInfo, CustomerInfo, Invoice, InvoiceDetails, LineItem};
pub use totals::{compute_totals, InvoiceTotals, STANDARD_TAX_RATE};

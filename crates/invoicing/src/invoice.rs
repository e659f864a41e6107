use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use paperbill_core::{DomainError, DomainResult, Money, TaxRate};

/// One invoice row: a purchased title with unit price, quantity, and the
/// line total derived from them.
///
/// The line total is computed at construction rather than supplied by the
/// caller, so a `LineItem` can never carry an inconsistent amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    title: String,
    unit_price: Money,
    quantity: u32,
    line_total: Money,
}

impl LineItem {
    /// Create a line item, deriving `line_total = unit_price × quantity`.
    ///
    /// A zero quantity is allowed (the row renders with a 0.00 amount);
    /// negative unit prices are rejected.
    pub fn new(title: impl Into<String>, unit_price: Money, quantity: u32) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("line item title must not be empty"));
        }
        if unit_price.is_negative() {
            return Err(DomainError::validation(
                "line item unit price must not be negative",
            ));
        }
        let line_total = unit_price
            .checked_mul(quantity)
            .ok_or_else(|| DomainError::invariant("line item amount overflow"))?;

        Ok(Self {
            title,
            unit_price,
            quantity,
            line_total,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

/// Issuing company fields drawn in the page header and company block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub address_lines: [String; 2],
    pub phone: String,
    pub fax: String,
}

/// Billed-to party fields drawn in the customer block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Invoice metadata drawn right-aligned next to the company block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDetails {
    pub number: String,
    pub date: NaiveDate,
}

/// Complete render input: static text fields plus the item list.
///
/// Assembled by the caller (config layer or tests); the renderer never
/// reaches for embedded constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub company: CompanyInfo,
    pub customer: CustomerInfo,
    pub details: InvoiceDetails,
    items: Vec<LineItem>,
    tax_rate: TaxRate,
}

impl Invoice {
    pub fn new(
        company: CompanyInfo,
        customer: CustomerInfo,
        details: InvoiceDetails,
        items: Vec<LineItem>,
        tax_rate: TaxRate,
    ) -> Self {
        Self {
            company,
            customer,
            details,
            items,
            tax_rate,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }
}

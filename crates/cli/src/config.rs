//! Invoice description loading.
//!
//! The renderer takes its data as explicit input; this module supplies it,
//! either from a TOML/JSON file or from the built-in sample set.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use paperbill_core::{Money, TaxRate};
use paperbill_invoicing::{
    CompanyInfo, CustomerInfo, Invoice, InvoiceDetails, LineItem, STANDARD_TAX_RATE,
};

/// One item row as written in a config file; the line total is derived, so
/// the file never carries it. Prices are decimal strings (`"12.00"`); dates
/// are quoted ISO strings (`"2024-03-15"`).
#[derive(Debug, Deserialize)]
pub struct ItemConfig {
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
}

/// On-disk invoice description.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvoiceConfig {
    pub company: CompanyInfo,
    pub customer: CustomerInfo,
    pub invoice: InvoiceDetails,
    pub items: Vec<ItemConfig>,
    /// Tax rate in basis points; defaults to the standard 1800 (18%).
    pub tax_rate_bps: Option<u32>,
}

impl InvoiceConfig {
    /// Load a description from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let config = match extension {
            "toml" => toml::from_str(&raw)
                .with_context(|| format!("invalid TOML in {}", path.display()))?,
            "json" => serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON in {}", path.display()))?,
            other => bail!("unsupported config format {other:?} (expected .toml or .json)"),
        };
        Ok(config)
    }

    /// Validate the description into a render-ready invoice.
    pub fn into_invoice(self) -> Result<Invoice> {
        let items = self
            .items
            .into_iter()
            .map(|item| LineItem::new(item.title, item.unit_price, item.quantity))
            .collect::<Result<Vec<_>, _>>()
            .context("invalid line item")?;

        let tax_rate = self
            .tax_rate_bps
            .map(TaxRate::from_bps)
            .unwrap_or(STANDARD_TAX_RATE);

        Ok(Invoice::new(
            self.company,
            self.customer,
            self.invoice,
            items,
            tax_rate,
        ))
    }
}

/// Built-in sample set used when no config file is given.
pub fn sample_invoice() -> Invoice {
    let item = |title: &str, cents: i64, quantity: u32| {
        // The sample values are valid by construction.
        LineItem::new(title, Money::from_cents(cents), quantity)
            .expect("sample line items are valid")
    };
    // Line totals 12.00 + 48.00 + 10.00 + 24.00 = 94.00.
    let items = vec![
        item("Notebook", 600, 2),
        item("Pen", 1200, 4),
        item("Paper", 1000, 1),
        item("Marker", 800, 3),
    ];

    Invoice::new(
        CompanyInfo {
            name: "Paperbill Stationery Co.".to_string(),
            address_lines: [
                "14 Harbor Lane".to_string(),
                "Portsmouth, 04210".to_string(),
            ],
            phone: "+1 555 0134".to_string(),
            fax: "+1 555 0135".to_string(),
        },
        CustomerInfo {
            name: "Orchard Supplies Ltd.".to_string(),
            address: "88 Mill Road, Augusta".to_string(),
            phone: "+1 555 0188".to_string(),
        },
        InvoiceDetails {
            number: "INV-2024-001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid sample date"),
        },
        items,
        STANDARD_TAX_RATE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperbill_invoicing::compute_totals;

    const SAMPLE_TOML: &str = r#"
        tax_rate_bps = 1800

        [company]
        name = "Paperbill Stationery Co."
        address_lines = ["14 Harbor Lane", "Portsmouth, 04210"]
        phone = "+1 555 0134"
        fax = "+1 555 0135"

        [customer]
        name = "Orchard Supplies Ltd."
        address = "88 Mill Road, Augusta"
        phone = "+1 555 0188"

        [invoice]
        number = "INV-2024-001"
        date = "2024-03-15"

        [[items]]
        title = "Notebook"
        unit_price = "6.00"
        quantity = 2

        [[items]]
        title = "Pen"
        unit_price = "12.00"
        quantity = 4
    "#;

    #[test]
    fn parses_a_toml_description() {
        let config: InvoiceConfig = toml::from_str(SAMPLE_TOML).unwrap();
        let invoice = config.into_invoice().unwrap();

        assert_eq!(invoice.items().len(), 2);
        assert_eq!(invoice.items()[1].line_total(), Money::from_cents(4800));
        assert_eq!(invoice.details.number, "INV-2024-001");
    }

    #[test]
    fn parses_a_json_description() {
        let raw = r#"{
            "company": {
                "name": "Paperbill Stationery Co.",
                "address_lines": ["14 Harbor Lane", "Portsmouth, 04210"],
                "phone": "+1 555 0134",
                "fax": "+1 555 0135"
            },
            "customer": {
                "name": "Orchard Supplies Ltd.",
                "address": "88 Mill Road, Augusta",
                "phone": "+1 555 0188"
            },
            "invoice": { "number": "INV-7", "date": "2024-03-15" },
            "items": [
                { "title": "Paper", "unit_price": "10.00", "quantity": 1 }
            ]
        }"#;
        let config: InvoiceConfig = serde_json::from_str(raw).unwrap();
        let invoice = config.into_invoice().unwrap();

        assert_eq!(invoice.tax_rate(), STANDARD_TAX_RATE);
        assert_eq!(invoice.items()[0].line_total(), Money::from_cents(1000));
    }

    #[test]
    fn negative_price_in_config_is_rejected() {
        let mut config: InvoiceConfig = toml::from_str(SAMPLE_TOML).unwrap();
        config.items[0].unit_price = Money::from_cents(-100);

        assert!(config.into_invoice().is_err());
    }

    #[test]
    fn sample_set_matches_the_expected_totals() {
        let invoice = sample_invoice();
        let totals = compute_totals(invoice.items(), invoice.tax_rate());

        assert_eq!(totals.subtotal, Money::from_cents(9400));
        assert_eq!(totals.tax, Money::from_cents(1692));
        assert_eq!(totals.total, Money::from_cents(11092));
    }
}

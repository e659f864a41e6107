//! End-to-end: invoice in, PDF bytes on disk out.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use paperbill_core::Money;
use paperbill_invoicing::{
    CompanyInfo, CustomerInfo, Invoice, InvoiceDetails, LineItem, STANDARD_TAX_RATE,
};
use paperbill_pdf::{invoice_to_bytes, write_invoice, PdfError, INVOICE_FILE_NAME};

fn sample_invoice() -> Invoice {
    let items = vec![
        LineItem::new("Notebook", Money::from_cents(600), 2).unwrap(),
        LineItem::new("Pen", Money::from_cents(1200), 4).unwrap(),
        LineItem::new("Paper", Money::from_cents(1000), 1).unwrap(),
        LineItem::new("Marker", Money::from_cents(800), 3).unwrap(),
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
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        },
        items,
        STANDARD_TAX_RATE,
    )
}

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!("paperbill-{label}-{}", std::process::id()));
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn serialized_bytes_are_a_pdf_with_both_fonts() {
    let bytes = invoice_to_bytes(&sample_invoice()).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(contains(&bytes, b"Helvetica-Bold"));
    assert!(contains(&bytes, b"MediaBox"));
}

#[test]
fn identical_inputs_produce_byte_identical_output() {
    let first = invoice_to_bytes(&sample_invoice()).unwrap();
    let second = invoice_to_bytes(&sample_invoice()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn writes_and_overwrites_the_fixed_file_name() {
    let dir = TempDir::new("write");

    let path = write_invoice(&sample_invoice(), Some(&dir.path)).unwrap();
    assert_eq!(path.file_name().unwrap(), INVOICE_FILE_NAME);
    let first_len = fs::metadata(&path).unwrap().len();
    assert!(first_len > 0);

    // Re-invocation overwrites, it does not append or fail.
    let path_again = write_invoice(&sample_invoice(), Some(&dir.path)).unwrap();
    assert_eq!(path, path_again);
    assert_eq!(fs::metadata(&path_again).unwrap().len(), first_len);
}

#[test]
fn missing_target_directory_surfaces_an_io_error() {
    let dir = TempDir::new("missing");
    let missing = dir.path.join("does-not-exist");

    let err = write_invoice(&sample_invoice(), Some(&missing)).unwrap_err();
    assert!(matches!(err, PdfError::Io(_)));
}

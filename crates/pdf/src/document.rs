//! Document assembly and persistence.

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, Stream};

use paperbill_invoicing::{compute_totals, Invoice};
use paperbill_layout::geometry::{PAGE_HEIGHT, PAGE_WIDTH};
use paperbill_layout::render_invoice;

use crate::error::PdfError;
use crate::surface::{PdfSurface, FONT_BOLD, FONT_REGULAR};

/// Fixed output file name; re-invocation overwrites the previous invoice.
pub const INVOICE_FILE_NAME: &str = "invoice.pdf";

fn standard_font(base_font: &str) -> Object {
    let mut font = Dictionary::new();
    font.set(b"Type", Object::Name(b"Font".to_vec()));
    font.set(b"Subtype", Object::Name(b"Type1".to_vec()));
    font.set(b"BaseFont", Object::Name(base_font.as_bytes().to_vec()));
    font.set(b"Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    Object::Dictionary(font)
}

/// Render `invoice` into a finished single-page document.
///
/// Totals are recomputed here on every call; nothing is cached between
/// invocations, so identical inputs produce identical documents.
pub fn render_to_document(invoice: &Invoice) -> Result<Document, PdfError> {
    let totals = compute_totals(invoice.items(), invoice.tax_rate());
    let mut surface = PdfSurface::new();
    render_invoice(invoice, &totals, &mut surface)?;
    let content_bytes = Content {
        operations: surface.into_operations(),
    }
    .encode()?;

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_regular_id = doc.add_object(standard_font("Helvetica"));
    let font_bold_id = doc.add_object(standard_font("Helvetica-Bold"));
    let mut fonts = Dictionary::new();
    fonts.set(FONT_REGULAR, Object::Reference(font_regular_id));
    fonts.set(FONT_BOLD, Object::Reference(font_bold_id));
    let mut resources = Dictionary::new();
    resources.set(b"Font", Object::Dictionary(fonts));
    let resources_id = doc.add_object(Object::Dictionary(resources));

    let content_id = doc.add_object(Object::Stream(Stream::new(
        Dictionary::new(),
        content_bytes,
    )));

    let mut page = Dictionary::new();
    page.set(b"Type", Object::Name(b"Page".to_vec()));
    page.set(b"Parent", Object::Reference(pages_id));
    page.set(
        b"MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH as i64),
            Object::Integer(PAGE_HEIGHT as i64),
        ]),
    );
    page.set(b"Contents", Object::Reference(content_id));
    page.set(b"Resources", Object::Reference(resources_id));
    let page_id = doc.add_object(Object::Dictionary(page));

    let mut pages = Dictionary::new();
    pages.set(b"Type", Object::Name(b"Pages".to_vec()));
    pages.set(b"Kids", Object::Array(vec![Object::Reference(page_id)]));
    pages.set(b"Count", Object::Integer(1));
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set(b"Type", Object::Name(b"Catalog".to_vec()));
    catalog.set(b"Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));
    doc.trailer.set(b"Root", Object::Reference(catalog_id));

    doc.compress();
    Ok(doc)
}

/// Serialize the rendered invoice to document bytes.
pub fn invoice_to_bytes(invoice: &Invoice) -> Result<Vec<u8>, PdfError> {
    let mut doc = render_to_document(invoice)?;
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Platform documents directory the invoice lands in by default.
pub fn documents_dir() -> Result<PathBuf, PdfError> {
    dirs::document_dir().ok_or(PdfError::DocumentsDir)
}

/// Render and persist `invoice` as `invoice.pdf` under `out_dir`, or under
/// the platform documents directory when no directory is given.
///
/// Returns the path written. The caller sees exactly one outcome per
/// invocation: the written path, or the error that prevented it.
pub fn write_invoice(invoice: &Invoice, out_dir: Option<&Path>) -> Result<PathBuf, PdfError> {
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => documents_dir()?,
    };
    let path = dir.join(INVOICE_FILE_NAME);
    let bytes = invoice_to_bytes(invoice)?;
    fs::write(&path, &bytes)?;
    tracing::debug!(bytes = bytes.len(), path = %path.display(), "invoice serialized");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use paperbill_core::Money;
    use paperbill_invoicing::{
        CompanyInfo, CustomerInfo, InvoiceDetails, LineItem, STANDARD_TAX_RATE,
    };
    use paperbill_layout::LayoutError;

    fn invoice_with_items(count: usize) -> Invoice {
        let items = (0..count)
            .map(|i| LineItem::new(format!("Item {i}"), Money::from_cents(250), 2).unwrap())
            .collect();
        Invoice::new(
            CompanyInfo {
                name: "Paperbill Stationery Co.".to_string(),
                address_lines: ["14 Harbor Lane".to_string(), "Portsmouth".to_string()],
                phone: "+1 555 0134".to_string(),
                fax: "+1 555 0135".to_string(),
            },
            CustomerInfo {
                name: "Orchard Supplies Ltd.".to_string(),
                address: "88 Mill Road".to_string(),
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

    #[test]
    fn document_carries_one_a4_page() {
        let doc = render_to_document(&invoice_with_items(3)).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn overflowing_invoice_fails_before_assembly() {
        let err = render_to_document(&invoice_with_items(11)).unwrap_err();
        match err {
            PdfError::Layout(LayoutError::PageOverflow { items, capacity }) => {
                assert_eq!(items, 11);
                assert_eq!(capacity, 10);
            }
            other => panic!("expected layout error, got {other:?}"),
        }
    }
}

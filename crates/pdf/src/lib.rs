//! PDF document writer.
//!
//! This crate is the boundary collaborator of the pipeline: it implements
//! the layout [`Surface`](paperbill_layout::Surface) in terms of PDF
//! content-stream operations, assembles a one-page `lopdf` document, and
//! persists it under a documents directory with a fixed file name.

pub mod document;
pub mod error;
pub mod surface;

pub use document::{
    documents_dir, invoice_to_bytes, render_to_document, write_invoice, INVOICE_FILE_NAME,
};
pub use error::PdfError;
pub use surface::PdfSurface;

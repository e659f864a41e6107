//! Writer-boundary errors.

use thiserror::Error;

use paperbill_layout::LayoutError;

/// Everything that can go wrong between a finished invoice and a file on
/// disk. Layout and arithmetic cannot fail for valid inputs; the write path
/// can, and its errors are surfaced to the caller instead of crashing.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("document encoding failed: {0}")]
    Encode(#[from] lopdf::Error),

    #[error("could not write invoice file: {0}")]
    Io(#[from] std::io::Error),

    #[error("no documents directory available on this platform")]
    DocumentsDir,
}

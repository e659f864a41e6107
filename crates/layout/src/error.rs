//! Layout errors.

use thiserror::Error;

/// The renderer's only failure mode: the item table would push the totals
/// block past the bottom margin of the single fixed-size page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invoice has {items} line items but a single page fits {capacity}")]
    PageOverflow { items: usize, capacity: usize },
}

//! Invoice page layout.
//!
//! The renderer draws one invoice onto an abstract [`Surface`] using the
//! fixed geometry in [`geometry`]. It never touches a document backend, so
//! it can be exercised against [`RecordingSurface`] in tests.

pub mod error;
pub mod geometry;
pub mod renderer;
pub mod surface;

pub use error::LayoutError;
pub use renderer::render_invoice;
pub use surface::{Color, DrawOp, FontWeight, RecordingSurface, Surface, TextAlign, TextStyle};

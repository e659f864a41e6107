//! Content-stream drawing surface.
//!
//! Translates the layout's top-left-origin draw calls into PDF operators.
//! PDF user space has its origin at the bottom-left with y upward, so every
//! y coordinate is flipped against the page height.

use lopdf::content::Operation;
use lopdf::Object;

use paperbill_layout::geometry::PAGE_HEIGHT;
use paperbill_layout::{FontWeight, Surface, TextAlign, TextStyle};

/// Content-stream resource name of the regular font.
pub(crate) const FONT_REGULAR: &[u8] = b"F1";
/// Content-stream resource name of the bold font.
pub(crate) const FONT_BOLD: &[u8] = b"F2";

/// Average Helvetica glyph width as a fraction of the font size; used to
/// anchor right-aligned text without font metrics.
const CHAR_WIDTH_RATIO: f32 = 0.5;

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

/// A [`Surface`] that accumulates PDF content-stream operations.
#[derive(Debug, Default)]
pub struct PdfSurface {
    operations: Vec<Operation>,
}

impl PdfSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    fn flip(y: f32) -> f32 {
        PAGE_HEIGHT - y
    }
}

impl Surface for PdfSurface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let estimated_width = text.chars().count() as f32 * style.size * CHAR_WIDTH_RATIO;
        let anchor_x = match style.align {
            TextAlign::Left => x,
            TextAlign::Right => x - estimated_width,
        };
        let font = match style.weight {
            FontWeight::Normal => FONT_REGULAR,
            FontWeight::Bold => FONT_BOLD,
        };
        let (r, g, b) = (
            f32::from(style.color.r) / 255.0,
            f32::from(style.color.g) / 255.0,
            f32::from(style.color.b) / 255.0,
        );

        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new(
            "Tf",
            vec![Object::Name(font.to_vec()), real(style.size)],
        ));
        self.operations
            .push(Operation::new("rg", vec![real(r), real(g), real(b)]));
        self.operations.push(Operation::new(
            "Td",
            vec![real(anchor_x), real(Self::flip(y))],
        ));
        self.operations
            .push(Operation::new("Tj", vec![Object::string_literal(text)]));
        self.operations.push(Operation::new("ET", vec![]));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        self.operations.push(Operation::new("q", vec![]));
        self.operations.push(Operation::new("w", vec![real(width)]));
        self.operations.push(Operation::new(
            "m",
            vec![real(x1), real(Self::flip(y1))],
        ));
        self.operations.push(Operation::new(
            "l",
            vec![real(x2), real(Self::flip(y2))],
        ));
        self.operations.push(Operation::new("S", vec![]));
        self.operations.push(Operation::new("Q", vec![]));
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32) {
        self.operations.push(Operation::new("q", vec![]));
        self.operations.push(Operation::new("w", vec![real(width)]));
        // `re` takes the lower-left corner, which in page coordinates is the
        // rectangle's bottom edge.
        self.operations.push(Operation::new(
            "re",
            vec![real(x), real(Self::flip(y + h)), real(w), real(h)],
        ));
        self.operations.push(Operation::new("S", vec![]));
        self.operations.push(Operation::new("Q", vec![]));
    }
}

//! Minimal drawing-surface capability.
//!
//! The renderer only needs text, lines, and stroked rectangles. Backends
//! implement [`Surface`]; tests use [`RecordingSurface`] to assert on the
//! exact draw calls instead of inspecting a rendered document.

/// Font weight of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Horizontal anchor of a text run: `x` is either the left edge or the
/// right edge of the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

/// RGB text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// The grey of the INVOICE header word (#595959).
    pub const GREY: Color = Color {
        r: 0x59,
        g: 0x59,
        b: 0x59,
    };
}

/// Style of one text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub align: TextAlign,
    pub color: Color,
}

impl TextStyle {
    pub fn normal(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            align: TextAlign::Left,
            color: Color::BLACK,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::normal(size)
        }
    }

    pub fn right_aligned(mut self) -> Self {
        self.align = TextAlign::Right;
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Drawing capability the renderer targets.
///
/// Coordinates are page layout units, top-left origin, y downward. `y` is
/// the text baseline for `draw_text` and the top edge for `draw_rect`.
pub trait Surface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32);
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        width: f32,
    },
}

/// Surface that records draw calls for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// First recorded text op with exactly this content.
    pub fn find_text(&self, needle: &str) -> Option<(f32, f32, &TextStyle)> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text { text, x, y, style } if text == needle => Some((*x, *y, style)),
            _ => None,
        })
    }

    /// All recorded line ops.
    pub fn lines(&self) -> Vec<(f32, f32, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { x1, y1, x2, y2, .. } => Some((*x1, *y1, *x2, *y2)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2, width });
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32) {
        self.ops.push(DrawOp::Rect { x, y, w, h, width });
    }
}

use pictor_core::{Canvas, Color, Result, Size};

use crate::render_object::RenderObject;

/// A fixed-size block of solid color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredBox {
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl ColoredBox {
    pub fn new(width: i32, height: i32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
        }
    }
}

impl RenderObject for ColoredBox {
    fn size(&self, _parent_size: Size) -> Size {
        Size::new(self.width, self.height)
    }

    /// Fills the whole view it is given.
    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        canvas.fill(self.color)
    }
}

use pictor_core::{Canvas, Color, Result, Size};

use crate::render_object::{BoxedRenderObject, RenderObject};

/// Strokes the edges of its view on top of the child's content.
///
/// The stroke takes no extra room: it overwrites the child's outermost
/// `stroke_width` pixels. Wrap the child in `Padding` to keep them visible.
#[derive(Debug)]
pub struct Border {
    child: BoxedRenderObject,
    stroke_width: i32,
    color: Color,
}

impl Border {
    pub fn new(child: impl RenderObject + 'static, stroke_width: i32, color: Color) -> Self {
        Self {
            child: Box::new(child),
            stroke_width,
            color,
        }
    }

    pub fn stroke_width(&self) -> i32 {
        self.stroke_width
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl RenderObject for Border {
    fn size(&self, parent_size: Size) -> Size {
        self.child.size(parent_size)
    }

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        self.child.paint(&mut canvas.reborrow())?;

        let Size { width, height } = canvas.size();
        let sw = self.stroke_width;
        // Side bands run between the top and bottom bands so corners are drawn once.
        canvas.rectangle(0, 0, width, sw, self.color, true)?;
        canvas.rectangle(0, height - sw, width, sw, self.color, true)?;
        canvas.rectangle(0, sw, sw, height - 2 * sw, self.color, true)?;
        canvas.rectangle(width - sw, sw, sw, height - 2 * sw, self.color, true)
    }
}

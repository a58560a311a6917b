use pictor_core::{Canvas, Result, Size};

use crate::alignment::Anchor;
use crate::render_object::{BoxedRenderObject, RenderObject};

/// Positions its child at one of nine anchors without resizing it.
#[derive(Debug)]
pub struct Align {
    child: BoxedRenderObject,
    anchor: Anchor,
}

impl Align {
    pub fn new(child: impl RenderObject + 'static, anchor: Anchor) -> Self {
        Self {
            child: Box::new(child),
            anchor,
        }
    }

    pub fn center(child: impl RenderObject + 'static) -> Self {
        Self::new(child, Anchor::Center)
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }
}

impl RenderObject for Align {
    fn size(&self, parent_size: Size) -> Size {
        self.child.size(parent_size)
    }

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        let child_size = self.child.size(canvas.size());
        let at = self.anchor.offset(canvas.size(), child_size);
        let mut child_canvas = canvas.sub_view(at.x, at.y, child_size, None);
        self.child.paint(&mut child_canvas)
    }
}

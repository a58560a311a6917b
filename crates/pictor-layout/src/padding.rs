use pictor_core::{Canvas, Result, Size};
use serde::{Deserialize, Serialize};

use crate::render_object::{BoxedRenderObject, RenderObject};

/// Per-side insets, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl EdgeInsets {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    /// `size` with the insets taken off. May go negative.
    pub fn deflate(&self, size: Size) -> Size {
        Size::new(size.width - self.horizontal(), size.height - self.vertical())
    }

    pub fn inflate(&self, size: Size) -> Size {
        Size::new(size.width + self.horizontal(), size.height + self.vertical())
    }
}

/// Insets its child by fixed amounts on each side.
#[derive(Debug)]
pub struct Padding {
    child: BoxedRenderObject,
    insets: EdgeInsets,
}

impl Padding {
    pub fn new(child: impl RenderObject + 'static, insets: EdgeInsets) -> Self {
        Self {
            child: Box::new(child),
            insets,
        }
    }

    /// The same inset on all four sides.
    pub fn all(child: impl RenderObject + 'static, inset: i32) -> Self {
        Self::new(child, EdgeInsets::all(inset))
    }

    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }
}

impl RenderObject for Padding {
    fn size(&self, parent_size: Size) -> Size {
        let inner = self.child.size(self.insets.deflate(parent_size));
        self.insets.inflate(inner)
    }

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        let inner = self.insets.deflate(canvas.size());
        let mut child_canvas = canvas.sub_view(self.insets.left, self.insets.top, inner, None);
        self.child.paint(&mut child_canvas)
    }
}

use std::fmt;

use pictor_core::{Canvas, Result, Size};

use crate::render_object::RenderObject;

type PaintFn = dyn Fn(&mut Canvas<'_>) -> Result<()>;

/// Escape hatch: a fixed-size node whose drawing is an arbitrary callback.
pub struct Painter {
    width: i32,
    height: i32,
    callback: Box<PaintFn>,
}

impl Painter {
    pub fn new<F>(width: i32, height: i32, callback: F) -> Self
    where
        F: Fn(&mut Canvas<'_>) -> Result<()> + 'static,
    {
        Self {
            width,
            height,
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for Painter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Painter")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl RenderObject for Painter {
    fn size(&self, _parent_size: Size) -> Size {
        Size::new(self.width, self.height)
    }

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        (self.callback)(canvas)
    }
}

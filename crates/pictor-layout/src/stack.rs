use pictor_core::{Canvas, Result, Size};

use crate::cache::SizeCache;
use crate::render_object::{BoxedRenderObject, RenderObject};

/// Overlays its children at the origin, first child at the bottom.
///
/// Children share one region of the buffer, so later children overwrite
/// earlier ones wherever they overlap.
#[derive(Debug)]
pub struct Stack {
    children: Vec<BoxedRenderObject>,
    cache: SizeCache,
}

impl Stack {
    pub fn new(children: Vec<BoxedRenderObject>) -> Self {
        Self {
            children,
            cache: SizeCache::new(),
        }
    }

    pub fn children(&self) -> &[BoxedRenderObject] {
        &self.children
    }
}

impl RenderObject for Stack {
    fn size(&self, parent_size: Size) -> Size {
        self.cache.get_or_compute(parent_size, || {
            self.children
                .iter()
                .map(|child| child.size(parent_size))
                .fold(Size::ZERO, |acc, s| acc.union(&s))
        })
    }

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        let canvas_size = canvas.size();
        for child in &self.children {
            let child_size = child.size(canvas_size);
            let mut child_canvas = canvas.sub_view(0, 0, child_size, None);
            child.paint(&mut child_canvas)?;
        }
        Ok(())
    }
}

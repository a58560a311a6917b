use std::fmt;

use pictor_core::{Canvas, CanvasConfig, PixelBuffer, Result, Size};

/// A node in the layout tree.
///
/// Layout is two-phase. `size` measures the node against the space its
/// parent offers and must return the same answer for the same input.
/// `paint` then draws into a view whose size is what the parent decided to
/// give it, never touching pixels outside that view.
pub trait RenderObject: fmt::Debug {
    fn size(&self, parent_size: Size) -> Size;

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()>;
}

/// Owned child handle; parents exclusively own their children.
pub type BoxedRenderObject = Box<dyn RenderObject>;

impl<T: RenderObject + ?Sized> RenderObject for Box<T> {
    fn size(&self, parent_size: Size) -> Size {
        (**self).size(parent_size)
    }

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        (**self).paint(canvas)
    }
}

/// Allocate a buffer for `config`, paint `root` over the whole of it and
/// hand back the finished raster.
pub fn render(root: &dyn RenderObject, config: &CanvasConfig) -> Result<PixelBuffer> {
    let mut buffer = PixelBuffer::new(config.size());
    {
        let mut canvas = Canvas::with_config(&mut buffer, config);
        let canvas_size = canvas.size();
        let root_size = root.size(canvas_size);
        log::debug!(
            "Rendering {}x{} tree onto {}x{} canvas",
            root_size.width,
            root_size.height,
            canvas_size.width,
            canvas_size.height
        );
        if root_size.width > canvas_size.width || root_size.height > canvas_size.height {
            log::warn!(
                "Root wants {}x{} but the canvas is {}x{}",
                root_size.width,
                root_size.height,
                canvas_size.width,
                canvas_size.height
            );
        }
        root.paint(&mut canvas)?;
    }
    Ok(buffer)
}

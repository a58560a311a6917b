use std::cell::OnceCell;
use std::sync::Arc;

use pictor_core::{Canvas, Color, Point, Result, Size};

use crate::render_object::RenderObject;
use crate::text_service::{FontDescriptor, TextService};

/// Extra room added around measured text so glyph overhangs are not cut.
pub const TEXT_PADDING: i32 = 4;

/// A run of text drawn by an external [`TextService`].
#[derive(Debug)]
pub struct Text {
    text: String,
    color: Color,
    font_size: f32,
    font: FontDescriptor,
    service: Arc<dyn TextService>,
    measured: OnceCell<Size>,
}

impl Text {
    pub fn new(
        text: impl Into<String>,
        color: Color,
        font_size: f32,
        font_name: impl Into<String>,
        service: Arc<dyn TextService>,
    ) -> Self {
        Self {
            text: text.into(),
            color,
            font_size,
            font: FontDescriptor::new(font_name),
            service,
            measured: OnceCell::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }
}

impl RenderObject for Text {
    /// Measured once; text and font never change after construction.
    fn size(&self, _parent_size: Size) -> Size {
        *self.measured.get_or_init(|| {
            let m = self.service.measure(&self.text, &self.font, self.font_size);
            Size::new(m.width + TEXT_PADDING, m.height + TEXT_PADDING)
        })
    }

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        let size = canvas.size();
        let mut clipped = canvas.sub_view(0, 0, size, Some(true));
        let baseline = Point::new(0, self.font_size as i32);
        self.service.render(
            &self.text,
            &self.font,
            self.font_size,
            self.color,
            baseline,
            &mut clipped,
        )
    }
}

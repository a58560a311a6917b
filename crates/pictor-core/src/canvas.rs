//! Canvas views over a shared [`PixelBuffer`].
//!
//! A [`Canvas`] never owns pixels. It is an offset, a logical size and an
//! out-of-bounds policy laid over a mutably borrowed buffer. Sub-views
//! reborrow their parent, so any number of nested views can alias one
//! buffer while the borrow checker keeps only one of them writable at a time.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::config::{CanvasConfig, CircleOutline};
use crate::error::{RasterError, Result};
use crate::geometry::{Point, Size};

#[derive(Debug)]
pub struct Canvas<'a> {
    buffer: &'a mut PixelBuffer,
    size: Size,
    offset: Point,
    allow_out_of_bounds: bool,
    circle_outline: CircleOutline,
}

impl<'a> Canvas<'a> {
    /// A strict view covering the whole buffer.
    pub fn new(buffer: &'a mut PixelBuffer) -> Self {
        let size = buffer.size();
        Self {
            buffer,
            size,
            offset: Point::ORIGIN,
            allow_out_of_bounds: false,
            circle_outline: CircleOutline::default(),
        }
    }

    /// A full-buffer view carrying the policy settings of `config`.
    pub fn with_config(buffer: &'a mut PixelBuffer, config: &CanvasConfig) -> Self {
        let mut canvas = Self::new(buffer);
        canvas.allow_out_of_bounds = config.allow_out_of_bounds;
        canvas.circle_outline = config.circle_outline;
        canvas
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Position of this view's local origin in buffer coordinates.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn allows_out_of_bounds(&self) -> bool {
        self.allow_out_of_bounds
    }

    pub fn set_allow_out_of_bounds(&mut self, allow: bool) {
        self.allow_out_of_bounds = allow;
    }

    pub fn circle_outline(&self) -> CircleOutline {
        self.circle_outline
    }

    pub fn set_circle_outline(&mut self, outline: CircleOutline) {
        self.circle_outline = outline;
    }

    /// A view of `size` at local `(x, y)`, aliasing the same pixels.
    ///
    /// The out-of-bounds policy is inherited unless `allow_out_of_bounds`
    /// overrides it. No pixel data is copied.
    pub fn sub_view(
        &mut self,
        x: i32,
        y: i32,
        size: Size,
        allow_out_of_bounds: Option<bool>,
    ) -> Canvas<'_> {
        Canvas {
            buffer: &mut *self.buffer,
            size,
            offset: self.offset.translate(x, y),
            allow_out_of_bounds: allow_out_of_bounds.unwrap_or(self.allow_out_of_bounds),
            circle_outline: self.circle_outline,
        }
    }

    /// The same view, reborrowed for a shorter lifetime.
    pub fn reborrow(&mut self) -> Canvas<'_> {
        let size = self.size;
        self.sub_view(0, 0, size, None)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.size.contains(x, y)
    }

    /// Fail fast when a strict view is asked about a point outside it.
    /// Permissive views accept every point.
    pub fn check_point(&self, x: i32, y: i32) -> Result<()> {
        if self.allow_out_of_bounds || self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> RasterError {
        RasterError::OutOfBounds {
            x,
            y,
            size: self.size,
        }
    }

    /// Write one pixel at local `(x, y)`.
    ///
    /// Outside the view a strict canvas fails with `OutOfBounds` and a
    /// permissive one drops the write. A translated coordinate that lands
    /// outside the backing buffer is dropped as well.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        if !self.in_bounds(x, y) {
            if self.allow_out_of_bounds {
                return Ok(());
            }
            return Err(self.out_of_bounds(x, y));
        }
        self.buffer.put(self.offset.x + x, self.offset.y + y, color);
        Ok(())
    }

    /// Read one pixel at local `(x, y)`.
    ///
    /// Out-of-range reads fail on a strict canvas and yield
    /// [`Color::TRANSPARENT`] on a permissive one, mirroring how writes clip.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Color> {
        if !self.in_bounds(x, y) {
            if self.allow_out_of_bounds {
                return Ok(Color::TRANSPARENT);
            }
            return Err(self.out_of_bounds(x, y));
        }
        Ok(self
            .buffer
            .get(self.offset.x + x, self.offset.y + y)
            .unwrap_or(Color::TRANSPARENT))
    }

    /// Copy an already rendered canvas into this one with its top-left at `(x, y)`.
    ///
    /// Child render objects paint through [`Canvas::sub_view`]; this is for
    /// pasting finished rasters.
    pub fn compose(&mut self, other: &Canvas<'_>, x: i32, y: i32) -> Result<()> {
        let other_size = other.size();
        if other_size.is_empty() {
            return Ok(());
        }
        // Both regions are axis aligned, so the two extreme corners suffice.
        self.check_point(x, y)?;
        self.check_point(x + other_size.width - 1, y + other_size.height - 1)?;

        log::trace!(
            "Composing {}x{} canvas at ({}, {})",
            other_size.width,
            other_size.height,
            x,
            y
        );
        for j in 0..other_size.height {
            for i in 0..other_size.width {
                let color = other.get_pixel(i, j)?;
                self.set_pixel(x + i, y + j, color)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_covers_buffer() {
        let mut buf = PixelBuffer::new(Size::new(20, 10));
        let canvas = Canvas::new(&mut buf);
        assert_eq!(canvas.size(), Size::new(20, 10));
        assert_eq!(canvas.offset(), Point::ORIGIN);
        assert!(!canvas.allows_out_of_bounds());
    }

    #[test]
    fn test_strict_set_out_of_bounds_fails() {
        let mut buf = PixelBuffer::new(Size::new(10, 10));
        let mut canvas = Canvas::new(&mut buf);
        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10), (100, 100)] {
            assert_eq!(
                canvas.set_pixel(x, y, Color::RED),
                Err(RasterError::OutOfBounds {
                    x,
                    y,
                    size: Size::new(10, 10)
                })
            );
        }
        assert_eq!(buf.count(Color::RED), 0);
    }

    #[test]
    fn test_permissive_set_out_of_bounds_is_dropped() {
        let mut buf = PixelBuffer::new(Size::new(10, 10));
        let config = CanvasConfig::new(10, 10).with_out_of_bounds(true);
        let mut canvas = Canvas::with_config(&mut buf, &config);
        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10)] {
            assert!(canvas.set_pixel(x, y, Color::RED).is_ok());
        }
        assert_eq!(buf.count(Color::TRANSPARENT), 100);
    }

    #[test]
    fn test_sub_view_aliases_parent() {
        let mut buf = PixelBuffer::new(Size::new(50, 50));
        let mut canvas = Canvas::new(&mut buf);
        {
            let mut child = canvas.sub_view(10, 20, Size::new(5, 5), None);
            assert_eq!(child.offset(), Point::new(10, 20));
            child.set_pixel(2, 3, Color::BLUE).unwrap();
        }
        assert_eq!(canvas.get_pixel(12, 23).unwrap(), Color::BLUE);

        canvas.set_pixel(14, 24, Color::GREEN).unwrap();
        let child = canvas.sub_view(10, 20, Size::new(5, 5), None);
        assert_eq!(child.get_pixel(4, 4).unwrap(), Color::GREEN);
    }

    #[test]
    fn test_nested_sub_view_offsets_accumulate() {
        let mut buf = PixelBuffer::new(Size::new(50, 50));
        let mut canvas = Canvas::new(&mut buf);
        let mut outer = canvas.sub_view(5, 5, Size::new(30, 30), None);
        let mut inner = outer.sub_view(3, 4, Size::new(10, 10), None);
        assert_eq!(inner.offset(), Point::new(8, 9));
        inner.set_pixel(0, 0, Color::RED).unwrap();
        assert_eq!(buf.get(8, 9), Some(Color::RED));
    }

    #[test]
    fn test_sub_view_bounds_are_local() {
        let mut buf = PixelBuffer::new(Size::new(50, 50));
        let mut canvas = Canvas::new(&mut buf);
        let mut child = canvas.sub_view(10, 10, Size::new(5, 5), None);
        assert!(child.set_pixel(5, 0, Color::RED).is_err());

        let mut clipped = canvas.sub_view(10, 10, Size::new(5, 5), Some(true));
        assert!(clipped.set_pixel(5, 0, Color::RED).is_ok());
        assert_eq!(buf.count(Color::RED), 0);
    }

    #[test]
    fn test_sub_view_inherits_policy() {
        let mut buf = PixelBuffer::new(Size::new(10, 10));
        let mut canvas = Canvas::new(&mut buf);
        canvas.set_allow_out_of_bounds(true);
        canvas.set_circle_outline(CircleOutline::PerimeterProportional);
        let child = canvas.sub_view(0, 0, Size::new(2, 2), None);
        assert!(child.allows_out_of_bounds());
        assert_eq!(child.circle_outline(), CircleOutline::PerimeterProportional);
    }

    #[test]
    fn test_get_pixel_policy() {
        let mut buf = PixelBuffer::new(Size::new(10, 10));
        buf.fill(Color::RED);
        let mut canvas = Canvas::new(&mut buf);
        assert!(canvas.get_pixel(10, 0).is_err());
        canvas.set_allow_out_of_bounds(true);
        assert_eq!(canvas.get_pixel(10, 0).unwrap(), Color::TRANSPARENT);
        assert_eq!(canvas.get_pixel(9, 9).unwrap(), Color::RED);
    }

    #[test]
    fn test_write_past_buffer_edge_is_dropped() {
        let mut buf = PixelBuffer::new(Size::new(10, 10));
        let mut canvas = Canvas::new(&mut buf);
        let mut child = canvas.sub_view(8, 8, Size::new(5, 5), None);
        assert!(child.set_pixel(4, 4, Color::RED).is_ok());
        assert_eq!(child.get_pixel(4, 4).unwrap(), Color::TRANSPARENT);
        assert_eq!(buf.count(Color::RED), 0);
    }

    #[test]
    fn test_compose_copies_pixels() {
        let mut src = PixelBuffer::new(Size::new(3, 2));
        src.fill(Color::BLUE);
        let mut dst = PixelBuffer::new(Size::new(10, 10));
        {
            let other = Canvas::new(&mut src);
            let mut canvas = Canvas::new(&mut dst);
            canvas.compose(&other, 7, 8).unwrap();
        }
        assert_eq!(dst.count(Color::BLUE), 6);
        assert_eq!(dst.get(7, 8), Some(Color::BLUE));
        assert_eq!(dst.get(9, 9), Some(Color::BLUE));
    }

    #[test]
    fn test_compose_rejects_overflow() {
        let mut src = PixelBuffer::new(Size::new(3, 3));
        src.fill(Color::BLUE);
        let mut dst = PixelBuffer::new(Size::new(10, 10));
        {
            let other = Canvas::new(&mut src);
            let mut canvas = Canvas::new(&mut dst);
            assert_eq!(
                canvas.compose(&other, 8, 0),
                Err(RasterError::OutOfBounds {
                    x: 10,
                    y: 2,
                    size: Size::new(10, 10)
                })
            );
        }
        assert_eq!(dst.count(Color::BLUE), 0);
    }
}

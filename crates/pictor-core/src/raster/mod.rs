//! Rasterization primitives.
//!
//! Every primitive is a method on [`Canvas`](crate::Canvas), works in the
//! view's local coordinates, and reduces to [`Canvas::set_pixel`] calls, so
//! the view's out-of-bounds policy applies to every pixel written.
//! Rectangles, circles and lines additionally check a few key points up
//! front to fail before any pixel is touched.
//!
//! Intermediate coordinates are widened to `i64`. On a permissive view,
//! rows and spans are clamped to the view before they are walked, so a
//! shape far larger than the view costs no more than the pixels it covers.

mod circle;
mod line;
mod polygon;
mod rect;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;

/// Narrow a widened coordinate back to `i32`, pinning it at the range ends.
pub(crate) fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Canvas<'_> {
    /// Inclusive row range worth walking for a shape spanning `y0..=y1`.
    ///
    /// Strict views keep the full range so the first stray row still fails.
    pub(crate) fn visible_rows(&self, y0: i64, y1: i64) -> (i64, i64) {
        if self.allows_out_of_bounds() {
            (y0.max(0), y1.min(i64::from(self.height()) - 1))
        } else {
            (y0, y1)
        }
    }

    /// Write the inclusive horizontal run `x0..=x1` on row `y`.
    pub(crate) fn span(&mut self, x0: i64, x1: i64, y: i64, color: Color) -> Result<()> {
        if self.allows_out_of_bounds() {
            if y < 0 || y >= i64::from(self.height()) {
                return Ok(());
            }
            let lo = x0.max(0);
            let hi = x1.min(i64::from(self.width()) - 1);
            for x in lo..=hi {
                self.set_pixel(x as i32, y as i32, color)?;
            }
            return Ok(());
        }
        for x in x0..=x1 {
            self.set_pixel(saturate(x), saturate(y), color)?;
        }
        Ok(())
    }
}

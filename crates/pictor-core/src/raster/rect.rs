use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;
use crate::raster::saturate;

impl Canvas<'_> {
    /// Draw a `w` x `h` rectangle with its top-left corner at `(x, y)`.
    ///
    /// Outlines write the top and bottom rows, then the left and right
    /// columns strictly between them, so no corner is written twice.
    pub fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        fill: bool,
    ) -> Result<()> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        let (x, y) = (i64::from(x), i64::from(y));
        let right = x + i64::from(w) - 1;
        let bottom = y + i64::from(h) - 1;
        for (cx, cy) in [(x, y), (right, y), (x, bottom), (right, bottom)] {
            self.check_point(saturate(cx), saturate(cy))?;
        }

        if fill {
            let (top, last) = self.visible_rows(y, bottom);
            for j in top..=last {
                self.span(x, right, j, color)?;
            }
            return Ok(());
        }

        self.span(x, right, y, color)?;
        if bottom != y {
            self.span(x, right, bottom, color)?;
        }
        let (top, last) = self.visible_rows(y + 1, bottom - 1);
        for j in top..=last {
            self.set_pixel(saturate(x), saturate(j), color)?;
            if right != x {
                self.set_pixel(saturate(right), saturate(j), color)?;
            }
        }
        Ok(())
    }

    /// Fill the whole view with `color`.
    pub fn fill(&mut self, color: Color) -> Result<()> {
        let size = self.size();
        self.rectangle(0, 0, size.width, size.height, color, true)
    }
}

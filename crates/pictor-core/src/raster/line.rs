use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;
use crate::geometry::Point;

impl Canvas<'_> {
    /// Draw a line from `(x1, y1)` to `(x2, y2)`.
    ///
    /// Only the endpoints are checked up front. Widths of one or less use
    /// Bresenham; wider lines fill the rectangle swept by the segment, which
    /// gives square end caps. A zero-length line draws a filled circle of
    /// radius `width`.
    pub fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        width: i32,
    ) -> Result<()> {
        self.check_point(x1, y1)?;
        self.check_point(x2, y2)?;

        if x1 == x2 && y1 == y2 {
            return self.circle(x1, y1, width, color, true);
        }
        if width <= 1 {
            return self.bresenham(x1, y1, x2, y2, color);
        }

        let dx = (i64::from(x2) - i64::from(x1)) as f64;
        let dy = (i64::from(y2) - i64::from(y1)) as f64;
        let length = dx.hypot(dy);
        let half_width = f64::from(width) / 2.0;
        let px = (-dy / length * half_width).round() as i32;
        let py = (dx / length * half_width).round() as i32;

        let corners = [
            Point::new(x1.saturating_add(px), y1.saturating_add(py)),
            Point::new(x1.saturating_sub(px), y1.saturating_sub(py)),
            Point::new(x2.saturating_sub(px), y2.saturating_sub(py)),
            Point::new(x2.saturating_add(px), y2.saturating_add(py)),
        ];
        self.polygon(&corners, color, true)
    }

    /// Integer Bresenham stepping, writing both endpoints.
    pub(crate) fn bresenham(
        &mut self,
        mut x1: i32,
        mut y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) -> Result<()> {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.set_pixel(x1, y1, color)?;
            if x1 == x2 && y1 == y2 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x1 += sx;
            }
            if e2 < dx {
                err += dx;
                y1 += sy;
            }
        }
    }
}

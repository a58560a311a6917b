use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;
use crate::geometry::{BBox, Point};

impl Canvas<'_> {
    /// Draw a polygon through `points`, closing the last edge back to the first.
    ///
    /// Fewer than three points draw nothing. Filled polygons use the
    /// even-odd rule.
    pub fn polygon(&mut self, points: &[Point], color: Color, filled: bool) -> Result<()> {
        if points.len() < 3 {
            return Ok(());
        }
        if !filled {
            let mut prev = points[points.len() - 1];
            for &p in points {
                self.bresenham(prev.x, prev.y, p.x, p.y, color)?;
                prev = p;
            }
            return Ok(());
        }

        let Some(bbox) = BBox::from_points(points) else {
            return Ok(());
        };
        if self.allows_out_of_bounds() {
            let view = BBox::new(
                Point::ORIGIN,
                Point::new(self.width() - 1, self.height() - 1),
            );
            if !bbox.intersects(&view) {
                return Ok(());
            }
        }
        let (top, last) = self.visible_rows(i64::from(bbox.min.y), i64::from(bbox.max.y));
        let mut crossings = Vec::with_capacity(points.len());
        for y in top..=last {
            scanline_crossings(points, y, &mut crossings);
            for span in crossings.chunks_exact(2) {
                self.span(span[0], span[1], y, color)?;
            }
        }
        Ok(())
    }
}

/// Sorted x positions where row `y` crosses the polygon's edges.
///
/// An edge counts when exactly one endpoint lies strictly below the row,
/// which keeps shared vertices from being counted twice.
fn scanline_crossings(points: &[Point], y: i64, out: &mut Vec<i64>) {
    out.clear();
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (pi, pj) = (points[i], points[j]);
        let (xi, yi) = (i64::from(pi.x), i64::from(pi.y));
        let (xj, yj) = (i64::from(pj.x), i64::from(pj.y));
        if (yi > y) != (yj > y) {
            let step = i128::from(y - yi) * i128::from(xj - xi) / i128::from(yj - yi);
            out.push(xi + step as i64);
        }
        j = i;
    }
    out.sort_unstable();
}

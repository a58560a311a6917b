use std::f64::consts::PI;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::CircleOutline;
use crate::error::Result;
use crate::raster::saturate;

/// Upper bound on perimeter-proportional outline samples.
const MAX_OUTLINE_SAMPLES: i64 = 1 << 20;

impl Canvas<'_> {
    /// Draw a circle of radius `r` centered at `(x, y)`.
    ///
    /// Filled circles are scanline disks: row `y + dy` spans
    /// `x ± floor(sqrt(r² - dy²))`. Outlines are point-sampled according to
    /// the view's [`CircleOutline`] setting.
    pub fn circle(&mut self, x: i32, y: i32, r: i32, color: Color, fill: bool) -> Result<()> {
        if r < 0 {
            return Ok(());
        }
        let extremes = [
            (x, y),
            (x.saturating_add(r), y),
            (x, y.saturating_add(r)),
            (x.saturating_sub(r), y),
            (x, y.saturating_sub(r)),
        ];
        for (px, py) in extremes {
            self.check_point(px, py)?;
        }

        let (cx, cy, r) = (i64::from(x), i64::from(y), i64::from(r));
        if fill {
            let r_sq = r * r;
            let (top, last) = self.visible_rows(cy - r, cy + r);
            for row in top..=last {
                let dy = row - cy;
                let dx = ((r_sq - dy * dy) as f64).sqrt().floor() as i64;
                self.span(cx - dx, cx + dx, row, color)?;
            }
            return Ok(());
        }

        let radius = r as f64;
        match self.circle_outline() {
            CircleOutline::Fixed360 => {
                for step in 0..360 {
                    let angle = f64::from(step) * PI / 180.0;
                    let nx = cx + (radius * angle.cos()) as i64;
                    let ny = cy + (radius * angle.sin()) as i64;
                    self.set_pixel(saturate(nx), saturate(ny), color)?;
                }
            }
            CircleOutline::PerimeterProportional => {
                let samples = (r.max(1) * 8).min(MAX_OUTLINE_SAMPLES);
                for step in 0..samples {
                    let angle = step as f64 * 2.0 * PI / samples as f64;
                    let nx = cx + (radius * angle.cos()).round() as i64;
                    let ny = cy + (radius * angle.sin()).round() as i64;
                    self.set_pixel(saturate(nx), saturate(ny), color)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Canvas, CanvasConfig, CircleOutline, Color, PixelBuffer, RasterError, Size};

    #[test]
    fn test_filled_circle() {
        let mut buf = PixelBuffer::new(Size::new(100, 100));
        Canvas::new(&mut buf)
            .circle(50, 50, 20, Color::GREEN, true)
            .unwrap();
        for (x, y) in [(50, 50), (50, 30), (50, 70), (30, 50), (70, 50)] {
            assert_eq!(buf.get(x, y), Some(Color::GREEN), "pixel ({x}, {y})");
        }
        // (64, 64) is 19.8 from the center; (65, 65) is 21.2.
        assert_eq!(buf.get(64, 64), Some(Color::GREEN));
        assert_eq!(buf.get(65, 65), Some(Color::TRANSPARENT));
        assert_eq!(buf.get(71, 50), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_filled_circle_rows() {
        let mut buf = PixelBuffer::new(Size::new(20, 20));
        Canvas::new(&mut buf).circle(10, 10, 3, Color::RED, true).unwrap();
        // Row widths for r = 3: dy = 0 -> 7, ±1 -> 5 (floor sqrt 8 = 2), ±2 -> 5, ±3 -> 1.
        assert_eq!(buf.count(Color::RED), 7 + 2 * 5 + 2 * 5 + 2);
    }

    #[test]
    fn test_zero_radius_is_single_pixel() {
        let mut buf = PixelBuffer::new(Size::new(5, 5));
        Canvas::new(&mut buf).circle(2, 2, 0, Color::RED, true).unwrap();
        assert_eq!(buf.count(Color::RED), 1);
    }

    #[test]
    fn test_outline_hits_axis_points() {
        let mut buf = PixelBuffer::new(Size::new(100, 100));
        Canvas::new(&mut buf)
            .circle(50, 50, 20, Color::YELLOW, false)
            .unwrap();
        for (x, y) in [(50, 30), (50, 70), (30, 50), (70, 50)] {
            assert_eq!(buf.get(x, y), Some(Color::YELLOW), "pixel ({x}, {y})");
        }
        assert_eq!(buf.get(50, 50), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_fixed_outline_leaves_gaps_on_large_radius() {
        let size = Size::new(500, 500);
        let mut fixed = PixelBuffer::new(size);
        Canvas::new(&mut fixed)
            .circle(250, 250, 200, Color::RED, false)
            .unwrap();
        assert!(fixed.count(Color::RED) <= 360);

        let mut dense = PixelBuffer::new(size);
        let config =
            CanvasConfig::new(500, 500).with_circle_outline(CircleOutline::PerimeterProportional);
        Canvas::with_config(&mut dense, &config)
            .circle(250, 250, 200, Color::RED, false)
            .unwrap();
        assert!(dense.count(Color::RED) > 1000);
    }

    #[test]
    fn test_strict_circle_checks_extremes() {
        let mut buf = PixelBuffer::new(Size::new(20, 20));
        let result = Canvas::new(&mut buf).circle(5, 10, 6, Color::RED, true);
        assert_eq!(
            result,
            Err(RasterError::OutOfBounds {
                x: -1,
                y: 10,
                size: Size::new(20, 20)
            })
        );
        assert_eq!(buf.count(Color::RED), 0);
    }

    #[test]
    fn test_huge_radius_on_permissive_canvas() {
        let config = CanvasConfig::new(10, 10)
            .with_out_of_bounds(true)
            .with_circle_outline(CircleOutline::PerimeterProportional);
        let mut buf = PixelBuffer::new(Size::new(10, 10));
        let mut canvas = Canvas::with_config(&mut buf, &config);
        canvas.circle(5, 5, 300_000_000, Color::RED, false).unwrap();
        canvas.circle(5, 5, i32::MAX, Color::RED, false).unwrap();
        assert_eq!(buf.count(Color::RED), 0);

        let config = CanvasConfig::new(10, 10).with_out_of_bounds(true);
        let mut canvas = Canvas::with_config(&mut buf, &config);
        canvas.circle(i32::MIN, 5, i32::MAX, Color::BLUE, false).unwrap();
        canvas.circle(5, 5, i32::MAX, Color::GREEN, true).unwrap();
        assert_eq!(buf.count(Color::GREEN), 100);
    }

    #[test]
    fn test_strict_huge_radius_reports_saturated_extreme() {
        let mut buf = PixelBuffer::new(Size::new(10, 10));
        let result = Canvas::new(&mut buf).circle(5, 5, i32::MAX, Color::RED, true);
        assert_eq!(
            result,
            Err(RasterError::OutOfBounds {
                x: i32::MAX,
                y: 5,
                size: Size::new(10, 10)
            })
        );
    }
}

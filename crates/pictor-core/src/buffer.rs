use crate::color::Color;
use crate::geometry::Size;

/// Read access to a finished raster, the boundary consumed by encoders.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Pixel at `(x, y)`. Callers stay within `width() x height()`.
    fn pixel(&self, x: u32, y: u32) -> Color;
}

/// The dense, row-major pixel store every canvas view points into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer. Negative extents are treated as zero.
    pub fn new(size: Size) -> Self {
        let width = size.width.max(0) as u32;
        let height = size.height.max(0) as u32;
        log::debug!("Allocating {}x{} pixel buffer", width, height);
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel at absolute coordinates, `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write at absolute coordinates. Returns false when the coordinate is outside the buffer.
    pub fn put(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Row-major RGBA bytes, four per pixel.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Count pixels equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}

impl PixelSource for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let buf = PixelBuffer::new(Size::new(4, 3));
        assert_eq!(buf.pixels().len(), 12);
        assert_eq!(buf.count(Color::TRANSPARENT), 12);
    }

    #[test]
    fn test_negative_size_is_empty() {
        let buf = PixelBuffer::new(Size::new(-5, 10));
        assert_eq!(buf.width(), 0);
        assert!(buf.pixels().is_empty());
    }

    #[test]
    fn test_put_and_get() {
        let mut buf = PixelBuffer::new(Size::new(4, 3));
        assert!(buf.put(3, 2, Color::RED));
        assert!(!buf.put(4, 2, Color::RED));
        assert_eq!(buf.get(3, 2), Some(Color::RED));
        assert_eq!(buf.get(-1, 0), None);
        assert_eq!(buf.pixel(3, 2), Color::RED);
    }

    #[test]
    fn test_rgba_bytes_row_major() {
        let mut buf = PixelBuffer::new(Size::new(2, 2));
        buf.put(1, 0, Color::rgba(1, 2, 3, 4));
        let bytes = buf.to_rgba_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(PixelBuffer::from_pixels(2, 2, vec![Color::RED; 3]).is_none());
        assert!(PixelBuffer::from_pixels(2, 2, vec![Color::RED; 4]).is_some());
    }
}

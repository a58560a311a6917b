//! The text measurement and rendering boundary.
//!
//! The layout tree never interprets fonts. It asks a [`TextService`] how
//! big a string is and asks it again to draw the glyphs into a view.

use std::fmt;

use pictor_core::{Canvas, Color, Point, Result, Size};
use serde::{Deserialize, Serialize};

/// Logical font selection passed through to the text service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub name: String,
}

impl FontDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("default")
    }
}

pub trait TextService: fmt::Debug + Send + Sync {
    /// Extent of `text` set in `font` at `font_size`. Deterministic for fixed inputs.
    fn measure(&self, text: &str, font: &FontDescriptor, font_size: f32) -> Size;

    /// Draw `text` with its first baseline at `baseline`, clipping to `canvas`.
    fn render(
        &self,
        text: &str,
        font: &FontDescriptor,
        font_size: f32,
        color: Color,
        baseline: Point,
        canvas: &mut Canvas<'_>,
    ) -> Result<()>;
}

/// A font-free text service with a fixed advance per character.
///
/// Every glyph occupies a cell `0.6 * font_size` wide and `font_size` tall;
/// visible characters are drawn as a solid block in the lower three
/// quarters of their cell. Layout and tests get stable metrics without a
/// font rasterizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAdvanceTextService;

impl FixedAdvanceTextService {
    pub fn new() -> Self {
        Self
    }

    fn advance(font_size: f32) -> i32 {
        ((font_size * 0.6).round() as i32).max(1)
    }

    fn line_height(font_size: f32) -> i32 {
        (font_size.round() as i32).max(1)
    }
}

impl TextService for FixedAdvanceTextService {
    fn measure(&self, text: &str, _font: &FontDescriptor, font_size: f32) -> Size {
        let columns = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = text.lines().count().max(1);
        Size::new(
            columns as i32 * Self::advance(font_size),
            rows as i32 * Self::line_height(font_size),
        )
    }

    fn render(
        &self,
        text: &str,
        _font: &FontDescriptor,
        font_size: f32,
        color: Color,
        baseline: Point,
        canvas: &mut Canvas<'_>,
    ) -> Result<()> {
        let advance = Self::advance(font_size);
        let line_height = Self::line_height(font_size);
        let ascent = line_height - line_height / 4;
        for (row, line) in text.lines().enumerate() {
            let line_baseline = baseline.y + row as i32 * line_height;
            for (col, ch) in line.chars().enumerate() {
                if ch.is_whitespace() {
                    continue;
                }
                let x = baseline.x + col as i32 * advance;
                canvas.rectangle(
                    x,
                    line_baseline - ascent,
                    (advance - 1).max(1),
                    ascent,
                    color,
                    true,
                )?;
            }
        }
        Ok(())
    }
}

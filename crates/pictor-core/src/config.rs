use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// How circle outlines are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CircleOutline {
    /// 360 one-degree samples, coordinates truncated toward zero.
    /// Leaves gaps once the circumference exceeds 360 pixels.
    #[default]
    Fixed360,
    /// Eight samples per unit of radius, coordinates rounded. Gap free.
    PerimeterProportional,
}

/// Construction-time settings for a top-level canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    pub width: i32,
    pub height: i32,
    /// Clip out-of-range writes instead of failing.
    pub allow_out_of_bounds: bool,
    pub circle_outline: CircleOutline,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            allow_out_of_bounds: false,
            circle_outline: CircleOutline::Fixed360,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_out_of_bounds(mut self, allow: bool) -> Self {
        self.allow_out_of_bounds = allow;
        self
    }

    pub fn with_circle_outline(mut self, outline: CircleOutline) -> Self {
        self.circle_outline = outline;
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

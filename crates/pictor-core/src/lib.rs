//! # Pictor Core
//!
//! In-memory raster canvas for the Pictor renderer: a single owned
//! [`PixelBuffer`], aliasing [`Canvas`] views with a strict or clipping
//! out-of-bounds policy, and the rasterization primitives (rectangles,
//! circles, lines, polygons) every higher layer bottoms out in.

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod raster;

pub use buffer::{PixelBuffer, PixelSource};
pub use canvas::Canvas;
pub use color::Color;
pub use config::{CanvasConfig, CircleOutline};
pub use error::{RasterError, Result};
pub use geometry::{BBox, Point, Size};

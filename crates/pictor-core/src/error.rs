use thiserror::Error;

use crate::geometry::Size;

/// Errors raised by canvas writes and rasterization primitives.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    /// A strict canvas was asked to touch a pixel outside its view.
    #[error("pixel ({x}, {y}) is out of bounds for a {}x{} canvas", .size.width, .size.height)]
    OutOfBounds { x: i32, y: i32, size: Size },
}

pub type Result<T> = std::result::Result<T, RasterError>;

//! # Pictor I/O
//!
//! Getting scenes in and frames out: JSON scene descriptions that build a
//! layout tree, and a raw RGBA frame format for handing finished rasters
//! to an image encoder.

pub mod frame;
pub mod scene;

pub use frame::{FrameError, FrameReader, FrameWriter};
pub use scene::{ColorSpec, InsetsSpec, SceneError, SceneFile, SceneNode};

//! Image export for the blackboard.
//!
//! This module provides:
//! - PNG encoding of a raster snapshot
//! - Writing the encoded image to the export directory under a fixed name

pub mod file;
pub mod types;

pub use file::{ExportConfig, encode_png, save_png};
pub use types::ExportError;

//! Error type for image export.

use crate::draw::RasterError;
use thiserror::Error;

/// Errors that can occur while exporting the drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save image: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] RasterError),
}

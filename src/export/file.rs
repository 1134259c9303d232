//! File saving functionality for the exported drawing.

use super::types::ExportError;
use crate::draw::RasterBuffer;
use std::fs;
use std::path::{Path, PathBuf};

/// File name every export is written to.
pub const DEFAULT_FILENAME: &str = "draw.png";

/// Configuration for file saving.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Directory to save the drawing to.
    pub save_directory: PathBuf,
    /// File name inside the directory. Existing files are overwritten.
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl ExportConfig {
    /// Export into `directory` with the default file name.
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            save_directory: directory.into(),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }

    /// Full path the next export will be written to.
    pub fn target_path(&self) -> PathBuf {
        self.save_directory.join(&self.filename)
    }
}

/// Shared pictures directory, falling back to the home directory.
pub fn default_save_directory() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Encode a raster as a lossless PNG.
pub fn encode_png(raster: &RasterBuffer) -> Result<Vec<u8>, ExportError> {
    let mut encoded = Vec::new();
    raster.write_png(&mut encoded)?;
    Ok(encoded)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image data to the configured file, replacing any previous export.
///
/// # Returns
/// Path to the saved file
pub fn save_png(image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let file_path = directory.join(&config.filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    log::info!("Drawing saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

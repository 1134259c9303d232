use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::export::{self, ExportConfig, ExportError};

/// User-facing message produced by a shell action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Short confirmation after a successful save
    Saved { directory: PathBuf, path: PathBuf },
    /// Error that the user has to acknowledge
    Error(String),
}

impl Notice {
    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Notice::Saved { directory, .. } => format!("Saved on {}", directory.display()),
            Notice::Error(description) => format!("ERROR: {description}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Abstraction over writing the encoded drawing somewhere.
pub trait RasterSaver {
    fn save(&self, image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError>;
}

/// Abstraction over how notices reach the user.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Bundle of dependencies used by the shell. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ShellDependencies {
    pub saver: Arc<dyn RasterSaver>,
    pub notifier: Arc<dyn Notifier>,
}

impl Default for ShellDependencies {
    fn default() -> Self {
        Self {
            saver: Arc::new(FileSaver),
            notifier: Arc::new(LogNotifier),
        }
    }
}

/// Writes exports to the filesystem.
pub struct FileSaver;

/// Reports notices through the `log` facade.
pub struct LogNotifier;

impl RasterSaver for FileSaver {
    fn save(&self, image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
        export::save_png(image_data, config)
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Saved { .. } => log::info!("{}", notice.message()),
            Notice::Error(_) => log::error!("{}", notice.message()),
        }
    }
}

/// Directory part of a saved file path, for the confirmation message.
pub(super) fn parent_directory(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

//! Configuration file support for blackboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/blackboard/config.toml`. Settings include the board size,
//! stroke smoothing, the color drawer and the export directory.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ExportSettings, PaletteConfig, SurfaceConfig};

use crate::draw::{BOARD_GRAY, CYAN};
use crate::export::{ExportConfig, file::expand_tilde};
use crate::shell::Palette;
use crate::surface::SurfaceSettings;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 1280
/// height = 800
/// tolerance = 4.0
/// stroke_width = 10.0
/// default_color = "#00E1FF"
/// background_color = "#BBBBBB"
///
/// [palette]
/// colors = ["#00E1FF", "white", "red", [255, 128, 0]]
///
/// [export]
/// directory = "~/Pictures"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Board size, smoothing and default colors
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Color drawer entries
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Where saved drawings go
    #[serde(default)]
    pub export: ExportSettings,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `width`, `height`: 1 - 16384
    /// - `tolerance`: 0.5 - 64.0
    /// - `stroke_width`: 1.0 - 100.0
    /// - `palette.colors`: at least one recognizable color
    fn validate_and_clamp(&mut self) {
        if !(1..=16384).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 1-16384 range",
                self.surface.width
            );
            self.surface.width = self.surface.width.clamp(1, 16384);
        }

        if !(1..=16384).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 1-16384 range",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(1, 16384);
        }

        // NaN fails `contains` and is not fixed by `clamp`, so reset it explicitly.
        if !(0.5..=64.0).contains(&self.surface.tolerance) {
            log::warn!(
                "Invalid tolerance {:.1}, clamping to 0.5-64.0 range",
                self.surface.tolerance
            );
            self.surface.tolerance = if self.surface.tolerance.is_nan() {
                SurfaceConfig::default().tolerance
            } else {
                self.surface.tolerance.clamp(0.5, 64.0)
            };
        }

        if !(1.0..=100.0).contains(&self.surface.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-100.0 range",
                self.surface.stroke_width
            );
            self.surface.stroke_width = if self.surface.stroke_width.is_nan() {
                SurfaceConfig::default().stroke_width
            } else {
                self.surface.stroke_width.clamp(1.0, 100.0)
            };
        }

        let before = self.palette.colors.len();
        self.palette.colors.retain(|spec| {
            let valid = spec.is_valid();
            if !valid {
                log::warn!("Ignoring unrecognized palette color {:?}", spec);
            }
            valid
        });
        if self.palette.colors.is_empty() {
            if before > 0 {
                log::warn!("Palette has no usable colors, falling back to defaults");
            }
            self.palette.colors = types::default_palette_colors();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/blackboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("blackboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Surface tunables derived from `[surface]`.
    pub fn surface_settings(&self) -> SurfaceSettings {
        SurfaceSettings {
            tolerance: self.surface.tolerance,
            stroke_width: self.surface.stroke_width,
            default_color: self.surface.default_color.to_color_or(CYAN).opaque(),
            background: self.surface.background_color.to_color_or(BOARD_GRAY),
        }
    }

    /// Drawer entries derived from `[palette]`, eraser first.
    pub fn palette(&self) -> Palette {
        Palette::with_colors(self.palette.colors.iter().map(ColorSpec::to_color))
    }

    /// Export target derived from `[export]`.
    pub fn export_config(&self) -> ExportConfig {
        match &self.export.directory {
            Some(directory) => ExportConfig::in_directory(expand_tilde(directory)),
            None => ExportConfig::default(),
        }
    }
}

//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing surface settings.
///
/// Controls the board size, stroke smoothing and default appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Board width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Board height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Minimum pointer movement per axis, in pixels, before a stroke grows
    /// (valid range: 0.5 - 64.0). Lower values follow the finger more closely.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Stroke width in pixels for pen and eraser (valid range: 1.0 - 100.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Ink color selected at startup
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Board background painted behind the drawing (not part of exports)
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            tolerance: default_tolerance(),
            stroke_width: default_stroke_width(),
            default_color: default_color(),
            background_color: default_background_color(),
        }
    }
}

/// Color drawer contents.
///
/// The eraser always occupies the first drawer slot; `colors` fill the slots
/// after it in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Selectable ink colors
    #[serde(default = "default_palette_colors")]
    pub colors: Vec<ColorSpec>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette_colors(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExportSettings {
    /// Directory `draw.png` is written to (supports `~/`).
    /// Defaults to the user's pictures directory.
    #[serde(default)]
    pub directory: Option<String>,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    800
}

fn default_tolerance() -> f64 {
    4.0
}

fn default_stroke_width() -> f64 {
    10.0
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#00E1FF".to_string())
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("#BBBBBB".to_string())
}

pub(super) fn default_palette_colors() -> Vec<ColorSpec> {
    [
        "#00E1FF", "white", "red", "green", "blue", "yellow", "orange", "pink", "black",
    ]
    .into_iter()
    .map(|name| ColorSpec::Name(name.to_string()))
    .collect()
}

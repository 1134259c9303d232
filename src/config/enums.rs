//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named/hex color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color, `#RRGGBB` or `#AARRGGBB`
/// default_color = "#00E1FF"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (cyan, gray, red, green, blue, yellow, orange, pink, white, black) or hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names and malformed hex strings fall back to `fallback` with a
    /// warning. RGB arrays are converted from 0-255 range to 0.0-1.0 range with
    /// full opacity.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => parse_named_or_hex(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }

    /// Converts the specification, falling back to the default ink color.
    pub fn to_color(&self) -> Color {
        self.to_color_or(CYAN)
    }

    /// Returns true when the value names a color this build understands.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => parse_named_or_hex(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

fn parse_named_or_hex(value: &str) -> Option<Color> {
    let Some(hex) = value.trim().strip_prefix('#') else {
        return crate::util::name_to_color(value.trim());
    };

    let packed = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::from_argb(0xFF00_0000 | packed)),
        8 => Some(Color::from_argb(packed)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_hex_colors_parse() {
        assert_eq!(ColorSpec::Name("Red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#00E1FF".into()).to_color(), CYAN);
        assert_eq!(
            ColorSpec::Name("#800000FF".into()).to_color().to_argb(),
            0x800000FF
        );
        assert_eq!(ColorSpec::Rgb([0, 0, 255]).to_color(), BLUE);
    }

    #[test]
    fn invalid_colors_fall_back() {
        let spec = ColorSpec::Name("#12345".into());
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color_or(WHITE), WHITE);
        assert_eq!(ColorSpec::Name("chartreuse".into()).to_color(), CYAN);
    }
}

//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Name-to-color mapping for the configuration file and palette labels
//! - The axis-aligned [`Rect`] used for dirty region tracking

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "cyan", "gray", "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "cyan" => Some(CYAN),
        "gray" | "grey" => Some(BOARD_GRAY),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Used for palette labels and log output.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r < 0.1 && (0.8..=0.95).contains(&color.g) && color.b > 0.9 {
        "Cyan"
    } else if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.saturating_sub(min_x);
        let height = max_y.saturating_sub(min_y);
        Self::new(min_x, min_y, width, height)
    }

    /// Builds the smallest integer rectangle covering the given float bounds.
    ///
    /// Bounds are pinned to half the `i32` range, so far off-surface
    /// coordinates still yield a (huge) rectangle instead of overflowing.
    pub fn covering(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        let (min_x, max_x) = covering_span(min_x, max_x);
        let (min_y, max_y) = covering_span(min_y, max_y);
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }

    /// Intersection with the `width` x `height` area at the origin.
    pub fn clip_to(&self, width: i32, height: i32) -> Option<Self> {
        let max_x = self.x.saturating_add(self.width).min(width);
        let max_y = self.y.saturating_add(self.height).min(height);
        Self::from_min_max(self.x.max(0), self.y.max(0), max_x, max_y)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Largest coordinate magnitude a covering rectangle keeps; any span
/// between two pinned bounds still fits an `i32` width.
const COVERING_LIMIT: f64 = (i32::MAX / 2) as f64;

/// Integer span covering `[min, max]`, at least one unit wide.
fn covering_span(min: f64, max: f64) -> (i32, i32) {
    let lo = min.clamp(-COVERING_LIMIT, COVERING_LIMIT).floor() as i32;
    let hi = max.clamp(-COVERING_LIMIT, COVERING_LIMIT).ceil() as i32;
    if hi > lo { (lo, hi) } else { (lo, lo + 1) }
}

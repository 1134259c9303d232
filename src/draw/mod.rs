//! Rendering primitives and stroke geometry (Cairo-based).
//!
//! This module defines the core drawing types used by the blackboard:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`StrokePath`]: smoothed geometry of the stroke being drawn
//! - [`PaintMode`]: the draw/erase stroke style
//! - [`RasterBuffer`]: the pixel buffer finished strokes are composited into
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod dirty;
pub mod paint;
pub mod path;
pub mod raster;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use paint::{DEFAULT_STROKE_WIDTH, PaintMode};
pub use path::{PathSegment, Point, StrokePath};
pub use raster::{RasterBuffer, RasterError};
pub use render::{render_active_stroke, render_background, render_frame};

#[allow(unused_imports)]
pub use color::{
    BLACK, BLUE, BOARD_GRAY, CYAN, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW,
};

//! Stroke style value passed into every composite and preview draw.

use super::color::Color;

/// Stroke width used when no other width is configured.
pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;

/// The active stroke style.
///
/// Exactly one mode is active on a surface at a time. The value is copied into
/// each draw call, so changing it never touches pixels already composited.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintMode {
    /// Ink the stroke in an opaque color
    Draw { color: Color, width: f64 },
    /// Clear every pixel the stroke covers to full transparency
    Erase { width: f64 },
}

impl PaintMode {
    /// Drawing mode with the given color, forced opaque.
    pub fn draw(color: Color, width: f64) -> Self {
        PaintMode::Draw {
            color: color.opaque(),
            width,
        }
    }

    pub fn erase(width: f64) -> Self {
        PaintMode::Erase { width }
    }

    pub fn width(&self) -> f64 {
        match *self {
            PaintMode::Draw { width, .. } | PaintMode::Erase { width } => width,
        }
    }

    /// Ink color, or `None` while erasing.
    pub fn color(&self) -> Option<Color> {
        match *self {
            PaintMode::Draw { color, .. } => Some(color),
            PaintMode::Erase { .. } => None,
        }
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self, PaintMode::Erase { .. })
    }

    /// Configures a Cairo context to stroke with this mode.
    ///
    /// Round caps and joins, best antialiasing. Drawing composites with
    /// `Over`; erasing uses `Clear`, which ignores the source color.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_line_width(self.width());
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
        ctx.set_antialias(cairo::Antialias::Best);

        match *self {
            PaintMode::Draw { color, .. } => {
                ctx.set_operator(cairo::Operator::Over);
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            }
            PaintMode::Erase { .. } => {
                ctx.set_operator(cairo::Operator::Clear);
            }
        }
    }
}

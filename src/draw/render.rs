//! Cairo-based frame rendering for the drawing surface.

use super::color::Color;
use super::paint::PaintMode;
use super::path::StrokePath;
use super::raster::{RasterBuffer, RasterError};

/// Fills the whole target with the board background color.
pub fn render_background(ctx: &cairo::Context, background: Color) -> Result<(), RasterError> {
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    ctx.paint()?;
    Ok(())
}

/// Strokes a path that has not been composited yet.
///
/// This function borrows the path so that the live preview of a long stroke
/// costs no allocation per frame. An eraser preview clears the target itself,
/// so the background shows through as a hole until the stroke is committed.
pub fn render_active_stroke(
    ctx: &cairo::Context,
    path: &StrokePath,
    paint: &PaintMode,
) -> Result<(), RasterError> {
    if path.is_empty() {
        return Ok(());
    }

    paint.apply(ctx);
    path.trace(ctx);
    ctx.stroke()?;
    Ok(())
}

/// Renders one complete frame.
///
/// Paints, in order:
/// 1. the background fill,
/// 2. the raster buffer at the origin,
/// 3. the in-progress stroke with the current paint mode.
///
/// The context state is saved and restored, so callers can keep drawing
/// overlays on top with their own settings.
pub fn render_frame(
    ctx: &cairo::Context,
    background: Color,
    raster: &RasterBuffer,
    active: Option<&StrokePath>,
    paint: &PaintMode,
) -> Result<(), RasterError> {
    ctx.save()?;
    let result = render_background(ctx, background)
        .and_then(|_| raster.paint_onto(ctx))
        .and_then(|_| match active {
            Some(path) => render_active_stroke(ctx, path, paint),
            None => Ok(()),
        });
    ctx.restore()?;
    result
}

use crate::draw::{Color, PaintMode, RasterBuffer, RasterError};
use crate::util;
use log::{debug, info};

use super::StrokeSurface;

impl StrokeSurface {
    /// Switches to drawing with `color` at the configured stroke width.
    ///
    /// Takes effect for strokes composited from now on, including the one in
    /// progress; pixels already in the raster keep their color.
    pub fn set_paint_color(&mut self, color: Color) {
        self.paint = PaintMode::draw(color, self.settings.stroke_width);
        debug!(
            "Paint color set to {} (#{:08X})",
            util::color_to_name(&color),
            color.opaque().to_argb()
        );
        self.mark_preview_dirty();
    }

    /// Switches to erasing: later strokes clear the pixels they cover.
    pub fn set_eraser(&mut self) {
        self.paint = PaintMode::erase(self.settings.stroke_width);
        debug!("Eraser selected");
        self.mark_preview_dirty();
    }

    /// Discards every stroke by reallocating the raster at the display size.
    ///
    /// The paint mode is kept.
    pub fn clear(&mut self) -> Result<(), RasterError> {
        self.raster = RasterBuffer::new(self.display_width, self.display_height)?;
        self.request_full_redraw();
        info!(
            "Board cleared ({}x{})",
            self.display_width, self.display_height
        );
        Ok(())
    }

    /// Returns a detached copy of the raster for encoding or saving.
    ///
    /// Strokes composited after the call do not show up in the copy.
    pub fn export_raster(&self) -> Result<RasterBuffer, RasterError> {
        self.raster.snapshot()
    }

    fn mark_preview_dirty(&mut self) {
        let width = self.paint.width();
        if let Some(bounds) = self.active_path().map(|path| path.bounding_box(width)) {
            self.dirty_tracker.mark_optional_rect(bounds);
            self.needs_redraw = true;
        }
    }
}

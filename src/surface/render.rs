use crate::draw::{RasterError, render_frame};

use super::{DrawingSurface, PointerEvent, StrokeSurface};

impl StrokeSurface {
    /// Paints the background, the raster and the live stroke into `ctx`.
    ///
    /// Pure with respect to the surface: it can be called any number of times
    /// per frame. The redraw request is left for the host to drain.
    pub fn render(&self, ctx: &cairo::Context) -> Result<(), RasterError> {
        render_frame(
            ctx,
            self.settings.background,
            &self.raster,
            self.active_path(),
            &self.paint,
        )
    }
}

impl DrawingSurface for StrokeSurface {
    fn handle_pointer(&mut self, event: PointerEvent) {
        self.dispatch(event);
    }

    fn render(&self, ctx: &cairo::Context) -> Result<(), RasterError> {
        StrokeSurface::render(self, ctx)
    }
}

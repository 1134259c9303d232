use crate::draw::{Point, StrokePath, path::bounding_box_for_points};
use log::warn;

use super::{GestureState, PointerEvent, StrokeSurface};

impl StrokeSurface {
    /// Processes a pointer-down event.
    ///
    /// Starts a new stroke at `(x, y)`. A stroke still in progress (the host
    /// never delivered its up/cancel) is discarded without compositing.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let width = self.paint.width();
        if let GestureState::Stroking { path, .. } = &self.state {
            // The abandoned preview has to be repainted away.
            self.dirty_tracker.mark_path(path, width);
        }

        let point = Point::new(x, y);
        let mut path = StrokePath::new();
        path.move_to(point);
        self.dirty_tracker.mark_path(&path, width);

        self.state = GestureState::Stroking { path, last: point };
        self.needs_redraw = true;
    }

    /// Processes a pointer-move event.
    ///
    /// The sample is accepted when it is at least the tolerance away from the
    /// last accepted sample on either axis. An accepted sample adds one
    /// quadratic segment that bends at the previous sample and ends halfway
    /// toward the new one. Smaller movements are dropped and leave the last
    /// accepted sample unchanged.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let tolerance = self.settings.tolerance;
        let width = self.paint.width();

        if let GestureState::Stroking { path, last } = &mut self.state {
            if (x - last.x).abs() >= tolerance || (y - last.y).abs() >= tolerance {
                let point = Point::new(x, y);
                let start = path.current_point().unwrap_or(*last);
                let end = last.midpoint(point);
                path.quad_to(*last, end);
                self.dirty_tracker
                    .mark_optional_rect(bounding_box_for_points([start, *last, end], width));
                *last = point;
            }
            self.needs_redraw = true;
        }
    }

    /// Processes a pointer-up event.
    ///
    /// Finishes the stroke with a straight segment to `(x, y)`, composites it
    /// into the raster with the current paint mode and returns to idle. The
    /// finished path is handed back to the caller; the surface keeps no copy.
    /// Returns `None` when no gesture was in progress.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) -> Option<StrokePath> {
        let GestureState::Stroking { mut path, .. } =
            std::mem::replace(&mut self.state, GestureState::Idle)
        else {
            return None;
        };

        path.line_to(Point::new(x, y));
        if let Err(err) = self.raster.composite(&path, &self.paint) {
            warn!("Failed to composite stroke into raster: {err}");
        }

        self.dirty_tracker.mark_path(&path, self.paint.width());
        self.needs_redraw = true;
        Some(path)
    }

    /// Processes a gesture cancellation from the host.
    ///
    /// The in-progress stroke is discarded; the raster is not touched.
    /// Returns `true` if a stroke was discarded.
    pub fn on_pointer_cancel(&mut self) -> bool {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Stroking { path, .. } => {
                self.dirty_tracker.mark_path(&path, self.paint.width());
                self.needs_redraw = true;
                log::debug!(
                    "Discarded cancelled stroke with {} segment(s)",
                    path.segment_count()
                );
                true
            }
            GestureState::Idle => false,
        }
    }

    /// Routes a host pointer event to the matching handler.
    pub fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up { x, y } => {
                let _ = self.on_pointer_up(x, y);
            }
            PointerEvent::Cancel => {
                let _ = self.on_pointer_cancel();
            }
        }
    }
}

//! Pending redraw damage between two frames.
//!
//! Pointer handlers record the area a stroke touched; the host drains it as
//! rectangles when it repaints. A full-surface request (after `clear` or a
//! re-initialization) swallows every smaller one.

use super::path::StrokePath;
use crate::util::Rect;

#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    full: bool,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a repaint of the whole surface.
    pub fn mark_full(&mut self) {
        self.full = true;
        self.regions.clear();
    }

    pub fn mark_rect(&mut self, rect: Rect) {
        if self.full || !rect.is_valid() {
            return;
        }
        self.regions.push(rect);
    }

    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    /// Records the area covered by `path` stroked at `stroke_width`.
    ///
    /// A path without geometry has no bounds, so the whole surface is requested.
    pub fn mark_path(&mut self, path: &StrokePath, stroke_width: f64) {
        match path.bounding_box(stroke_width) {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    pub fn is_clean(&self) -> bool {
        !self.full && self.regions.is_empty()
    }

    /// Drains the pending damage, clipped to a `width` x `height` surface.
    ///
    /// A full request comes back as one rectangle covering the surface.
    /// Damage lying entirely off the surface is dropped.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        let regions = std::mem::take(&mut self.regions);
        if std::mem::take(&mut self.full) {
            return Rect::new(0, 0, width, height).into_iter().collect();
        }
        regions
            .into_iter()
            .filter_map(|rect| rect.clip_to(width, height))
            .collect()
    }
}

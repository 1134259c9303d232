//! Host-facing pointer events and the surface capability interface.

use crate::draw::RasterError;

/// A single pointer sample delivered by the host UI.
///
/// Coordinates are surface-local device pixels. Values outside the surface
/// are passed through unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger/button went down
    Down { x: f64, y: f64 },
    /// Pointer moved while down
    Move { x: f64, y: f64 },
    /// Finger/button lifted
    Up { x: f64, y: f64 },
    /// The host aborted the gesture
    Cancel,
}

/// What a host UI layer needs from a drawing surface.
///
/// Hosts forward raw pointer events and call [`render`](Self::render) on every
/// invalidation; nothing here depends on a particular widget hierarchy.
pub trait DrawingSurface {
    /// Feeds one pointer event into the gesture state machine.
    fn handle_pointer(&mut self, event: PointerEvent);

    /// Paints the current frame. Must not change any state.
    fn render(&self, ctx: &cairo::Context) -> Result<(), RasterError>;
}

//! Freehand stroke capture and the gesture state machine.
//!
//! This module turns pointer gestures into smoothed strokes. It owns the
//! raster buffer, the in-progress stroke and the active paint mode, and it
//! tells the host when and where the surface needs repainting.

mod actions;
mod core;
mod events;
mod pointer;
mod render;
#[cfg(test)]
mod tests;

pub use self::core::{GestureState, StrokeSurface, SurfaceSettings};
pub use events::{DrawingSurface, PointerEvent};

//! Library exports for the blackboard drawing surface.
//!
//! Exposes the stroke surface, its Cairo rendering primitives, and the shell
//! that maps drawer and menu choices onto it, so that any host UI layer can
//! drive the same drawing logic the `blackboard` binary replays.

pub mod config;
pub mod draw;
pub mod export;
pub mod shell;
pub mod surface;
pub mod util;

pub use config::Config;
pub use shell::Shell;
pub use surface::{DrawingSurface, PointerEvent, StrokeSurface};

//! Drawing surface state and construction.

use crate::draw::{
    BOARD_GRAY, CYAN, Color, DEFAULT_STROKE_WIDTH, DirtyTracker, PaintMode, Point, RasterBuffer,
    RasterError, StrokePath,
};
use crate::util::Rect;

/// Minimum per-axis movement, in pixels, before a pointer sample extends the stroke.
pub const DEFAULT_TOLERANCE: f64 = 4.0;

/// Gesture state machine.
///
/// `Idle` between gestures; `Stroking` from pointer-down until pointer-up or
/// cancel. The in-progress path lives only inside `Stroking`, so it cannot
/// outlive its gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    /// No gesture in progress
    Idle,
    /// A pointer is down and a stroke is being built
    Stroking {
        /// Geometry accepted so far
        path: StrokePath,
        /// Most recent accepted sample
        last: Point,
    },
}

/// Tunables for a [`StrokeSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSettings {
    /// Jitter threshold applied per axis to pointer-move samples
    pub tolerance: f64,
    /// Stroke width for both drawing and erasing
    pub stroke_width: f64,
    /// Ink color selected after initialization
    pub default_color: Color,
    /// Fill painted behind the raster on every frame
    pub background: Color,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            default_color: CYAN,
            background: BOARD_GRAY,
        }
    }
}

impl SurfaceSettings {
    /// Paint mode a surface starts with.
    pub fn default_paint(&self) -> PaintMode {
        PaintMode::draw(self.default_color, self.stroke_width)
    }
}

/// Interactive drawing surface.
///
/// Holds the raster buffer that finished strokes are composited into, the
/// gesture state, and the active [`PaintMode`]. The raster is the only record
/// of past strokes; no vector history is kept.
#[derive(Debug)]
pub struct StrokeSurface {
    pub(super) raster: RasterBuffer,
    pub(super) state: GestureState,
    pub(super) paint: PaintMode,
    pub(super) settings: SurfaceSettings,
    /// Display size reported by the host; the raster is reallocated to it on clear
    pub(super) display_width: u32,
    pub(super) display_height: u32,
    pub(super) needs_redraw: bool,
    pub(super) dirty_tracker: DirtyTracker,
}

impl StrokeSurface {
    /// Creates a surface with a transparent raster of the given display size.
    pub fn new(width: u32, height: u32, settings: SurfaceSettings) -> Result<Self, RasterError> {
        let raster = RasterBuffer::new(width, height)?;
        Ok(Self::with_raster(raster, settings))
    }

    /// Creates a surface whose raster starts with existing pixels.
    ///
    /// The display size is taken from the raster. Used to reopen an exported image.
    pub fn with_raster(raster: RasterBuffer, settings: SurfaceSettings) -> Self {
        let mut dirty_tracker = DirtyTracker::new();
        dirty_tracker.mark_full();
        Self {
            display_width: raster.width(),
            display_height: raster.height(),
            raster,
            state: GestureState::Idle,
            paint: settings.default_paint(),
            settings,
            needs_redraw: true,
            dirty_tracker,
        }
    }

    /// Reallocates the raster at `width` x `height` and restores the default paint.
    ///
    /// Any stroke in progress is dropped.
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<(), RasterError> {
        self.raster = RasterBuffer::new(width, height)?;
        self.display_width = width;
        self.display_height = height;
        self.state = GestureState::Idle;
        self.paint = self.settings.default_paint();
        self.request_full_redraw();
        log::debug!("Surface initialized at {width}x{height}");
        Ok(())
    }

    /// Records a new display size reported by the host.
    ///
    /// The raster keeps its current pixels until the next [`clear`](Self::clear).
    pub fn set_display_size(&mut self, width: u32, height: u32) {
        if (width, height) != (self.display_width, self.display_height) {
            log::debug!(
                "Display size changed from {}x{} to {width}x{height}",
                self.display_width,
                self.display_height
            );
            self.display_width = width;
            self.display_height = height;
        }
    }

    pub fn display_size(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    pub fn paint_mode(&self) -> PaintMode {
        self.paint
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.state, GestureState::Stroking { .. })
    }

    /// The stroke being drawn, if a gesture is in progress.
    pub fn active_path(&self) -> Option<&StrokePath> {
        match &self.state {
            GestureState::Stroking { path, .. } => Some(path),
            GestureState::Idle => None,
        }
    }

    /// Read-only view of the live raster. Use `export_raster` for a detached copy.
    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    /// Whether anything changed since the host last drained the redraw request.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Drains the pending redraw request as damage rectangles.
    pub fn take_redraw_regions(&mut self) -> Vec<Rect> {
        self.needs_redraw = false;
        self.dirty_tracker
            .take_regions(self.raster.width() as i32, self.raster.height() as i32)
    }

    pub(super) fn request_full_redraw(&mut self) {
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }
}

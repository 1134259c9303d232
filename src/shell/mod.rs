//! Application shell around the drawing surface.
//!
//! The shell owns the [`StrokeSurface`] directly and maps user-facing
//! choices onto it:
//! - color drawer selections (slot 0 = eraser, other slots = ink colors)
//! - the options menu (`Save` writes `draw.png`, `Clean` wipes the board)
//! - replay of scripted sessions in place of a live windowing host

pub mod dependencies;
pub mod palette;
pub mod script;

pub use dependencies::{FileSaver, LogNotifier, Notice, Notifier, RasterSaver, ShellDependencies};
pub use palette::{DrawerItem, Palette};
pub use script::{Script, ScriptStep};

use crate::config::Config;
use crate::draw::RasterError;
use crate::export::{self, ExportConfig, ExportError};
use crate::surface::{PointerEvent, StrokeSurface};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Options menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Export the drawing to `draw.png`
    Save,
    /// Discard every stroke
    Clean,
}

/// Result of a menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Saved(PathBuf),
    Cleared,
    /// The action failed; the drawing is unchanged
    Failed(String),
}

/// Totals collected while replaying a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Steps that were executed
    pub steps: usize,
    /// Strokes composited into the raster
    pub strokes: usize,
    /// Files written by `save` steps
    pub saved: Vec<PathBuf>,
    /// Messages from failed actions
    pub failures: Vec<String>,
}

/// Drawer/menu front end holding the surface it drives.
pub struct Shell {
    surface: StrokeSurface,
    palette: Palette,
    export: ExportConfig,
    deps: ShellDependencies,
}

impl Shell {
    pub fn new(surface: StrokeSurface, palette: Palette, export: ExportConfig) -> Self {
        Self::with_dependencies(surface, palette, export, ShellDependencies::default())
    }

    pub fn with_dependencies(
        surface: StrokeSurface,
        palette: Palette,
        export: ExportConfig,
        deps: ShellDependencies,
    ) -> Self {
        Self {
            surface,
            palette,
            export,
            deps,
        }
    }

    /// Builds a shell and a board sized from `config`.
    pub fn from_config(config: &Config) -> Result<Self, RasterError> {
        let surface = StrokeSurface::new(
            config.surface.width,
            config.surface.height,
            config.surface_settings(),
        )?;
        info!(
            "Board ready at {}x{}",
            config.surface.width, config.surface.height
        );
        Ok(Self::new(surface, config.palette(), config.export_config()))
    }

    pub fn surface(&self) -> &StrokeSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut StrokeSurface {
        &mut self.surface
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn export_config(&self) -> &ExportConfig {
        &self.export
    }

    /// Forwards a host pointer event to the surface.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.surface.dispatch(event);
    }

    /// Applies drawer slot `index`. Returns false for an unknown slot.
    pub fn select_drawer_item(&mut self, index: usize) -> bool {
        match self.palette.get(index) {
            Some(DrawerItem::Eraser) => {
                self.surface.set_eraser();
                true
            }
            Some(DrawerItem::Ink(color)) => {
                self.surface.set_paint_color(color);
                true
            }
            None => {
                warn!(
                    "Ignoring drawer selection {index}; palette has {} slot(s)",
                    self.palette.len()
                );
                false
            }
        }
    }

    /// Runs an options-menu action and notifies the user of the result.
    pub fn on_menu_item(&mut self, action: MenuAction) -> MenuOutcome {
        match action {
            MenuAction::Save => match self.save() {
                Ok(path) => {
                    let notice = Notice::Saved {
                        directory: dependencies::parent_directory(&path),
                        path: path.clone(),
                    };
                    self.deps.notifier.notify(&notice);
                    MenuOutcome::Saved(path)
                }
                Err(err) => self.fail(err.to_string()),
            },
            MenuAction::Clean => match self.surface.clear() {
                Ok(()) => MenuOutcome::Cleared,
                Err(err) => self.fail(err.to_string()),
            },
        }
    }

    fn save(&self) -> Result<PathBuf, ExportError> {
        let snapshot = self.surface.export_raster()?;
        let encoded = export::encode_png(&snapshot)?;
        self.deps.saver.save(&encoded, &self.export)
    }

    fn fail(&self, description: String) -> MenuOutcome {
        self.deps
            .notifier
            .notify(&Notice::Error(description.clone()));
        MenuOutcome::Failed(description)
    }

    /// Executes one scripted step.
    pub fn apply_step(&mut self, step: &ScriptStep, report: &mut ScriptReport) {
        report.steps += 1;

        if let Some(event) = step.pointer_event() {
            if let PointerEvent::Up { x, y } = event {
                if self.surface.on_pointer_up(x, y).is_some() {
                    report.strokes += 1;
                }
            } else {
                self.handle_pointer(event);
            }
            return;
        }

        if let Some(action) = step.menu_action() {
            match self.on_menu_item(action) {
                MenuOutcome::Saved(path) => report.saved.push(path),
                MenuOutcome::Cleared => {}
                MenuOutcome::Failed(message) => report.failures.push(message),
            }
            return;
        }

        match *step {
            ScriptStep::Select { index } => {
                if !self.select_drawer_item(index) {
                    report
                        .failures
                        .push(format!("No drawer item at index {index}"));
                }
            }
            ScriptStep::Resize { width, height } => {
                self.surface.set_display_size(width, height);
            }
            _ => {}
        }
    }

    /// Replays every step of `script` in order.
    pub fn run_script(&mut self, script: &Script) -> ScriptReport {
        let mut report = ScriptReport::default();
        for step in &script.steps {
            self.apply_step(step, &mut report);
        }
        debug!(
            "Script finished: {} step(s), {} stroke(s), {} save(s), {} failure(s)",
            report.steps,
            report.strokes,
            report.saved.len(),
            report.failures.len()
        );
        report
    }
}

//! Replayable session scripts.
//!
//! A script is a TOML file with an ordered list of `[[steps]]`, each naming an
//! `action` and its arguments. It stands in for a live host: pointer steps go
//! to the surface, drawer and menu steps go through the shell.
//!
//! ```toml
//! [[steps]]
//! action = "select"
//! index = 3
//!
//! [[steps]]
//! action = "down"
//! x = 10.0
//! y = 10.0
//!
//! [[steps]]
//! action = "up"
//! x = 30.0
//! y = 10.0
//!
//! [[steps]]
//! action = "save"
//! ```

use super::MenuAction;
use crate::surface::PointerEvent;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted host interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ScriptStep {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Cancel,
    /// Pick drawer slot `index` (0 = eraser)
    Select { index: usize },
    /// Report a new display size
    Resize { width: u32, height: u32 },
    Save,
    Clean,
}

impl ScriptStep {
    /// The pointer event this step carries, if it is a pointer step.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match *self {
            ScriptStep::Down { x, y } => Some(PointerEvent::Down { x, y }),
            ScriptStep::Move { x, y } => Some(PointerEvent::Move { x, y }),
            ScriptStep::Up { x, y } => Some(PointerEvent::Up { x, y }),
            ScriptStep::Cancel => Some(PointerEvent::Cancel),
            _ => None,
        }
    }

    /// The menu action this step triggers, if it is a menu step.
    pub fn menu_action(&self) -> Option<MenuAction> {
        match self {
            ScriptStep::Save => Some(MenuAction::Save),
            ScriptStep::Clean => Some(MenuAction::Clean),
            _ => None,
        }
    }
}

/// Ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse session script")
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        let script = Self::from_toml_str(&source)
            .with_context(|| format!("Invalid script {}", path.display()))?;
        log::debug!("Loaded {} step(s) from {}", script.steps.len(), path.display());
        Ok(script)
    }
}

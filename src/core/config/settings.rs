//! Built-in defaults and resolved plot settings

use bevy::prelude::*;
use clap::ValueEnum;
use kurbo::Size;
use serde::{Deserialize, Serialize};

pub const WINDOW_TITLE: &str = "circleplot";
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (800.0, 600.0);

/// Real-space radius used when neither the CLI nor the config file sets one
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Container size in pixels used when none is configured
pub const DEFAULT_CONTAINER_SIZE: Size = Size::new(360.0, 360.0);

/// How the headless renderer prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented outline of the display tree
    #[default]
    Text,
    /// Pretty-printed JSON snapshot
    Json,
}

/// Settings after merging CLI arguments, the config file and defaults
#[derive(Debug, Clone, PartialEq, Resource)]
pub struct PlotSettings {
    pub radius: f64,
    pub container: Size,
    pub format: OutputFormat,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            container: DEFAULT_CONTAINER_SIZE,
            format: OutputFormat::default(),
        }
    }
}

/// Resolved settings plus the config problems met while resolving them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedSettings {
    pub settings: PlotSettings,
    pub warnings: Vec<String>,
}

impl ResolvedSettings {
    /// Emit the collected warnings through the installed logger
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

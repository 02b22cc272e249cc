//! Command line interface for circleplot
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use super::settings::{OutputFormat, PlotSettings, ResolvedSettings, DEFAULT_RADIUS};
use super::user_config::ConfigFile;
use crate::core::errors::PlotContext;
use crate::pipeline::PointsInput;
use anyhow::Context;
use clap::{ArgAction, Parser};
use kurbo::Size;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// circleplot CLI arguments
///
/// Examples:
///   circleplot --points '[5, 5]' --radius 10            # One point
///   circleplot --points '[[5, 5], [15, 0]]' -r 10       # Several points
///   circleplot --input points.json --format json         # Points from a file
///   circleplot --input points.json --window              # Show in a window
///   circleplot --width 300 --height 100 -p '[[1, 2, 3]]' # Custom container
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "circleplot",
    version,
    about = "Project points onto a circular viewport",
    long_about = "circleplot scales point coordinates from real space (measured against a radius) into a circle inscribed in a pixel container, drops points that fall outside the container, and prints the resulting display tree or shows it in a window."
)]
pub struct CliArgs {
    /// Point coordinates as JSON
    ///
    /// A flat array is a single point, an array of arrays is a list.
    #[clap(
        long = "points",
        short = 'p',
        help = "Point coordinates as JSON",
        long_help = "Point coordinates as JSON. A flat array such as [1, 2, 3] is one point; an array of arrays such as [[1, 2], [3, 4, 5]] is a list of points. Missing coordinates default to 0."
    )]
    pub points: Option<PointsInput>,

    /// JSON file holding point coordinates
    #[clap(
        long = "input",
        short = 'i',
        conflicts_with = "points",
        help = "Read point coordinates from a JSON file"
    )]
    pub input: Option<PathBuf>,

    /// Real-space radius of the circle
    #[clap(long = "radius", short = 'r', help = "Real-space radius of the circle")]
    pub radius: Option<f64>,

    /// Container width in pixels
    #[clap(long = "width", help = "Container width in pixels")]
    pub width: Option<f64>,

    /// Container height in pixels
    #[clap(long = "height", help = "Container height in pixels")]
    pub height: Option<f64>,

    /// Headless output format
    #[clap(long = "format", short = 'f', value_enum, help = "Headless output format")]
    pub format: Option<OutputFormat>,

    /// Show the circle in a window instead of printing it
    #[clap(long = "window", short = 'w', help = "Show the circle in a window")]
    pub window: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/circleplot directory with a settings.json file holding the default radius, container size and output format, plus a logs directory."
    )]
    pub new_config: bool,

    /// Also write logs to ~/.config/circleplot/logs/
    #[clap(
        long = "log-file",
        conflicts_with = "window",
        help = "Write logs to the circleplot logs directory"
    )]
    pub log_file: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

fn check_dimension(name: &str, value: Option<f64>) -> Result<(), String> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(format!(
            "Invalid {name}: {v}\nThe {name} must be a positive number."
        )),
        _ => Ok(()),
    }
}

fn positive_config_value(
    config: Option<&ConfigFile>,
    pick: fn(&ConfigFile) -> Option<f64>,
    name: &str,
    warnings: &mut Vec<String>,
) -> Option<f64> {
    let value = config.and_then(pick)?;
    if value.is_finite() && value > 0.0 {
        debug!("Using {} from config file: {}", name, value);
        Some(value)
    } else {
        warnings.push(format!("Ignoring non-positive {name} in config file: {value}"));
        None
    }
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that paths exist and numbers are usable before anything
    /// is rendered, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.input {
            if !path.exists() {
                return Err(format!(
                    "Input file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
            if !path.is_file() {
                return Err(format!(
                    "Input path is not a file: {}\nExpected a JSON file with point coordinates.",
                    path.display()
                ));
            }
        }

        check_dimension("radius", self.radius)?;
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;

        Ok(())
    }

    /// Resolve settings using the user config file
    ///
    /// Config problems do not stop the run; they come back as warnings for
    /// the caller to log once its logger is installed.
    pub fn settings(&self) -> ResolvedSettings {
        let mut warnings = Vec::new();
        let config = ConfigFile::load().unwrap_or_else(|e| {
            warnings.push(format!("{e:#}"));
            None
        });
        let settings = self.settings_with(config.as_ref(), &mut warnings);
        ResolvedSettings { settings, warnings }
    }

    /// Resolve settings
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Config file setting (~/.config/circleplot/settings.json)
    /// 3. Built-in default
    pub fn settings_with(
        &self,
        config: Option<&ConfigFile>,
        warnings: &mut Vec<String>,
    ) -> PlotSettings {
        let defaults = PlotSettings::default();
        let radius = self
            .radius
            .or_else(|| {
                positive_config_value(config, |c| c.default_radius, "radius", warnings)
            })
            .unwrap_or(DEFAULT_RADIUS);
        let width = self
            .width
            .or_else(|| {
                positive_config_value(config, |c| c.container_width, "container width", warnings)
            })
            .unwrap_or(defaults.container.width);
        let height = self
            .height
            .or_else(|| {
                positive_config_value(config, |c| c.container_height, "container height", warnings)
            })
            .unwrap_or(defaults.container.height);
        let format = self
            .format
            .or_else(|| config.and_then(|c| c.output_format))
            .unwrap_or(defaults.format);

        PlotSettings {
            radius,
            container: Size::new(width, height),
            format,
        }
    }

    /// The points to plot, from `--points` or `--input`
    pub fn load_points(&self) -> anyhow::Result<PointsInput> {
        if let Some(points) = &self.points {
            return Ok(points.clone());
        }

        let Some(path) = &self.input else {
            anyhow::bail!("No points given\nUse --points '[[x, y, z], ...]' or --input <FILE>.");
        };

        let contents = fs::read_to_string(path).with_file_context("read", path)?;
        contents
            .parse::<PointsInput>()
            .with_context(|| format!("Failed to parse points from {}", path.display()))
    }
}

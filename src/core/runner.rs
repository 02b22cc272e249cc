//! Application runner logic
//!
//! Handles the different ways to run circleplot

use crate::core::config::{CliArgs, ConfigFile, OutputFormat, PlotSettings};
use crate::logging;
use crate::pipeline::{render_points_to_circle, PointsInput};
use crate::rendering::Snapshot;
use crate::scene::SceneTree;
use anyhow::{Context, Result};
use tracing::info;

/// Run circleplot with the given CLI arguments.
/// Handles special CLI flags and delegates to the headless or window runner.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    if cli_args.window {
        // Config warnings are logged by the app once Bevy's logger is up
        let resolved = cli_args.settings();
        let points = cli_args.load_points()?;
        let mut app = crate::core::app::create_app(resolved, points)?;
        app.run();
        return Ok(());
    }

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = logging::init_headless(cli_args.verbose, cli_args.log_file)?;
    let resolved = cli_args.settings();
    resolved.log_warnings();
    let points = cli_args.load_points()?;
    print!("{}", render_headless(&resolved.settings, points)?);
    Ok(())
}

/// Render into an in-memory scene and format the snapshot
pub fn render_headless(settings: &PlotSettings, points: PointsInput) -> Result<String> {
    let mut scene = SceneTree::new();
    let container = scene.add_container(settings.container);
    let circle = render_points_to_circle(points, settings.radius, &mut scene, container)?;
    let snapshot = Snapshot::capture(&scene, &circle)?;
    info!(
        "Rendered {} of {} point(s)",
        snapshot.features_visible, snapshot.features_total
    );

    match settings.format {
        OutputFormat::Text => Ok(snapshot.to_text()),
        OutputFormat::Json => snapshot
            .to_json()
            .map(|json| json + "\n")
            .context("Failed to serialize snapshot"),
    }
}

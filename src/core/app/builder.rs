//! Application builder for window mode

use super::plugins::configure_default_plugins;
use crate::core::config::ResolvedSettings;
use crate::pipeline::PointsInput;
use crate::rendering::{CirclePlotPlugin, PendingPoints};
use anyhow::Result;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Window background
const BACKGROUND_COLOR: Color = Color::srgb(0.08, 0.08, 0.09);

/// Config problems found before the logger existed
#[derive(Resource, Debug, Default)]
pub struct ConfigWarnings(pub Vec<String>);

/// Creates a Bevy application that shows `points` in a circle.
pub fn create_app(resolved: ResolvedSettings, points: PointsInput) -> Result<App> {
    let mut app = App::new();
    app.insert_resource(resolved.settings)
        .insert_resource(ConfigWarnings(resolved.warnings))
        .insert_resource(PendingPoints(Some(points)))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(WinitSettings::desktop_app());

    app.add_plugins(configure_default_plugins())
        .add_plugins(CirclePlotPlugin)
        .add_systems(Startup, report_config_warnings)
        .add_systems(Update, exit_on_esc);
    Ok(app)
}

/// Close the window on Escape
pub fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Log the config warnings collected before startup, once
pub fn report_config_warnings(mut warnings: ResMut<ConfigWarnings>) {
    for warning in std::mem::take(&mut warnings.0) {
        warn!("{}", warning);
    }
}

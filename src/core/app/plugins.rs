//! Plugin configuration for the circleplot window

use crate::core::config::{DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

/// Configure logging with quieter output for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        LogPlugin {
            level: Level::INFO,
            filter: "circleplot=debug,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn"
                .to_string(),
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        LogPlugin {
            level: Level::WARN,
            filter: "circleplot=info,bevy=warn,wgpu=error,winit=error".to_string(),
            ..default()
        }
    }
}

/// Configure default Bevy plugins for the window
pub fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: DEFAULT_WINDOW_SIZE.into(),
                ..default()
            }),
            ..default()
        })
        .set(configure_logging())
}

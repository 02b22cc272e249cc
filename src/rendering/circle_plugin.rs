//! Window rendering of the circle
//!
//! Spawns a camera and a fixed-size container node centered in the window,
//! then runs the points-to-circle pipeline once against the Bevy UI tree.

use crate::circle::Circle;
use crate::core::config::PlotSettings;
use crate::pipeline::{render_points_to_circle, PointsInput};
use crate::scene::BevyScene;
use bevy::prelude::*;

/// Points waiting to be plotted at startup
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingPoints(pub Option<PointsInput>);

/// The circle after it was bound to the container
#[derive(Resource, Debug)]
pub struct PlottedCircle(pub Circle<Entity>);

/// Marker for the container node the circle binds to
#[derive(Component, Debug, Default)]
pub struct PlotContainer;

pub struct CirclePlotPlugin;

impl Plugin for CirclePlotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingPoints>().add_systems(
            Startup,
            (spawn_camera, spawn_container, plot_pending_points).chain(),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Spawn a full-window root that centers the pixel-sized container
pub fn spawn_container(mut commands: Commands, settings: Res<PlotSettings>) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|root| {
            root.spawn((
                PlotContainer,
                Node {
                    width: Val::Px(settings.container.width as f32),
                    height: Val::Px(settings.container.height as f32),
                    ..default()
                },
            ));
        });
}

/// Bind a circle holding the pending points to the container
pub fn plot_pending_points(world: &mut World) {
    let container = world
        .query_filtered::<Entity, With<PlotContainer>>()
        .iter(world)
        .next();
    let Some(container) = container else {
        error!("No plot container to bind the circle to");
        return;
    };

    let Some(points) = world
        .get_resource_mut::<PendingPoints>()
        .and_then(|mut pending| pending.0.take())
    else {
        return;
    };
    let radius = world.resource::<PlotSettings>().radius;

    let result = {
        let mut scene = BevyScene::new(world);
        render_points_to_circle(points, radius, &mut scene, container)
    };

    match result {
        Ok(circle) => {
            info!(
                "Plotted {} of {} point(s)",
                circle.visible_features().count(),
                circle.features().len()
            );
            world.insert_resource(PlottedCircle(circle));
        }
        Err(e) => error!("Failed to plot points: {}", e),
    }
}

//! circleplot
pub mod circle;
pub mod core;
pub mod features;
pub mod geometry;
pub mod logging;
pub mod pipeline;
pub mod rendering;
pub mod scene;
#[cfg(test)]
mod tests;

pub use circle::Circle;
pub use features::{Feature, FeatureKind};
pub use geometry::Coords;
pub use pipeline::{render_points_to_circle, PointsInput};
pub use scene::{SceneBackend, SceneTree};

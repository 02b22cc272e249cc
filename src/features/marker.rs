//! Labeled marker rendering

use crate::geometry::Coords;
use crate::scene::{NodeStyle, Placement, Rgba, Shape};
use kurbo::{Size, Vec2};

/// Markers are a little larger than plain points so the label has an anchor
pub const MARKER_SIZE: f64 = 4.0;

pub const MARKER_COLOR: Rgba = Rgba::rgb(255, 165, 0);

pub fn style(display: Coords, label: &str) -> NodeStyle {
    NodeStyle {
        size: Size::new(MARKER_SIZE, MARKER_SIZE),
        placement: Placement::FromCenter(Vec2::new(display.x, display.y)),
        shape: Shape::Round,
        fill: Some(MARKER_COLOR),
        border: None,
        label: Some(label.to_string()),
    }
}

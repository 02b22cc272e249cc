//! Point rendering
//!
//! A point is a tiny round dot whose center sits at the display-space
//! position, measured from the center of the circle. Depth is dropped.

use crate::geometry::Coords;
use crate::scene::{NodeStyle, Placement, Rgba, Shape};
use kurbo::{Size, Vec2};

/// Edge length of the point dot in pixels
pub const POINT_SIZE: f64 = 2.0;

/// CSS `green`
pub const POINT_COLOR: Rgba = Rgba::rgb(0, 128, 0);

/// Style for a point at `display`
pub fn style(display: Coords) -> NodeStyle {
    NodeStyle {
        size: Size::new(POINT_SIZE, POINT_SIZE),
        placement: Placement::FromCenter(Vec2::new(display.x, display.y)),
        shape: Shape::Round,
        fill: Some(POINT_COLOR),
        border: None,
        label: None,
    }
}

//! Real-space and display-space coordinates

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A position with three components.
///
/// Used both for feature positions in real space and for the scaled
/// (normalized) position in display space. Only `x` and `y` take part in
/// culling and 2D placement; `z` is carried through scaling untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coords {
    pub const ORIGIN: Coords = Coords {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build coordinates from a sequence of up to three values.
    ///
    /// Missing trailing components default to `0.0`, anything past the
    /// third value is ignored.
    pub fn from_slice(values: &[f64]) -> Self {
        let at = |index: usize| values.get(index).copied().unwrap_or(0.0);
        Self {
            x: at(0),
            y: at(1),
            z: at(2),
        }
    }

    /// Multiply every component by `ratio`
    pub fn scaled(self, ratio: f64) -> Self {
        Self {
            x: self.x * ratio,
            y: self.y * ratio,
            z: self.z * ratio,
        }
    }

    /// The 2D projection, dropping depth
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<[f64; 3]> for Coords {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y, z: 0.0 }
    }
}

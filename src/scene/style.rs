//! Backend-neutral node styling
//!
//! The pipeline only ever supplies numeric geometry and a handful of fixed
//! colors. Each scene backend translates a [`NodeStyle`] into whatever its
//! display layer understands.

use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS-style hex notation, alpha included only when not opaque
    pub fn to_hex(self) -> String {
        if self.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// How a node is positioned inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Placement {
    /// Normal flow, no explicit position
    #[default]
    Flow,
    /// In flow at the top of the parent, centered horizontally
    CenteredTop,
    /// Node center offset from the parent's center
    FromCenter(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Rect,
    /// Fully rounded corners; a square node becomes a circle
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f64,
    pub color: Rgba,
}

/// Visual description of a single scene node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeStyle {
    pub size: Size,
    pub placement: Placement,
    pub shape: Shape,
    pub fill: Option<Rgba>,
    pub border: Option<Border>,
    /// Text shown next to the node
    pub label: Option<String>,
}

impl NodeStyle {
    pub fn sized(size: Size) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Offset of the node's center from its parent's center, if placed that way
    pub fn center_offset(&self) -> Option<Vec2> {
        match self.placement {
            Placement::FromCenter(offset) => Some(offset),
            _ => None,
        }
    }
}

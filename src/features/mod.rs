//! Features: positioned entities a circle can display
//!
//! A feature is plain data (real-space coordinates and a kind) plus the
//! handle of the scene node it was last rendered to. Rendering behavior is
//! chosen by [`FeatureKind`], so new kinds slot in without touching the
//! circle.

pub mod marker;
pub mod point;

use crate::geometry::Coords;
use crate::scene::SceneBackend;
use serde::{Deserialize, Serialize};

/// The rendering variant of a feature
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeatureKind {
    /// A small dot
    #[default]
    Point,
    /// A dot with a text label next to it
    Marker { label: String },
}

/// A positioned entity owned by a circle
///
/// `N` is the scene backend's node handle. The handle is only ever set by
/// [`Feature::render`] and is never shared with another feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<N> {
    coords: Coords,
    kind: FeatureKind,
    representation: Option<N>,
}

impl<N> Default for Feature<N> {
    fn default() -> Self {
        Self::point(Coords::ORIGIN)
    }
}

impl<N> Feature<N> {
    pub fn new(coords: impl Into<Coords>, kind: FeatureKind) -> Self {
        Self {
            coords: coords.into(),
            kind,
            representation: None,
        }
    }

    pub fn point(coords: impl Into<Coords>) -> Self {
        Self::new(coords, FeatureKind::Point)
    }

    pub fn marker(coords: impl Into<Coords>, label: impl Into<String>) -> Self {
        Self::new(
            coords,
            FeatureKind::Marker {
                label: label.into(),
            },
        )
    }

    /// A point from up to three values, missing ones defaulting to zero
    pub fn from_slice(values: &[f64]) -> Self {
        Self::point(Coords::from_slice(values))
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn kind(&self) -> &FeatureKind {
        &self.kind
    }

    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            FeatureKind::Point => None,
            FeatureKind::Marker { label } => Some(label),
        }
    }

    pub(crate) fn clear_representation(&mut self) {
        self.representation = None;
    }
}

impl<N: Copy> Feature<N> {
    /// The scene node from the most recent render, if it was rendered
    pub fn representation(&self) -> Option<N> {
        self.representation
    }

    /// Create a fresh node for this feature at `display` (display space).
    ///
    /// Coordinates are not checked; the caller culls out-of-bounds
    /// positions beforehand. Any previous node handle is replaced.
    pub fn render<S>(&mut self, scene: &mut S, display: Coords) -> N
    where
        S: SceneBackend<Node = N>,
    {
        let style = match &self.kind {
            FeatureKind::Point => point::style(display),
            FeatureKind::Marker { label } => marker::style(display, label),
        };
        let node = scene.create_node();
        scene.set_style(node, &style);
        self.representation = Some(node);
        node
    }
}

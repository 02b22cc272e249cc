//! The circle viewport
//!
//! A [`Circle`] owns its features and a one-shot binding to a container
//! node. Once bound it inscribes itself in the container, projects every
//! feature from real space into display space, culls the ones that land
//! outside the container and renders the rest as children of its own node.

use crate::core::errors::{CircleError, CircleResult};
use crate::features::Feature;
use crate::geometry::{self, Projection};
use crate::scene::{Border, NodeStyle, Placement, Rgba, SceneBackend, Shape};
use kurbo::Size;
use std::fmt::Debug;
use tracing::{debug, info, warn};

/// Outline width of the circle in pixels
pub const OUTLINE_WIDTH: f64 = 1.0;

/// `rgba(128, 128, 128, 0.3)`
pub const OUTLINE_COLOR: Rgba = Rgba::rgba(128, 128, 128, 77);

/// The container a circle was bound to and its size at bind time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding<N> {
    pub container: N,
    pub size: Size,
}

/// `Unbound -> Bound`, never back
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BindState<N> {
    #[default]
    Unbound,
    Bound(Binding<N>),
}

#[derive(Debug, Clone)]
pub struct Circle<N> {
    radius: f64,
    features: Vec<Feature<N>>,
    state: BindState<N>,
    representation: Option<N>,
}

impl<N: Copy + Eq + Debug> Circle<N> {
    /// Create an unbound circle. `radius` is in real-space units and is
    /// expected to be positive; it is not checked.
    pub fn new(radius: f64, features: Vec<Feature<N>>) -> Self {
        Self {
            radius,
            features,
            state: BindState::Unbound,
            representation: None,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn features(&self) -> &[Feature<N>] {
        &self.features
    }

    pub fn state(&self) -> &BindState<N> {
        &self.state
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, BindState::Bound(_))
    }

    /// The circle's own scene node
    pub fn representation(&self) -> Option<N> {
        self.representation
    }

    pub fn binding(&self) -> CircleResult<Binding<N>> {
        match self.state {
            BindState::Bound(binding) => Ok(binding),
            BindState::Unbound => Err(CircleError::NotBound),
        }
    }

    /// Container size captured at bind time
    pub fn container_size(&self) -> CircleResult<Size> {
        self.binding().map(|binding| binding.size)
    }

    /// The smaller side of the container
    pub fn diameter(&self) -> CircleResult<f64> {
        self.container_size().map(geometry::diameter)
    }

    /// Display pixels per real-space unit
    pub fn ratio(&self) -> CircleResult<f64> {
        self.container_size()
            .map(|size| geometry::ratio(size, self.radius))
    }

    /// Features that survived the last render pass, in draw order
    pub fn visible_features(&self) -> impl Iterator<Item = &Feature<N>> {
        self.features
            .iter()
            .filter(|feature| feature.representation().is_some())
    }

    /// Capture the container's size and perform the initial render.
    ///
    /// The size is read exactly once; later container resizes are not
    /// observed. A circle can only be bound once.
    pub fn bind_to<S>(&mut self, scene: &mut S, container: N) -> CircleResult<&mut Self>
    where
        S: SceneBackend<Node = N>,
    {
        if self.is_bound() {
            return Err(CircleError::AlreadyBound);
        }

        let size = scene.container_size(container);
        if size.is_zero_area() {
            warn!(
                "Container {:?} has zero area ({}x{}); every feature will collapse onto the center",
                container, size.width, size.height
            );
        }

        self.state = BindState::Bound(Binding { container, size });
        info!(
            "Bound circle (radius {}) to {:?} at {}x{}",
            self.radius, container, size.width, size.height
        );

        self.render(scene)
    }

    /// Draw the circle outline, then all features.
    ///
    /// The outline node is created and attached on the first call and
    /// restyled in place afterwards.
    pub fn render<S>(&mut self, scene: &mut S) -> CircleResult<&mut Self>
    where
        S: SceneBackend<Node = N>,
    {
        let binding = self.binding()?;
        let diameter = geometry::diameter(binding.size);
        let style = outline_style(diameter);

        match self.representation {
            Some(node) => scene.set_style(node, &style),
            None => {
                let node = scene.create_node();
                scene.set_style(node, &style);
                scene.append_child(binding.container, node);
                self.representation = Some(node);
            }
        }
        debug!("Rendered circle outline with diameter {}", diameter);

        self.render_features(scene)?;
        Ok(self)
    }

    /// Redraw every feature from scratch.
    ///
    /// Does nothing when there are no features. Otherwise all children of
    /// the circle node are removed, each feature is projected with the
    /// current ratio, and features inside the container bounds get a fresh
    /// node appended in list order. Culled features lose their node.
    pub fn render_features<S>(&mut self, scene: &mut S) -> CircleResult<()>
    where
        S: SceneBackend<Node = N>,
    {
        if self.features.is_empty() {
            return Ok(());
        }

        let binding = self.binding()?;
        let node = self.representation.ok_or(CircleError::NotBound)?;
        let projection = Projection::new(binding.size, self.radius);
        if !(projection.ratio.is_finite() && projection.ratio > 0.0) {
            warn!(
                "Degenerate ratio {} for radius {}; features will be culled or mirrored",
                projection.ratio, self.radius
            );
        }

        scene.clear_children(node);

        let mut culled = 0usize;
        for (index, feature) in self.features.iter_mut().enumerate() {
            match projection.visible(feature.coords()) {
                Some(display) => {
                    let child = feature.render(scene, display);
                    scene.append_child(node, child);
                }
                None => {
                    debug!(
                        "Culled feature {} at {:?} (display {:?})",
                        index,
                        feature.coords(),
                        projection.normalize(feature.coords())
                    );
                    feature.clear_representation();
                    culled += 1;
                }
            }
        }

        debug!(
            "Rendered {} of {} features at ratio {}",
            self.features.len() - culled,
            self.features.len(),
            projection.ratio
        );
        Ok(())
    }

    /// Append a feature and redraw all features. Requires a bound circle.
    pub fn add_feature<S>(&mut self, scene: &mut S, feature: Feature<N>) -> CircleResult<&mut Self>
    where
        S: SceneBackend<Node = N>,
    {
        self.binding()?;
        self.features.push(feature);
        self.render_features(scene)?;
        Ok(self)
    }
}

/// Style of the circle outline node
pub fn outline_style(diameter: f64) -> NodeStyle {
    NodeStyle {
        size: Size::new(diameter, diameter),
        placement: Placement::CenteredTop,
        shape: Shape::Round,
        fill: None,
        border: Some(Border {
            width: OUTLINE_WIDTH,
            color: OUTLINE_COLOR,
        }),
        label: None,
    }
}

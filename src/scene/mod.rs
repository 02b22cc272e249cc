//! Scene backends
//!
//! The pipeline never draws anything itself. It talks to a display tree
//! through [`SceneBackend`], which hands out opaque node handles:
//! - [`SceneTree`]: in-memory display tree, used headless and in tests
//! - [`BevyScene`]: Bevy UI entities inside a `World`

pub mod bevy_scene;
pub mod style;
pub mod tree;

use kurbo::Size;
use std::fmt::Debug;

// Re-export commonly used items
pub use bevy_scene::BevyScene;
pub use style::{Border, NodeStyle, Placement, Rgba, Shape};
pub use tree::{NodeId, SceneNode, SceneTree};

/// The capabilities a display layer must supply to host a circle.
pub trait SceneBackend {
    /// Handle to a node owned by the backend
    type Node: Copy + Eq + Debug;

    /// Create an empty, detached node
    fn create_node(&mut self) -> Self::Node;

    /// Replace the node's geometry and visual styling
    fn set_style(&mut self, node: Self::Node, style: &NodeStyle);

    /// Attach `child` as the last child of `parent`
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Remove every child of `node` (and their subtrees) from the scene
    fn clear_children(&mut self, node: Self::Node);

    /// Current pixel size of a container node
    fn container_size(&self, container: Self::Node) -> Size;
}

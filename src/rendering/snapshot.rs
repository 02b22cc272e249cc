//! Headless snapshots of a rendered circle
//!
//! Captures the display tree under the circle's container so the CLI can
//! print it as an indented outline or as JSON.

use crate::circle::Circle;
use crate::core::errors::CircleResult;
use crate::scene::{NodeId, Placement, SceneTree, Shape};
use kurbo::Size;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub radius: f64,
    pub container: Size,
    pub diameter: f64,
    pub ratio: f64,
    pub features_total: usize,
    pub features_visible: usize,
    pub root: SnapshotNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotNode {
    pub size: Size,
    pub placement: Placement,
    pub shape: Shape,
    pub fill: Option<String>,
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    fn capture(tree: &SceneTree, node: NodeId) -> Self {
        let style = tree.style(node).cloned().unwrap_or_default();
        Self {
            size: style.size,
            placement: style.placement,
            shape: style.shape,
            fill: style.fill.map(|fill| fill.to_hex()),
            border: style
                .border
                .map(|border| format!("{}px {}", border.width, border.color.to_hex())),
            label: style.label,
            children: tree
                .children(node)
                .iter()
                .map(|child| Self::capture(tree, *child))
                .collect(),
        }
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let _ = write!(
            out,
            "{:indent$}node {}x{}",
            "",
            self.size.width,
            self.size.height,
            indent = depth * 2
        );
        match self.placement {
            Placement::Flow => {}
            Placement::CenteredTop => out.push_str(" centered"),
            Placement::FromCenter(offset) => {
                let _ = write!(out, " at ({}, {})", offset.x, offset.y);
            }
        }
        if self.shape == Shape::Round {
            out.push_str(" round");
        }
        if let Some(fill) = &self.fill {
            let _ = write!(out, " fill {fill}");
        }
        if let Some(border) = &self.border {
            let _ = write!(out, " border {border}");
        }
        if let Some(label) = &self.label {
            let _ = write!(out, " {label:?}");
        }
        out.push('\n');

        for child in &self.children {
            child.write_outline(out, depth + 1);
        }
    }
}

impl Snapshot {
    /// Capture `circle` and everything under its container
    pub fn capture(tree: &SceneTree, circle: &Circle<NodeId>) -> CircleResult<Self> {
        let binding = circle.binding()?;
        Ok(Self {
            radius: circle.radius(),
            container: binding.size,
            diameter: circle.diameter()?,
            ratio: circle.ratio()?,
            features_total: circle.features().len(),
            features_visible: circle.visible_features().count(),
            root: SnapshotNode::capture(tree, binding.container),
        })
    }

    /// Indented text outline with a summary header
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "circle radius {} in {}x{}: diameter {}, ratio {}, {} of {} feature(s) visible\n",
            self.radius,
            self.container.width,
            self.container.height,
            self.diameter,
            self.ratio,
            self.features_visible,
            self.features_total
        );
        self.root.write_outline(&mut out, 0);
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

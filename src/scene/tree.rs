//! In-memory display tree
//!
//! Nodes live in an arena. Removed slots are recycled, and every reuse bumps
//! the slot's generation, so a handle to a cleared node stays dead instead of
//! aliasing the newer node in the same slot.

use super::{NodeStyle, SceneBackend};
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Handle to a node in a [`SceneTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    pub style: NodeStyle,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    generation: u32,
    alive: bool,
}

impl SceneNode {
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneTree {
    nodes: Vec<SceneNode>,
    free: Vec<u32>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root node with a fixed pixel size to bind circles to
    pub fn add_container(&mut self, size: Size) -> NodeId {
        let node = self.create_node();
        self.nodes[node.index()].style = NodeStyle::sized(size);
        node
    }

    /// Look up a live node
    pub fn get(&self, node: NodeId) -> Option<&SceneNode> {
        self.nodes
            .get(node.index())
            .filter(|entry| entry.alive && entry.generation == node.generation)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut SceneNode> {
        self.nodes
            .get_mut(node.index())
            .filter(|entry| entry.alive && entry.generation == node.generation)
    }

    pub fn is_alive(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    pub fn style(&self, node: NodeId) -> Option<&NodeStyle> {
        self.get(node).map(|entry| &entry.style)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|entry| entry.parent)
    }

    /// Number of nodes that have not been removed
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|entry| entry.alive).count()
    }

    /// Number of arena slots, live or waiting for reuse
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    fn remove_subtree(&mut self, node: NodeId) {
        let children = match self.get_mut(node) {
            Some(entry) => {
                entry.alive = false;
                entry.parent = None;
                entry.style = NodeStyle::default();
                std::mem::take(&mut entry.children)
            }
            None => return,
        };
        self.free.push(node.index);
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.parent(child) {
            if let Some(entry) = self.get_mut(parent) {
                entry.children.retain(|c| *c != child);
            }
        }
    }
}

impl SceneBackend for SceneTree {
    type Node = NodeId;

    fn create_node(&mut self) -> NodeId {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.nodes[index as usize];
            entry.generation = entry.generation.wrapping_add(1);
            entry.alive = true;
            return NodeId {
                index,
                generation: entry.generation,
            };
        }

        let index = self.nodes.len() as u32;
        self.nodes.push(SceneNode {
            alive: true,
            ..Default::default()
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    fn set_style(&mut self, node: NodeId, style: &NodeStyle) {
        match self.get_mut(node) {
            Some(entry) => entry.style = style.clone(),
            None => tracing::warn!("Ignoring style for removed node {:?}", node),
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_alive(parent) || !self.is_alive(child) {
            tracing::warn!("Cannot attach {:?} under {:?}: node removed", child, parent);
            return;
        }
        self.detach(child);
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    fn clear_children(&mut self, node: NodeId) {
        let children = match self.get_mut(node) {
            Some(entry) => std::mem::take(&mut entry.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn container_size(&self, container: NodeId) -> Size {
        self.style(container)
            .map(|style| style.size)
            .unwrap_or(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_keep_insertion_order() {
        let mut tree = SceneTree::new();
        let root = tree.add_container(Size::new(10.0, 10.0));
        let a = tree.create_node();
        let b = tree.create_node();
        let c = tree.create_node();
        tree.append_child(root, b);
        tree.append_child(root, a);
        tree.append_child(root, c);
        assert_eq!(tree.children(root), &[b, a, c]);
        assert_eq!(tree.parent(a), Some(root));
    }

    #[test]
    fn clearing_removes_whole_subtrees() {
        let mut tree = SceneTree::new();
        let root = tree.add_container(Size::new(10.0, 10.0));
        let child = tree.create_node();
        let grandchild = tree.create_node();
        tree.append_child(root, child);
        tree.append_child(child, grandchild);

        tree.clear_children(root);

        assert!(tree.children(root).is_empty());
        assert!(!tree.is_alive(child));
        assert!(!tree.is_alive(grandchild));
        assert_eq!(tree.live_count(), 1);
    }

    #[test]
    fn reattaching_moves_the_node() {
        let mut tree = SceneTree::new();
        let first = tree.add_container(Size::new(1.0, 1.0));
        let second = tree.add_container(Size::new(1.0, 1.0));
        let child = tree.create_node();
        tree.append_child(first, child);
        tree.append_child(second, child);
        assert!(tree.children(first).is_empty());
        assert_eq!(tree.children(second), &[child]);
    }

    #[test]
    fn removed_slots_are_reused_with_a_new_generation() {
        let mut tree = SceneTree::new();
        let root = tree.add_container(Size::new(10.0, 10.0));
        let old = tree.create_node();
        tree.append_child(root, old);
        tree.clear_children(root);

        let new = tree.create_node();

        assert_eq!(new.index(), old.index());
        assert_ne!(new, old);
        assert!(tree.is_alive(new));
        assert!(!tree.is_alive(old));
        assert!(tree.style(new).is_some_and(|style| *style == NodeStyle::default()));

        // A stale handle must not reach the node now living in its slot
        tree.append_child(root, old);
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.slot_count(), 2);
    }

    #[test]
    fn container_size_comes_from_its_style() {
        let mut tree = SceneTree::new();
        let root = tree.add_container(Size::new(300.0, 100.0));
        assert_eq!(tree.container_size(root), Size::new(300.0, 100.0));

        let detached = tree.create_node();
        assert_eq!(tree.container_size(detached), Size::ZERO);
    }
}

//! Bevy UI scene backend
//!
//! Every scene node becomes a Bevy UI entity. Placement is expressed with
//! absolute positioning at the parent's center plus a margin offset, which
//! keeps markers anchored to the circle center regardless of its size.

use super::{NodeStyle, Placement, Rgba, SceneBackend, Shape};
use bevy::prelude::*;
use kurbo::Size;

/// Font size for node labels
pub const LABEL_FONT_SIZE: f32 = 11.0;

/// Gap between a node and its label
const LABEL_GAP: f32 = 4.0;

/// Marker for UI entities created through [`BevyScene`]
#[derive(Component, Debug, Default)]
pub struct PlotNode;

/// Marker for the text child carrying a node's label
#[derive(Component, Debug, Default)]
pub struct PlotLabel;

/// [`SceneBackend`] over a Bevy `World`
///
/// Meant to be driven from an exclusive system so the whole render pass
/// happens without other systems observing a partial tree.
pub struct BevyScene<'w> {
    world: &'w mut World,
}

impl<'w> BevyScene<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }

    fn replace_label(&mut self, node: Entity, label: Option<&str>) {
        let stale: Vec<Entity> = self
            .world
            .get::<Children>(node)
            .map(|children| children.to_vec())
            .unwrap_or_default()
            .into_iter()
            .filter(|child| self.world.get::<PlotLabel>(*child).is_some())
            .collect();
        for child in stale {
            self.world.despawn(child);
        }

        if let Some(text) = label {
            let label_entity = self
                .world
                .spawn((
                    PlotLabel,
                    Text::new(text),
                    TextFont {
                        font_size: LABEL_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::srgb(0.8, 0.8, 0.8)),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Percent(100.0),
                        margin: UiRect::left(Val::Px(LABEL_GAP)),
                        ..default()
                    },
                ))
                .id();
            self.world.entity_mut(node).add_child(label_entity);
        }
    }
}

/// Convert a backend-neutral color into a Bevy color
pub fn to_color(color: Rgba) -> Color {
    Color::srgba_u8(color.r, color.g, color.b, color.a)
}

fn px(value: f64) -> Val {
    Val::Px(value as f32)
}

/// Build the Bevy layout node for a style
pub fn ui_node(style: &NodeStyle) -> Node {
    let mut node = Node {
        width: px(style.size.width),
        height: px(style.size.height),
        ..default()
    };

    match style.placement {
        Placement::Flow => {}
        Placement::CenteredTop => {
            node.position_type = PositionType::Relative;
            node.margin = UiRect::horizontal(Val::Auto);
        }
        Placement::FromCenter(offset) => {
            node.position_type = PositionType::Absolute;
            node.left = Val::Percent(50.0);
            node.top = Val::Percent(50.0);
            node.margin = UiRect {
                left: px(offset.x - style.size.width / 2.0),
                top: px(offset.y - style.size.height / 2.0),
                ..default()
            };
        }
    }

    if let Some(border) = style.border {
        node.border = UiRect::all(px(border.width));
    }

    node
}

impl SceneBackend for BevyScene<'_> {
    type Node = Entity;

    fn create_node(&mut self) -> Entity {
        self.world.spawn((PlotNode, Node::default())).id()
    }

    fn set_style(&mut self, node: Entity, style: &NodeStyle) {
        let Ok(mut entity) = self.world.get_entity_mut(node) else {
            warn!("Ignoring style for missing entity {:?}", node);
            return;
        };

        entity.insert(ui_node(style));

        if let Some(fill) = style.fill {
            entity.insert(BackgroundColor(to_color(fill)));
        } else {
            entity.remove::<BackgroundColor>();
        }

        if let Some(border) = style.border {
            entity.insert(BorderColor(to_color(border.color)));
        } else {
            entity.remove::<BorderColor>();
        }

        match style.shape {
            Shape::Round => {
                entity.insert(BorderRadius::MAX);
            }
            Shape::Rect => {
                entity.remove::<BorderRadius>();
            }
        }

        self.replace_label(node, style.label.as_deref());
    }

    fn append_child(&mut self, parent: Entity, child: Entity) {
        match self.world.get_entity_mut(parent) {
            Ok(mut entity) => {
                entity.add_child(child);
            }
            Err(_) => warn!("Cannot attach {:?}: parent {:?} is gone", child, parent),
        }
    }

    fn clear_children(&mut self, node: Entity) {
        if let Ok(mut entity) = self.world.get_entity_mut(node) {
            entity.despawn_related::<Children>();
        }
    }

    fn container_size(&self, container: Entity) -> Size {
        if let Some(node) = self.world.get::<Node>(container) {
            if let (Val::Px(width), Val::Px(height)) = (node.width, node.height) {
                return Size::new(width as f64, height as f64);
            }
        }

        // Fall back to the laid-out size for containers sized by flex rules
        match self.world.get::<ComputedNode>(container) {
            Some(computed) => {
                let size = computed.size() * computed.inverse_scale_factor();
                Size::new(size.x as f64, size.y as f64)
            }
            None => {
                warn!("Container {:?} has no pixel size", container);
                Size::ZERO
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn container(world: &mut World, width: f32, height: f32) -> Entity {
        world
            .spawn(Node {
                width: Val::Px(width),
                height: Val::Px(height),
                ..default()
            })
            .id()
    }

    #[test]
    fn container_size_reads_pixel_node() {
        let mut world = World::new();
        let root = container(&mut world, 300.0, 100.0);
        let scene = BevyScene::new(&mut world);
        assert_eq!(scene.container_size(root), Size::new(300.0, 100.0));
    }

    #[test]
    fn centered_placement_becomes_absolute_margin() {
        let style = NodeStyle {
            size: Size::new(2.0, 2.0),
            placement: Placement::FromCenter(Vec2::new(50.0, -20.0)),
            ..Default::default()
        };
        let node = ui_node(&style);
        assert_eq!(node.position_type, PositionType::Absolute);
        assert_eq!(node.left, Val::Percent(50.0));
        assert_eq!(node.margin.left, Val::Px(49.0));
        assert_eq!(node.margin.top, Val::Px(-21.0));
    }

    #[test]
    fn clear_children_despawns_them() {
        let mut world = World::new();
        let root = container(&mut world, 10.0, 10.0);
        let mut scene = BevyScene::new(&mut world);
        let child = scene.create_node();
        scene.append_child(root, child);
        scene.clear_children(root);
        assert!(world.get_entity(child).is_err());
    }

    #[test]
    fn styled_node_gets_fill_and_round_corners() {
        let mut world = World::new();
        let mut scene = BevyScene::new(&mut world);
        let node = scene.create_node();
        scene.set_style(
            node,
            &NodeStyle {
                size: Size::new(2.0, 2.0),
                shape: Shape::Round,
                fill: Some(Rgba::rgb(0, 128, 0)),
                ..Default::default()
            },
        );
        assert!(world.get::<BackgroundColor>(node).is_some());
        assert_eq!(world.get::<BorderRadius>(node), Some(&BorderRadius::MAX));
    }
}

#[cfg(test)]
mod scenario_tests {
    use crate::pipeline::render_points_to_circle;
    use crate::scene::{NodeId, SceneTree};
    use crate::Circle;
    use kurbo::{Size, Vec2};

    fn plot(points: impl Into<crate::PointsInput>, radius: f64, size: Size) -> (SceneTree, Circle<NodeId>) {
        let mut scene = SceneTree::new();
        let container = scene.add_container(size);
        let circle = render_points_to_circle(points, radius, &mut scene, container)
            .expect("binding a fresh circle should succeed");
        (scene, circle)
    }

    fn drawn_offsets(scene: &SceneTree, circle: &Circle<NodeId>) -> Vec<Vec2> {
        let outline = circle.representation().expect("bound circle has an outline");
        scene
            .children(outline)
            .iter()
            .filter_map(|node| scene.style(*node).and_then(|style| style.center_offset()))
            .collect()
    }

    #[test]
    fn point_inside_radius_is_drawn_scaled() {
        let (scene, circle) = plot(vec![[5.0, 5.0, 0.0]], 10.0, Size::new(200.0, 200.0));
        assert_eq!(circle.diameter(), Ok(200.0));
        assert_eq!(circle.ratio(), Ok(10.0));
        assert_eq!(drawn_offsets(&scene, &circle), vec![Vec2::new(50.0, 50.0)]);
    }

    #[test]
    fn point_past_container_edge_is_culled() {
        let (scene, circle) = plot(vec![[15.0, 0.0, 0.0]], 10.0, Size::new(200.0, 200.0));
        assert!(drawn_offsets(&scene, &circle).is_empty());
        assert_eq!(circle.features()[0].representation(), None);
    }

    #[test]
    fn single_point_shorthand_matches_list_form() {
        let size = Size::new(120.0, 80.0);
        let (flat_scene, flat) = plot([1.0, 2.0, 3.0], 5.0, size);
        let (list_scene, list) = plot(vec![vec![1.0, 2.0, 3.0]], 5.0, size);

        assert_eq!(flat.features().len(), 1);
        assert_eq!(flat.features()[0].coords(), list.features()[0].coords());
        assert_eq!(
            drawn_offsets(&flat_scene, &flat),
            drawn_offsets(&list_scene, &list)
        );
    }

    #[test]
    fn wide_container_uses_height_as_diameter() {
        let (_, circle) = plot(Vec::<[f64; 3]>::new(), 1.0, Size::new(300.0, 100.0));
        assert_eq!(circle.diameter(), Ok(100.0));
        assert_eq!(circle.ratio(), Ok(50.0));
    }

    #[test]
    fn mirrored_points_share_visibility() {
        let points = vec![
            [0.3, -0.2, 0.0],
            [-0.3, 0.2, 0.0],
            [2.2, 0.1, 0.0],
            [-2.2, -0.1, 0.0],
        ];
        let (_, circle) = plot(points, 1.0, Size::new(200.0, 100.0));
        let visible: Vec<bool> = circle
            .features()
            .iter()
            .map(|feature| feature.representation().is_some())
            .collect();
        assert_eq!(visible, vec![true, true, false, false]);
    }

    #[test]
    fn adding_features_keeps_earlier_positions() {
        let (mut scene, mut circle) = plot(
            vec![[0.1, 0.2, 0.0], [0.9, -0.9, 0.0]],
            1.0,
            Size::new(100.0, 100.0),
        );
        let before = drawn_offsets(&scene, &circle);

        circle
            .add_feature(&mut scene, crate::Feature::marker([-0.5, 0.5], "west"))
            .unwrap();

        let after = drawn_offsets(&scene, &circle);
        assert_eq!(&after[..2], &before[..]);
        assert_eq!(after[2], Vec2::new(-25.0, 25.0));
        // Two points plus the marker, and nothing left over from the first pass
        assert_eq!(scene.live_count(), 1 + 1 + 3);
    }
}

mod test_utils;

mod test_posed_variants {
    use crate::test_utils::*;
    use swept_collide::assert_fuzzy_eq;
    use swept_collide::core::math::{point_on_circle, Vector2};
    use swept_collide::shapes::{Polygon, Pose};
    use swept_collide::sweep::{
        circle_hits_polygon, circle_hits_polygon_posed, ray_hits_polygon, ray_hits_polygon_posed,
    };

    /// Pose that rotates the triangle fixture so the edge from (2, 0) to (1, 4) lands flat along
    /// the world line y = 2.
    fn flat_edge_pose() -> Pose<f64> {
        Pose::new(
            Vector2::new(3.0, 0.059714999709336247),
            1.3258176636680323,
        )
    }

    fn transform(polygon: &Polygon<f64>, pose: Pose<f64>) -> Polygon<f64> {
        Polygon::new(
            polygon
                .vertexes()
                .iter()
                .map(|&v| pose.to_world_point(v))
                .collect(),
        )
    }

    #[test]
    fn ray_hits_posed_polygon() {
        let hit = ray_hits_polygon_posed(
            &triangle(),
            flat_edge_pose(),
            Vector2::new(3.0, 5.0),
            Vector2::new(0.0, -5.0),
        )
        .expect("ray crosses the posed triangle");
        assert_fuzzy_eq!(hit.point, Vector2::new(3.0, 2.0));
        assert_fuzzy_eq!(hit.normal.normalize(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn circle_hits_posed_polygon() {
        let hit = circle_hits_polygon_posed(
            &triangle(),
            flat_edge_pose(),
            2.0,
            Vector2::new(3.0, 5.0),
            Vector2::new(0.0, -5.0),
        )
        .expect("sweep reaches the posed triangle");
        assert_fuzzy_eq!(hit.position, Vector2::new(3.0, 4.0));
        assert_fuzzy_eq!(hit.impact, Vector2::new(3.0, 2.0));
    }

    #[test]
    fn posed_ray_matches_pretransformed_polygon() {
        let pose = Pose::new(Vector2::new(-2.5, 1.5), 0.83);
        let posed_triangle = transform(&triangle(), pose);

        // the local origin is inside the triangle, rays aimed at the pose position always hit
        for i in 0..8 {
            let angle = f64::from(i) * std::f64::consts::TAU / 8.0;
            let start = point_on_circle(8.0, pose.position, angle);
            let delta = (pose.position - start).scale(2.0);

            let posed_hit = ray_hits_polygon_posed(&triangle(), pose, start, delta)
                .expect("aimed ray hits the posed triangle");
            let direct_hit = ray_hits_polygon(&posed_triangle, start, delta)
                .expect("aimed ray hits the transformed triangle");
            assert_fuzzy_eq!(posed_hit.point, direct_hit.point);
            assert_fuzzy_eq!(posed_hit.normal, direct_hit.normal);
        }
    }

    #[test]
    fn posed_circle_sweep_matches_pretransformed_polygon() {
        let pose = Pose::new(Vector2::new(4.0, -3.5), -1.37);
        let posed_triangle = transform(&triangle(), pose);

        for i in 0..8 {
            let angle = f64::from(i) * std::f64::consts::TAU / 8.0;
            let start = point_on_circle(9.0, pose.position, angle);
            let delta = (pose.position - start).scale(2.0);

            let posed_hit = circle_hits_polygon_posed(&triangle(), pose, 0.75, start, delta)
                .expect("aimed sweep hits the posed triangle");
            let direct_hit = circle_hits_polygon(&posed_triangle, 0.75, start, delta)
                .expect("aimed sweep hits the transformed triangle");
            assert_fuzzy_eq!(posed_hit.position, direct_hit.position);
            assert_fuzzy_eq!(posed_hit.impact, direct_hit.impact);
        }
    }
}

mod test_utils;

mod test_ray_hits_polygon {
    use crate::test_utils::*;
    use swept_collide::assert_fuzzy_eq;
    use swept_collide::core::math::Vector2;
    use swept_collide::sweep::ray_hits_polygon;

    #[test]
    fn hits_first_edge_crossed() {
        let hit = ray_hits_polygon(&triangle(), Vector2::new(2.0, 4.0), Vector2::new(-1.0, -4.0))
            .expect("ray crosses the triangle");
        assert_fuzzy_eq!(hit.point, Vector2::new(1.5, 2.0));
        assert_fuzzy_eq!(hit.normal, Vector2::new(4.0, 1.0));
    }

    #[test]
    fn longer_delta_same_crossing() {
        // same ray direction with five times the length, the entry point must not move
        let hit = ray_hits_polygon(&triangle(), Vector2::new(2.0, 4.0), Vector2::new(-5.0, -20.0))
            .expect("ray crosses the triangle");
        assert_fuzzy_eq!(hit.point, Vector2::new(1.5, 2.0));
        assert_fuzzy_eq!(hit.normal, Vector2::new(4.0, 1.0));
    }

    #[test]
    fn start_embedded_reports_start() {
        let start = Vector2::new(0.5, 0.0);
        let hit = ray_hits_polygon(&triangle(), start, Vector2::new(1.0, 0.0))
            .expect("embedded start always hits");
        assert_fuzzy_eq!(hit.point, start);
        assert_fuzzy_eq!(hit.normal, Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn falls_short_of_boundary() {
        assert!(
            ray_hits_polygon(&triangle(), Vector2::new(-5.0, 0.0), Vector2::new(1.0, 0.0))
                .is_none()
        );
    }

    #[test]
    fn misses_to_the_side() {
        assert!(
            ray_hits_polygon(&triangle(), Vector2::new(5.0, 4.0), Vector2::new(1.0, -5.0))
                .is_none()
        );
    }

    #[test]
    fn enters_concave_notch() {
        let delta = Vector2::new(0.0, 5.0);
        let hit = ray_hits_polygon(&concave_hexagon(), Vector2::new(0.5, -4.0), delta)
            .expect("ray crosses the notch ceiling");
        assert_fuzzy_eq!(hit.point, Vector2::new(0.5, -1.0));
        assert_fuzzy_eq!(hit.normal, Vector2::new(0.0, -1.0));
        assert!(hit.normal.dot(delta) < 0.0);
    }

    #[test]
    fn recast_from_hit_point_returns_hit_point() {
        let delta = Vector2::new(-1.0, -4.0);
        let hit = ray_hits_polygon(&triangle(), Vector2::new(2.0, 4.0), delta).unwrap();
        let again = ray_hits_polygon(&triangle(), hit.point, delta)
            .expect("casting again from the boundary still hits");
        assert_fuzzy_eq!(again.point, hit.point);
    }
}

mod test_ray_hits_circle {
    use swept_collide::assert_fuzzy_eq;
    use swept_collide::core::math::Vector2;
    use swept_collide::shapes::Circle;
    use swept_collide::sweep::ray_hits_circle;

    #[test]
    fn enters_circle() {
        let circle = Circle::new(Vector2::new(1.0, 1.0), 2.0);
        let hit = ray_hits_circle(&circle, Vector2::new(-6.0, 1.0), Vector2::new(10.0, 0.0))
            .expect("ray crosses the circle");
        assert_fuzzy_eq!(hit.point, Vector2::new(-1.0, 1.0));
        // radially outward normal, length equal to the radius
        assert_fuzzy_eq!(hit.normal, Vector2::new(-2.0, 0.0));
    }

    #[test]
    fn start_embedded_reports_start() {
        let circle = Circle::new(Vector2::new(1.0, 1.0), 2.0);
        let start = Vector2::new(0.0, 0.0);
        let hit = ray_hits_circle(&circle, start, Vector2::new(3.0, 4.0))
            .expect("embedded start always hits");
        assert_fuzzy_eq!(hit.point, start);
        assert_fuzzy_eq!(hit.normal, Vector2::new(-3.0, -4.0));
    }

    #[test]
    fn misses_to_the_side() {
        let circle = Circle::new(Vector2::new(1.0, 1.0), 2.0);
        assert!(
            ray_hits_circle(&circle, Vector2::new(-6.0, 1.0), Vector2::new(10.0, 10.0)).is_none()
        );
    }

    #[test]
    fn falls_short_of_circle() {
        let circle = Circle::new(Vector2::new(1.0, 1.0), 2.0);
        assert!(
            ray_hits_circle(&circle, Vector2::new(-6.0, 1.0), Vector2::new(3.0, 0.0)).is_none()
        );
    }
}

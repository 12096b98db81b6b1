mod test_utils;

mod test_polygon_contains {
    use crate::test_utils::*;
    use swept_collide::core::math::Vector2;
    use swept_collide::shapes::Polygon;

    /// Asserts the expected containment results hold for the polygon as given, for all cycled
    /// vertex orderings of it, and for the inverted winding direction of it.
    fn assert_contains(polygon: &Polygon<f64>, probes: &[(f64, f64, bool)]) {
        let run = |p: &Polygon<f64>, variant: &str| {
            for &(x, y, expected) in probes {
                assert_eq!(
                    p.contains(Vector2::new(x, y)),
                    expected,
                    "contains(({}, {})) mismatch for {} polygon",
                    x,
                    y,
                    variant
                );
            }
        };

        run(polygon, "original");
        for n in 1..polygon.vertex_count() {
            run(&cycle_start_index_forward(polygon, n), "cycled");
        }
        run(&invert_direction(polygon), "inverted");
    }

    #[test]
    fn triangle_contains() {
        assert_contains(
            &triangle(),
            &[
                (0.0, 1.0, true),
                (0.0, 0.0, true),
                (1.5, 0.5, true),
                (-2.0, 3.0, false),
                (5.0, 1.0, false),
                (-5.0, 10.0, false),
            ],
        );
    }

    #[test]
    fn concave_hexagon_contains() {
        assert_contains(
            &concave_hexagon(),
            &[
                (0.0, 0.0, true),
                (-1.0, 2.5, true),
                (-1.5, -2.0, true),
                (-1.0, -1.0, true),
                (-3.0, -2.0, false),
                (-5.0, -1.0, false),
                // point inside the notch cut into the bottom
                (0.0, -2.0, false),
            ],
        );
    }

    #[test]
    fn square_with_collinear_vertex_contains() {
        assert_contains(
            &square_with_collinear_vertex(),
            &[
                (0.0, 0.0, true),
                (0.5, 0.5, true),
                // outside but collinear with the top edge
                (-5.0, 1.0, false),
                (-5.0, -1.0, false),
            ],
        );
    }

    #[test]
    fn convex_contains_triangle() {
        let triangle = triangle();
        for (x, y, expected) in [
            (0.0, 1.0, true),
            (0.0, 0.0, true),
            (1.5, 0.5, true),
            (-2.0, 3.0, false),
            (5.0, 1.0, false),
            (-5.0, 10.0, false),
        ] {
            assert_eq!(
                triangle.convex_contains(Vector2::new(x, y)),
                expected,
                "convex_contains(({}, {})) mismatch",
                x,
                y
            );
        }
    }

    #[test]
    fn convex_contains_square_with_collinear_vertex() {
        let square = square_with_collinear_vertex();
        for (x, y, expected) in [
            (0.0, 0.0, true),
            (0.5, 0.5, true),
            (-5.0, 1.0, false),
            (-5.0, -1.0, false),
        ] {
            assert_eq!(
                square.convex_contains(Vector2::new(x, y)),
                expected,
                "convex_contains(({}, {})) mismatch",
                x,
                y
            );
        }
    }

    #[test]
    fn convex_contains_agrees_with_contains() {
        // grid offset from integer coordinates so no probe lands exactly on a fixture boundary
        let convex_fixtures = [triangle(), square_with_collinear_vertex()];
        for polygon in convex_fixtures.iter() {
            for i in -6..6 {
                for j in -6..6 {
                    let point = Vector2::new(i as f64 + 0.25, j as f64 + 0.25);
                    assert_eq!(
                        polygon.contains(point),
                        polygon.convex_contains(point),
                        "containment tests disagree at {:?}",
                        point
                    );
                }
            }
        }
    }

    #[test]
    fn convex_contains_winding_invariant() {
        let square = square_with_collinear_vertex();
        let inverted = invert_direction(&square);
        for i in -3..3 {
            for j in -3..3 {
                let point = Vector2::new(i as f64 + 0.25, j as f64 + 0.25);
                assert_eq!(
                    square.convex_contains(point),
                    inverted.convex_contains(point),
                    "winding changed convex_contains at {:?}",
                    point
                );
            }
        }
    }
}

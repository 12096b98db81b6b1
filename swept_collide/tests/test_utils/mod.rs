#![allow(dead_code)]
use swept_collide::polygon;
use swept_collide::shapes::Polygon;

/// Scalene triangle fixture used across the collision tests.
pub fn triangle() -> Polygon<f64> {
    polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)]
}

/// Concave hexagon fixture with a notch cut into the bottom.
pub fn concave_hexagon() -> Polygon<f64> {
    polygon![
        (2.0, -3.0),
        (2.0, 2.0),
        (-2.0, 3.0),
        (-2.0, -3.0),
        (0.0, -1.0),
        (1.0, -1.0)
    ]
}

/// Axis aligned unit square fixture carrying a redundant collinear vertex on its top edge.
pub fn square_with_collinear_vertex() -> Polygon<f64> {
    polygon![(1.0, 1.0), (0.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)]
}

/// Cycles all the vertex index positions forward by `n`. E.g. index 0 becomes 1, last index
/// becomes 0, etc. Used for testing vertex order invariance.
pub fn cycle_start_index_forward(input: &Polygon<f64>, n: usize) -> Polygon<f64> {
    assert!(n > 0, "cycling forward by 0 just returns the same polygon");
    assert!(
        n < input.vertex_count(),
        "cycling forward by more than the vertex count is unnecessary"
    );
    Polygon::new(
        input
            .vertexes()
            .iter()
            .cycle()
            .skip(n)
            .take(input.vertex_count())
            .copied()
            .collect(),
    )
}

/// Reverses the winding direction of the polygon. Used for testing winding invariance.
pub fn invert_direction(input: &Polygon<f64>) -> Polygon<f64> {
    Polygon::new(input.vertexes().iter().rev().copied().collect())
}

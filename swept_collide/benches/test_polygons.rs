use swept_collide::core::math::{point_on_circle, Vector2};
use swept_collide::core::traits::Real;
use swept_collide::shapes::Polygon;

/// Convex regular polygon with `vertex_count` vertexes inscribed in a circle of `radius`.
pub fn create_regular_polygon<T>(vertex_count: usize, radius: T) -> Polygon<T>
where
    T: Real,
{
    let center = Vector2::zero();
    let mut vertexes = Vec::with_capacity(vertex_count);
    for i in 0..vertex_count {
        let angle = T::from(i).unwrap() * T::tau() / T::from(vertex_count).unwrap();
        vertexes.push(point_on_circle(radius, center, angle));
    }

    Polygon::new(vertexes)
}

/// Concave star polygon alternating between `outer_radius` and `inner_radius` vertexes.
/// `vertex_count` must be even.
pub fn create_star_polygon<T>(vertex_count: usize, outer_radius: T, inner_radius: T) -> Polygon<T>
where
    T: Real,
{
    assert!(vertex_count % 2 == 0, "star polygon requires an even vertex count");
    let center = Vector2::zero();
    let mut vertexes = Vec::with_capacity(vertex_count);
    for i in 0..vertex_count {
        let angle = T::from(i).unwrap() * T::tau() / T::from(vertex_count).unwrap();
        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
        vertexes.push(point_on_circle(radius, center, angle));
    }

    Polygon::new(vertexes)
}

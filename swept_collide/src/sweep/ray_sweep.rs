use super::circle_sweep::circle_hits_point;
use super::sweep_types::RayHit;
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::shapes::{in_local_frame, Circle, Polygon, Pose};

/// Cast a ray from `start` along `delta` against `polygon`, finding the first boundary hit.
///
/// The ray is finite: only crossings within the translation `delta` (parametric `t` in `[0, 1]`
/// measured from `start`) are reported, and the earliest one is returned. When two edges are
/// struck at the same `t` (e.g. the ray passes exactly through a shared vertex) the edge earlier
/// in vertex order wins. The returned normal faces against `delta` but is not normalized (its
/// length is the struck edge's length).
///
/// If `start` begins inside the polygon the ray is already embedded: the hit is reported at
/// `start` itself with a normal of `-delta`.
///
/// # Examples
///
/// ```
/// # use swept_collide::polygon;
/// # use swept_collide::core::math::Vector2;
/// # use swept_collide::sweep::ray_hits_polygon;
/// let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];
/// let hit =
///     ray_hits_polygon(&triangle, Vector2::new(2.0, 4.0), Vector2::new(-1.0, -4.0)).unwrap();
/// assert!(hit.point.fuzzy_eq(Vector2::new(1.5, 2.0)));
/// // normal faces against the ray, scaled by the struck edge
/// assert!(hit.normal.fuzzy_eq(Vector2::new(4.0, 1.0)));
/// ```
pub fn ray_hits_polygon<T>(
    polygon: &Polygon<T>,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<RayHit<T>>
where
    T: Real,
{
    if polygon.contains(start) {
        return Some(RayHit::new(start, -delta));
    }

    let mut best_t = Real::max_value();
    let mut result = None;

    for (a, b) in polygon.iter_edges() {
        let edge = b - a;
        let denom = delta.perp_dot(edge);
        if denom.fuzzy_eq_zero() {
            // motion parallel to the edge (or zero length edge), no crossing to record
            continue;
        }

        // solve start + t * delta == a + u * edge for (t, u)
        let w = a - start;
        let t = w.perp_dot(edge) / denom;
        let u = w.perp_dot(delta) / denom;
        let in_range = t >= T::zero() && t <= T::one() && u >= T::zero() && u <= T::one();
        if !in_range || t >= best_t {
            continue;
        }

        best_t = t;
        // perp of the edge may face either way, flip it to push back against the motion
        let normal = edge.perp();
        result = Some(RayHit::new(
            start + delta.scale(t),
            if normal.dot(delta) > T::zero() {
                -normal
            } else {
                normal
            },
        ));
    }

    result
}

/// Same as [ray_hits_polygon] with the polygon positioned by `pose`.
///
/// The ray is brought into the polygon's local frame, tested there, and the resulting hit mapped
/// back to world space (the normal is rotated only, its length is preserved).
#[inline]
pub fn ray_hits_polygon_posed<T>(
    polygon: &Polygon<T>,
    pose: Pose<T>,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<RayHit<T>>
where
    T: Real,
{
    in_local_frame(pose, start, delta, |s, d| ray_hits_polygon(polygon, s, d))
}

/// Cast a ray from `start` along `delta` against `circle`, finding the first boundary hit.
///
/// The returned normal points radially outward from the circle center and has length equal to the
/// circle's radius. If `start` begins inside (or on) the circle the hit is reported at `start`
/// itself with a normal of `-delta`.
pub fn ray_hits_circle<T>(
    circle: &Circle<T>,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<RayHit<T>>
where
    T: Real,
{
    let rel = start - circle.center;
    if rel.length_squared() <= circle.radius * circle.radius {
        return Some(RayHit::new(start, -delta));
    }

    // sweeping a disk of the circle's radius from start until it touches the center finds the
    // same first crossing as the ray entering the circle
    circle_hits_point(circle.center, circle.radius, start, delta)
        .map(|hit| RayHit::new(hit.position, hit.position - circle.center))
}

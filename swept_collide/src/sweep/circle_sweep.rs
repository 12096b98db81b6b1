use super::sweep_types::SweepHit;
use crate::core::math::{dist_squared, min_max, quadratic_solutions, Vector2};
use crate::core::traits::Real;
use crate::shapes::{in_local_frame, Circle, Polygon, Pose};

/// Sweep a disk of `radius` centered at `start` along `delta`, stopping at the point `target`.
///
/// Returns the disk center position at the moment `target` first lies on the disk boundary, with
/// `impact` always the target point itself. If the disk already overlaps `target` at the start of
/// the sweep the hit is reported at `start` without any motion.
///
/// # Examples
///
/// ```
/// # use swept_collide::core::math::Vector2;
/// # use swept_collide::sweep::circle_hits_point;
/// let hit = circle_hits_point(
///     Vector2::new(1.0, 1.0),
///     2.0,
///     Vector2::new(-6.0, 1.0),
///     Vector2::new(10.0, 0.0),
/// )
/// .unwrap();
/// assert!(hit.position.fuzzy_eq(Vector2::new(-1.0, 1.0)));
/// assert!(hit.impact.fuzzy_eq(Vector2::new(1.0, 1.0)));
/// ```
pub fn circle_hits_point<T>(
    target: Vector2<T>,
    radius: T,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<SweepHit<T>>
where
    T: Real,
{
    let rel = start - target;
    let c = rel.length_squared() - radius * radius;
    if c <= T::zero() {
        // already overlapping the target
        return Some(SweepHit::new(start, target));
    }

    let a = delta.length_squared();
    if a.fuzzy_eq_zero() {
        return None;
    }

    // |start + t * delta - target| == radius, squared and expanded into a quadratic in t
    let b = T::two() * rel.dot(delta);
    let discr = b * b - T::four() * a * c;
    if discr < T::zero() {
        return None;
    }

    let (sol1, sol2) = quadratic_solutions(a, b, c, discr.sqrt());
    let (t0, _) = min_max(sol1, sol2);
    if t0 < T::zero() || t0 > T::one() {
        return None;
    }

    Some(SweepHit::new(start + delta.scale(t0), target))
}

/// Sweep a disk of `radius` centered at `start` along `delta`, stopping at the circle `target`.
///
/// Equivalent to sweeping against the target's center point with the two radii combined. The
/// impact point is placed on the line between the final disk center and the target center, on the
/// target circle's boundary (degenerating to the target center when both radii are zero).
pub fn circle_hits_circle<T>(
    target: &Circle<T>,
    radius: T,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<SweepHit<T>>
where
    T: Real,
{
    let combined = target.radius + radius;
    circle_hits_point(target.center, combined, start, delta).map(|hit| {
        let impact = if combined.fuzzy_eq_zero() {
            target.center
        } else {
            hit.position + (target.center - hit.position).scale(radius / combined)
        };
        SweepHit::new(hit.position, impact)
    })
}

/// Sweep a disk of `radius` centered at `start` along `delta`, stopping at the infinite line
/// through `p0` and `p1`.
///
/// If the disk already touches the line at the start of the sweep the hit is reported at `start`
/// without any motion, whichever way `delta` points, with `impact` the projection of `start` onto
/// the line. Beyond that only motion approaching the line from the side `start` is on produces a
/// hit, the disk stops with the line tangent to it.
///
/// `p0` and `p1` must be distinct points, this is not validated in release builds.
pub fn circle_hits_line<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    radius: T,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<SweepHit<T>>
where
    T: Real,
{
    debug_assert!(!p0.fuzzy_eq(p1), "line requires two distinct points");
    let n = (p1 - p0).unit_perp();
    // signed distance from the line to start
    let d0 = (start - p0).dot(n);
    if d0.abs() <= radius {
        return Some(SweepHit::new(start, start - n.scale(d0)));
    }

    let dd = delta.dot(n);
    if dd.fuzzy_eq_zero() {
        // moving parallel to the line and not already touching it
        return None;
    }

    // stop radius short of the line on the side start is on, receding motion solves to t < 0
    let target_d = if d0 > T::zero() { radius } else { -radius };
    let t = (target_d - d0) / dd;
    if t < T::zero() || t > T::one() {
        return None;
    }

    let position = start + delta.scale(t);
    Some(SweepHit::new(position, position - n.scale(target_d)))
}

/// Sweep a disk of `radius` centered at `start` along `delta`, stopping at the line segment from
/// `p0` to `p1`.
///
/// The sweep against the segment's supporting line is tried first. If that impact lands within
/// the segment span it is the result, otherwise the sweep is retried against the nearer segment
/// end point (a disk sliding past an end can still catch it on its rim). A miss against the
/// supporting line is always a miss against the segment. Degenerate segments collapse to a point
/// sweep.
pub fn circle_hits_segment<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    radius: T,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<SweepHit<T>>
where
    T: Real,
{
    let seg = p1 - p0;
    let seg_length2 = seg.length_squared();
    if seg_length2.fuzzy_eq_zero() {
        return circle_hits_point(p0, radius, start, delta);
    }

    let line_hit = circle_hits_line(p0, p1, radius, start, delta)?;
    let u = (line_hit.impact - p0).dot(seg) / seg_length2;
    if u >= T::zero() && u <= T::one() {
        return Some(line_hit);
    }

    // slid past an end of the segment, the nearer end point caps the sweep
    let cap = if u < T::zero() { p0 } else { p1 };
    circle_hits_point(cap, radius, start, delta)
}

/// Sweep a disk of `radius` centered at `start` along `delta`, stopping at the boundary of
/// `polygon`.
///
/// Every polygon edge is swept against as a segment and the hit nearest to `start` wins (ties go
/// to the edge earlier in vertex order). Corner contacts are caught by the segment end point
/// caps. If `start` is already inside the polygon the hit is reported at `start` with `impact`
/// also `start`.
///
/// # Examples
///
/// ```
/// # use swept_collide::polygon;
/// # use swept_collide::core::math::Vector2;
/// # use swept_collide::sweep::circle_hits_polygon;
/// let square = polygon![(1.0, 1.0), (0.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
/// let hit =
///     circle_hits_polygon(&square, 0.3, Vector2::new(-5.0, 0.0), Vector2::new(20.0, 0.0))
///         .unwrap();
/// assert!(hit.position.fuzzy_eq(Vector2::new(-1.3, 0.0)));
/// assert!(hit.impact.fuzzy_eq(Vector2::new(-1.0, 0.0)));
/// ```
pub fn circle_hits_polygon<T>(
    polygon: &Polygon<T>,
    radius: T,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<SweepHit<T>>
where
    T: Real,
{
    if polygon.contains(start) {
        return Some(SweepHit::new(start, start));
    }

    let mut best_dist = Real::max_value();
    let mut result = None;

    for (a, b) in polygon.iter_edges() {
        if let Some(hit) = circle_hits_segment(a, b, radius, start, delta) {
            let dist = dist_squared(hit.position, start);
            if dist < best_dist {
                best_dist = dist;
                result = Some(hit);
            }
        }
    }

    result
}

/// Same as [circle_hits_polygon] with the polygon positioned by `pose`.
///
/// The sweep is brought into the polygon's local frame, tested there, and the resulting hit
/// mapped back to world space (the radius is unchanged by the rigid transform).
#[inline]
pub fn circle_hits_polygon_posed<T>(
    polygon: &Polygon<T>,
    pose: Pose<T>,
    radius: T,
    start: Vector2<T>,
    delta: Vector2<T>,
) -> Option<SweepHit<T>>
where
    T: Real,
{
    in_local_frame(pose, start, delta, |s, d| {
        circle_hits_polygon(polygon, radius, s, d)
    })
}

use super::ray_sweep::ray_hits_polygon_posed;
use super::sweep_types::PolygonContact;
use crate::core::math::{dist_squared, Vector2};
use crate::core::traits::Real;
use crate::shapes::{Polygon, Pose};

/// Sweep the `moving` polygon along `delta`, stopping at first contact with the `stationary`
/// polygon.
///
/// Only the translation is swept: both poses keep their angles for the whole motion. Callers
/// animating a rotating polygon must step the rotation externally and sweep each step.
///
/// For convex or concave simple polygons the first contact is always a vertex of one polygon
/// meeting an edge of the other, so the sweep decomposes into ray casts: each moving vertex is
/// cast forward along `delta` against the stationary polygon, and each stationary vertex is cast
/// backward along `-delta` against the moving polygon. The contact requiring the least travel
/// wins, with ties going to the forward casts in vertex order.
///
/// The returned contact holds the moving pose's position at the moment of contact, the world
/// point where the polygons touch, and the normal of the struck surface facing against the
/// moving polygon's travel (not normalized). If the polygons already overlap vertex-in-polygon
/// at the start the contact is reported with no travel and a normal opposing `delta`.
///
/// # Examples
///
/// ```
/// # use swept_collide::polygon;
/// # use swept_collide::core::math::Vector2;
/// # use swept_collide::shapes::Pose;
/// # use swept_collide::sweep::polygons_collide;
/// let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];
/// let square = polygon![(1.0, 1.0), (0.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
/// let contact = polygons_collide(
///     &triangle,
///     Pose::new(Vector2::new(0.0, -5.0), std::f64::consts::FRAC_PI_2),
///     &square,
///     Pose::identity(),
///     Vector2::new(0.0, 10.0),
/// )
/// .unwrap();
/// assert!(contact.position.fuzzy_eq(Vector2::new(0.0, -3.0)));
/// assert!(contact.impact.fuzzy_eq(Vector2::new(0.0, -1.0)));
/// assert!(contact.normal.normalize().fuzzy_eq(Vector2::new(0.0, -1.0)));
/// ```
pub fn polygons_collide<T>(
    moving: &Polygon<T>,
    moving_pose: Pose<T>,
    stationary: &Polygon<T>,
    stationary_pose: Pose<T>,
    delta: Vector2<T>,
) -> Option<PolygonContact<T>>
where
    T: Real,
{
    let mut best_dist = Real::max_value();
    let mut result = None;

    // moving polygon vertexes cast forward against the stationary polygon
    for &v in moving.vertexes() {
        let w = moving_pose.to_world_point(v);
        if let Some(hit) = ray_hits_polygon_posed(stationary, stationary_pose, w, delta) {
            let dist = dist_squared(hit.point, w);
            if dist < best_dist {
                best_dist = dist;
                result = Some(PolygonContact::new(
                    moving_pose.position + (hit.point - w),
                    hit.point,
                    hit.normal,
                ));
            }
        }
    }

    // stationary polygon vertexes cast backward against the moving polygon, the roles of the
    // normal and of the travel flip with the direction
    for &v in stationary.vertexes() {
        let s = stationary_pose.to_world_point(v);
        if let Some(hit) = ray_hits_polygon_posed(moving, moving_pose, s, -delta) {
            let dist = dist_squared(hit.point, s);
            if dist < best_dist {
                best_dist = dist;
                result = Some(PolygonContact::new(
                    moving_pose.position + (s - hit.point),
                    s,
                    -hit.normal,
                ));
            }
        }
    }

    result
}

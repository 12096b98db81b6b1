use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Simple closed polygon represented as an ordered sequence of vertexes, the last vertex connects
/// back to the first.
///
/// The polygon must be simple (edges do not self-intersect) but may be concave, and consecutive
/// vertexes may be repeated or collinear. Vertex ordering may be clockwise or counter clockwise.
/// A polygon is never mutated by any operation in this crate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Polygon<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "vertexes"))]
    vertex_data: Vec<Vector2<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new polygon from the `vertexes` given.
    ///
    /// At least 3 vertexes are required, this is not validated in release builds.
    #[inline]
    pub fn new(vertexes: Vec<Vector2<T>>) -> Self {
        debug_assert!(vertexes.len() >= 3, "polygon requires at least 3 vertexes");
        Polygon {
            vertex_data: vertexes,
        }
    }

    /// Vertex count of the polygon.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    /// All the vertexes of the polygon as a slice.
    #[inline]
    pub fn vertexes(&self) -> &[Vector2<T>] {
        &self.vertex_data
    }

    /// Iterate over all the edges of the polygon as `(start, end)` vertex pairs.
    ///
    /// The closing edge going from the last vertex back to the first is included.
    pub fn iter_edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let count = self.vertex_data.len();
        (0..count).map(move |i| {
            (
                self.vertex_data[i],
                self.vertex_data[if i + 1 == count { 0 } else { i + 1 }],
            )
        })
    }

    /// Test if `point` is inside the polygon using a crossing number test.
    ///
    /// Works for concave polygons and polygons with repeated or collinear vertexes. The test uses
    /// half-open crossing rules so points exactly on a boundary classify deterministically (which
    /// side depends on the boundary position, callers must not rely on either result for exact
    /// boundary points).
    ///
    /// # Examples
    ///
    /// ```
    /// # use swept_collide::polygon;
    /// # use swept_collide::core::math::Vector2;
    /// let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];
    /// assert!(triangle.contains(Vector2::new(0.0, 0.0)));
    /// assert!(!triangle.contains(Vector2::new(2.0, 4.0)));
    /// ```
    pub fn contains(&self, point: Vector2<T>) -> bool {
        let mut inside = false;
        for (a, b) in self.iter_edges() {
            // half-open rule: count the edge only when exactly one endpoint is strictly above the
            // point, then only when the crossing is strictly to the right of the point
            if (a.y > point.y) != (b.y > point.y) {
                let crossing_x = a.x + (b.x - a.x) * (point.y - a.y) / (b.y - a.y);
                if point.x < crossing_x {
                    inside = !inside;
                }
            }
        }

        inside
    }

    /// Test if `point` is inside the polygon, requiring the polygon to be convex.
    ///
    /// Faster than [Polygon::contains] but the polygon must be convex with consistently ordered
    /// vertexes (behavior is unspecified otherwise, this is not validated). Points on the boundary
    /// are counted as inside.
    ///
    /// # Examples
    ///
    /// ```
    /// # use swept_collide::polygon;
    /// # use swept_collide::core::math::Vector2;
    /// let square = polygon![(1.0, 1.0), (0.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
    /// assert!(square.convex_contains(Vector2::new(0.0, 0.0)));
    /// assert!(!square.convex_contains(Vector2::new(-5.0, 1.0)));
    /// ```
    pub fn convex_contains(&self, point: Vector2<T>) -> bool {
        // point is inside iff it is on the same side of every edge's supporting line, ties at
        // zero count as inside (works for either winding direction)
        let mut any_left = false;
        let mut any_right = false;
        for (a, b) in self.iter_edges() {
            let side = (b - a).perp_dot(point - a);
            if side > T::zero() {
                any_left = true;
            } else if side < T::zero() {
                any_right = true;
            }

            if any_left && any_right {
                return false;
            }
        }

        true
    }
}

impl<T> Index<usize> for Polygon<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

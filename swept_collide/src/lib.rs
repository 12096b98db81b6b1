//! 2D continuous (swept) collision detection for polygons, circles, rays, and moving disks.
//!
//! Shapes are swept along a translation and each query reports the first contact: where the
//! moving shape stops, the point struck, and (for ray and polygon queries) the normal of the
//! surface struck. Posed variants test against a polygon positioned by a rigid transform
//! without mutating its vertexes.
//!
//! All queries are generic over the float type (`f64` or `f32`) and return `Option`, `None`
//! meaning no contact within the translation.
//!
//! # Examples
//!
//! ```
//! use swept_collide::core::math::Vector2;
//! use swept_collide::polygon;
//! use swept_collide::sweep::{circle_hits_polygon, ray_hits_polygon};
//!
//! let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];
//!
//! // point containment
//! assert!(triangle.contains(Vector2::new(0.0, 0.0)));
//!
//! // finite ray cast against the polygon boundary
//! let hit =
//!     ray_hits_polygon(&triangle, Vector2::new(2.0, 4.0), Vector2::new(-1.0, -4.0)).unwrap();
//! assert!(hit.point.fuzzy_eq(Vector2::new(1.5, 2.0)));
//!
//! // disk of radius 2 swept down and left until it touches the triangle
//! let hit = circle_hits_polygon(
//!     &triangle,
//!     2.0,
//!     Vector2::new(5.4402850002906638, 7.4850712500726662),
//!     Vector2::new(-4.0, -10.0),
//! )
//! .unwrap();
//! assert!(hit.impact.fuzzy_eq(Vector2::new(1.5, 2.0)));
//! ```

#[macro_use]
mod macros;

pub mod core;
pub mod shapes;
pub mod sweep;

pub use crate::shapes::{in_local_frame, Circle, Polygon, Pose, ToWorld};
pub use crate::sweep::{
    circle_hits_circle, circle_hits_line, circle_hits_point, circle_hits_polygon,
    circle_hits_polygon_posed, circle_hits_segment, polygons_collide, ray_hits_circle,
    ray_hits_polygon, ray_hits_polygon_posed, PolygonContact, RayHit, SweepHit,
};

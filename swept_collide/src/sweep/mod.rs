//! Swept collision queries: ray casts, disks swept along a translation, and moving polygons.
mod circle_sweep;
mod polygon_sweep;
mod ray_sweep;
mod sweep_types;

pub use circle_sweep::{
    circle_hits_circle, circle_hits_line, circle_hits_point, circle_hits_polygon,
    circle_hits_polygon_posed, circle_hits_segment,
};
pub use polygon_sweep::polygons_collide;
pub use ray_sweep::{ray_hits_circle, ray_hits_polygon, ray_hits_polygon_posed};
pub use sweep_types::{PolygonContact, RayHit, SweepHit};

//! Shape types used by the sweep queries: polygons, circles, and poses.
mod circle;
mod polygon;
mod pose;

pub use circle::Circle;
pub use polygon::Polygon;
pub use pose::{in_local_frame, Pose, ToWorld};

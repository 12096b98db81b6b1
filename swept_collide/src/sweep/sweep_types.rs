use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::shapes::{Pose, ToWorld};

/// Represents the first contact of a ray cast against a shape.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<T = f64> {
    /// Point at which the ray first strikes the shape.
    pub point: Vector2<T>,
    /// Normal of the surface struck, pointing against the ray direction. Not normalized (its
    /// length carries no meaning).
    pub normal: Vector2<T>,
}

impl<T> RayHit<T> {
    #[inline]
    pub fn new(point: Vector2<T>, normal: Vector2<T>) -> Self {
        Self { point, normal }
    }
}

impl<T> ToWorld<T> for RayHit<T>
where
    T: Real,
{
    #[inline]
    fn to_world(self, pose: Pose<T>) -> Self {
        Self {
            point: pose.to_world_point(self.point),
            normal: pose.to_world_vector(self.normal),
        }
    }
}

/// Represents the first contact of a disk swept along a translation.
#[derive(Debug, Clone, Copy)]
pub struct SweepHit<T = f64> {
    /// Center of the disk at the moment of first contact.
    pub position: Vector2<T>,
    /// Point on the stationary shape where the contact occurs.
    pub impact: Vector2<T>,
}

impl<T> SweepHit<T> {
    #[inline]
    pub fn new(position: Vector2<T>, impact: Vector2<T>) -> Self {
        Self { position, impact }
    }
}

impl<T> ToWorld<T> for SweepHit<T>
where
    T: Real,
{
    #[inline]
    fn to_world(self, pose: Pose<T>) -> Self {
        Self {
            position: pose.to_world_point(self.position),
            impact: pose.to_world_point(self.impact),
        }
    }
}

/// Represents the first contact between a moving polygon and a stationary one.
#[derive(Debug, Clone, Copy)]
pub struct PolygonContact<T = f64> {
    /// Position for the moving polygon's pose at the moment of first contact (its angle is
    /// unchanged by the sweep).
    pub position: Vector2<T>,
    /// World point at which the two polygons first touch.
    pub impact: Vector2<T>,
    /// Normal of the surface struck at the impact point, pointing against the motion of the
    /// moving polygon. Not normalized.
    pub normal: Vector2<T>,
}

impl<T> PolygonContact<T> {
    #[inline]
    pub fn new(position: Vector2<T>, impact: Vector2<T>, normal: Vector2<T>) -> Self {
        Self {
            position,
            impact,
            normal,
        }
    }
}

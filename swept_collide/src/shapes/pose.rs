use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rigid transform placing a shape in world space: rotate about the origin by `angle` (radians,
/// counter clockwise), then translate by `position`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose<T = f64> {
    pub position: Vector2<T>,
    pub angle: T,
}

impl<T> Pose<T>
where
    T: Real,
{
    /// Create a new pose with `position` and `angle` given.
    #[inline]
    pub fn new(position: Vector2<T>, angle: T) -> Self {
        Pose { position, angle }
    }

    /// The identity pose (zero position, zero angle).
    #[inline]
    pub fn identity() -> Self {
        Pose::new(Vector2::zero(), T::zero())
    }

    /// Map a point from the shape's local frame to world space.
    #[inline]
    pub fn to_world_point(&self, point: Vector2<T>) -> Vector2<T> {
        point.rotate(self.angle) + self.position
    }

    /// Map a point from world space into the shape's local frame.
    #[inline]
    pub fn to_local_point(&self, point: Vector2<T>) -> Vector2<T> {
        (point - self.position).rotate(-self.angle)
    }

    /// Map a direction vector from the shape's local frame to world space (rotation only).
    #[inline]
    pub fn to_world_vector(&self, vector: Vector2<T>) -> Vector2<T> {
        vector.rotate(self.angle)
    }

    /// Map a direction vector from world space into the shape's local frame (rotation only).
    #[inline]
    pub fn to_local_vector(&self, vector: Vector2<T>) -> Vector2<T> {
        vector.rotate(-self.angle)
    }
}

/// Trait for hit results that can be mapped from a shape's local frame back to world space.
pub trait ToWorld<T>
where
    T: Real,
{
    /// Map all the fields of the result from the local frame of `pose` to world space.
    fn to_world(self, pose: Pose<T>) -> Self;
}

/// Run a collision `test` in the local frame of `pose`.
///
/// `start` and `delta` are brought into the local frame of the posed shape, `test` runs on the
/// local values, and a resulting hit is mapped back to world space. Every posed query in this
/// crate reduces to its unposed form through this function.
#[inline]
pub fn in_local_frame<T, R, F>(
    pose: Pose<T>,
    start: Vector2<T>,
    delta: Vector2<T>,
    test: F,
) -> Option<R>
where
    T: Real,
    R: ToWorld<T>,
    F: FnOnce(Vector2<T>, Vector2<T>) -> Option<R>,
{
    let local_start = pose.to_local_point(start);
    let local_delta = pose.to_local_vector(delta);
    test(local_start, local_delta).map(|result| result.to_world(pose))
}

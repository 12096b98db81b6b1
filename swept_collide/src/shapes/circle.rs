use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circle defined by a center point and non-negative radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T = f64> {
    pub center: Vector2<T>,
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    /// Create a new circle with `center` and `radius` given.
    #[inline]
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "radius must be non-negative");
        Circle { center, radius }
    }
}

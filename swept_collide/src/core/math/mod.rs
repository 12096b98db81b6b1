//! Core/common math functions for working with 2D vectors and scalar values.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::Vector2;

//! Core module has common/shared math, traits, and utility modules.
pub mod math;
pub mod traits;

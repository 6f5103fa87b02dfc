//! Core types and constants

pub mod scalar;
pub mod vectors;

pub use scalar::*;
pub use vectors::{Vec2, Vec3, Vec4, VecN};

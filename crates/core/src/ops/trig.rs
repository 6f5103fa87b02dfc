//! Lane-wise trigonometry
//!
//! `sin` and `cos` only exist for three lanes (per-axis rotation angles).
//! Angle conversions work for any arity.

use crate::core_types::{Vec3, VecN, DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};

/// Lane-wise sine, angles in radians.
#[inline]
pub fn sin(v: Vec3) -> Vec3 {
    v.map(f32::sin)
}

/// Lane-wise cosine, angles in radians.
#[inline]
pub fn cos(v: Vec3) -> Vec3 {
    v.map(f32::cos)
}

/// Convert every lane from degrees to radians.
#[inline]
pub fn degrees_to_radians<const D: usize>(v: VecN<D>) -> VecN<D> {
    v * RADIANS_PER_DEGREE
}

/// Convert every lane from radians to degrees.
#[inline]
pub fn radians_to_degrees<const D: usize>(v: VecN<D>) -> VecN<D> {
    v * DEGREES_PER_RADIAN
}

//! Fixed-arity vector type aliases.

use nalgebra::{SVector, Vector2, Vector3, Vector4};

/// Const-generic `f32` vector with `D` lanes.
///
/// Arity-generic operations are written against this alias so that each one
/// exists once for `Vec2`, `Vec3` and `Vec4`.
pub type VecN<const D: usize> = SVector<f32, D>;

/// 2-lane vector for points, sizes and texture coordinates.
pub type Vec2 = Vector2<f32>;

/// 3-lane vector for positions, directions and per-axis angles.
pub type Vec3 = Vector3<f32>;

/// 4-lane vector (homogeneous coordinates, colours, axis-angle).
pub type Vec4 = Vector4<f32>;

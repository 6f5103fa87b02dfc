//! `#[repr(C)]` vectors passed by value across the C ABI. They are `Pod`, so
//! packed float buffers can be viewed as slices of them.

use bytemuck::{Pod, Zeroable};
use vector_math_core::{Vec2, Vec3, Vec4};

/// C-compatible 2-lane vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct FfiVec2 {
    pub x: f32,
    pub y: f32,
}

/// C-compatible 3-lane vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct FfiVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// C-compatible 4-lane vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct FfiVec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl From<FfiVec2> for Vec2 {
    fn from(v: FfiVec2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for FfiVec2 {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<FfiVec3> for Vec3 {
    fn from(v: FfiVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for FfiVec3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<FfiVec4> for Vec4 {
    fn from(v: FfiVec4) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4> for FfiVec4 {
    fn from(v: Vec4) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: v.w,
        }
    }
}

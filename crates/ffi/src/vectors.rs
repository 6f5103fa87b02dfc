//! By-value vector operations.
//!
//! None of these can fail, so they return their result directly instead of
//! an error code.

use vector_math_core::{
    any_lane_negative, ceil_to_int, cos, equal, floor_to_int, is_finite, make_finite,
    nearly_equal, round_to_nearest_int, sin,
};

use crate::types::{FfiVec2, FfiVec3, FfiVec4};

// ============================================================================
// 2 LANES
// ============================================================================

/// Exact lane-wise equality. `false` if any compared lane is NaN.
#[no_mangle]
pub extern "C" fn vector_math_vec2_equal(a: FfiVec2, b: FfiVec2) -> bool {
    equal(a.into(), b.into())
}

/// `true` if every lane differs by less than `FLT_EPSILON`.
#[no_mangle]
pub extern "C" fn vector_math_vec2_nearly_equal(a: FfiVec2, b: FfiVec2) -> bool {
    nearly_equal(a.into(), b.into())
}

/// Round each lane to the nearest integer, ties to even.
#[no_mangle]
pub extern "C" fn vector_math_vec2_round(v: FfiVec2) -> FfiVec2 {
    round_to_nearest_int(v.into()).into()
}

/// Lane-wise ceiling.
#[no_mangle]
pub extern "C" fn vector_math_vec2_ceil(v: FfiVec2) -> FfiVec2 {
    ceil_to_int(v.into()).into()
}

/// Lane-wise floor.
#[no_mangle]
pub extern "C" fn vector_math_vec2_floor(v: FfiVec2) -> FfiVec2 {
    floor_to_int(v.into()).into()
}

/// `true` if at least one lane is strictly negative.
#[no_mangle]
pub extern "C" fn vector_math_vec2_any_negative(v: FfiVec2) -> bool {
    any_lane_negative(v.into())
}

/// Replace NaN with 0 and infinities with `±FLT_MAX`.
#[no_mangle]
pub extern "C" fn vector_math_vec2_make_finite(v: FfiVec2) -> FfiVec2 {
    make_finite(v.into()).into()
}

/// `true` if every lane is finite.
#[no_mangle]
pub extern "C" fn vector_math_vec2_is_finite(v: FfiVec2) -> bool {
    is_finite(v.into())
}

// ============================================================================
// 3 LANES
// ============================================================================

/// Exact lane-wise equality. `false` if any compared lane is NaN.
#[no_mangle]
pub extern "C" fn vector_math_vec3_equal(a: FfiVec3, b: FfiVec3) -> bool {
    equal(a.into(), b.into())
}

/// `true` if every lane differs by less than `FLT_EPSILON`.
#[no_mangle]
pub extern "C" fn vector_math_vec3_nearly_equal(a: FfiVec3, b: FfiVec3) -> bool {
    nearly_equal(a.into(), b.into())
}

/// Round each lane to the nearest integer, ties to even.
#[no_mangle]
pub extern "C" fn vector_math_vec3_round(v: FfiVec3) -> FfiVec3 {
    round_to_nearest_int(v.into()).into()
}

/// Lane-wise ceiling.
#[no_mangle]
pub extern "C" fn vector_math_vec3_ceil(v: FfiVec3) -> FfiVec3 {
    ceil_to_int(v.into()).into()
}

/// Lane-wise floor.
#[no_mangle]
pub extern "C" fn vector_math_vec3_floor(v: FfiVec3) -> FfiVec3 {
    floor_to_int(v.into()).into()
}

/// Lane-wise sine, radians.
#[no_mangle]
pub extern "C" fn vector_math_vec3_sin(v: FfiVec3) -> FfiVec3 {
    sin(v.into()).into()
}

/// Lane-wise cosine, radians.
#[no_mangle]
pub extern "C" fn vector_math_vec3_cos(v: FfiVec3) -> FfiVec3 {
    cos(v.into()).into()
}

/// Replace NaN with 0 and infinities with `±FLT_MAX`.
#[no_mangle]
pub extern "C" fn vector_math_vec3_make_finite(v: FfiVec3) -> FfiVec3 {
    make_finite(v.into()).into()
}

/// `true` if every lane is finite.
#[no_mangle]
pub extern "C" fn vector_math_vec3_is_finite(v: FfiVec3) -> bool {
    is_finite(v.into())
}

// ============================================================================
// 4 LANES
// ============================================================================

/// Exact lane-wise equality. `false` if any compared lane is NaN.
#[no_mangle]
pub extern "C" fn vector_math_vec4_equal(a: FfiVec4, b: FfiVec4) -> bool {
    equal(a.into(), b.into())
}

/// `true` if every lane differs by less than `FLT_EPSILON`.
#[no_mangle]
pub extern "C" fn vector_math_vec4_nearly_equal(a: FfiVec4, b: FfiVec4) -> bool {
    nearly_equal(a.into(), b.into())
}

/// Round each lane to the nearest integer, ties to even.
#[no_mangle]
pub extern "C" fn vector_math_vec4_round(v: FfiVec4) -> FfiVec4 {
    round_to_nearest_int(v.into()).into()
}

/// Lane-wise ceiling.
#[no_mangle]
pub extern "C" fn vector_math_vec4_ceil(v: FfiVec4) -> FfiVec4 {
    ceil_to_int(v.into()).into()
}

/// Lane-wise floor.
#[no_mangle]
pub extern "C" fn vector_math_vec4_floor(v: FfiVec4) -> FfiVec4 {
    floor_to_int(v.into()).into()
}

/// Replace NaN with 0 and infinities with `±FLT_MAX`.
#[no_mangle]
pub extern "C" fn vector_math_vec4_make_finite(v: FfiVec4) -> FfiVec4 {
    make_finite(v.into()).into()
}

/// `true` if every lane is finite.
#[no_mangle]
pub extern "C" fn vector_math_vec4_is_finite(v: FfiVec4) -> bool {
    is_finite(v.into())
}

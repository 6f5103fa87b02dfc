//! Scalar constants and single-lane helpers
//!
//! All vector operations in this crate work on `f32` lanes. The constants here
//! are shared by the lane-wise operations and by callers that need the same
//! angle conversions or tolerance.
//!
//! # Usage
//! ```
//! use vector_math_core::core_types::scalar::{make_finite, EPSILON, HALF_PI};
//!
//! assert!((HALF_PI.sin() - 1.0).abs() < EPSILON);
//! assert_eq!(make_finite(f32::NAN), 0.0);
//! assert_eq!(make_finite(f32::NEG_INFINITY), -f32::MAX);
//! ```

use std::f32::consts;

// ============================================================================
// TOLERANCE
// ============================================================================

/// Single-precision machine epsilon (1.1920929e-7).
///
/// This is the fixed tolerance used by near-equality. It is never a caller
/// supplied parameter.
pub const EPSILON: f32 = f32::EPSILON;

// ============================================================================
// ANGLES
// ============================================================================

/// π
pub const PI: f32 = consts::PI;

/// π / 2
pub const HALF_PI: f32 = consts::FRAC_PI_2;

/// π / 4
pub const QUARTER_PI: f32 = consts::FRAC_PI_4;

/// 2π
pub const TWO_PI: f32 = consts::TAU;

/// Multiply radians by this to get degrees.
pub const DEGREES_PER_RADIAN: f32 = 180.0 / PI;

/// Multiply degrees by this to get radians.
pub const RADIANS_PER_DEGREE: f32 = PI / 180.0;

// ============================================================================
// FINITE CONVERSION
// ============================================================================

/// Replace a non-finite value with the nearest finite one.
///
/// - NaN becomes `0.0`
/// - `+inf` becomes `f32::MAX`
/// - `-inf` becomes `-f32::MAX`
///
/// Finite values (including `-0.0` and subnormals) are returned unchanged.
#[inline]
#[must_use]
pub fn make_finite(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            -f32::MAX
        } else {
            f32::MAX
        }
    } else {
        value
    }
}

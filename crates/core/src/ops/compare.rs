//! Lane-wise comparison helpers
//!
//! `equal` and `nearly_equal` reduce a lane-wise comparison with "all lanes";
//! `any_lane_negative` reduces with "any lane". NaN lanes follow IEEE-754
//! unordered comparison, so they never compare equal and are never negative.

use crate::core_types::{Vec2, VecN, EPSILON};

/// Approximate equality with the fixed single-precision epsilon.
///
/// Two values are nearly equal when the absolute difference of every lane is
/// strictly less than [`EPSILON`].
pub trait NearlyEq {
    /// Returns `true` if `self` and `other` are within [`EPSILON`] lane-wise.
    fn nearly_eq(&self, other: &Self) -> bool;
}

impl NearlyEq for f32 {
    #[inline]
    fn nearly_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl<const D: usize> NearlyEq for VecN<D> {
    #[inline]
    fn nearly_eq(&self, other: &Self) -> bool {
        (self - other).abs().iter().all(|diff| *diff < EPSILON)
    }
}

/// Returns `true` iff every corresponding lane of `a` and `b` is equal.
///
/// Uses IEEE `==` per lane: `0.0` equals `-0.0`, and any NaN lane makes the
/// result `false`.
#[inline]
pub fn equal<const D: usize>(a: VecN<D>, b: VecN<D>) -> bool {
    a.iter().zip(b.iter()).all(|(lhs, rhs)| lhs == rhs)
}

/// Returns `true` iff every lane of `|a - b|` is strictly below [`EPSILON`].
#[inline]
pub fn nearly_equal<const D: usize>(a: VecN<D>, b: VecN<D>) -> bool {
    a.nearly_eq(&b)
}

/// Returns `true` if at least one lane is strictly less than zero.
///
/// Only defined for two lanes. `-0.0` is not negative.
#[inline]
pub fn any_lane_negative(v: Vec2) -> bool {
    v.iter().any(|lane| *lane < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Vec3, Vec4};

    #[test]
    fn test_equal_is_exact() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(equal(a, a));
        assert!(!equal(a, Vec4::new(1.0, 2.0, 3.0, 4.0 + 4.0 * EPSILON)));
        assert!(equal(Vec2::new(0.0, 1.0), Vec2::new(-0.0, 1.0)));
    }

    #[test]
    fn test_equal_with_nan_lane_is_false() {
        let a = Vec3::new(1.0, f32::NAN, 3.0);
        assert!(!equal(a, a));
        assert!(!equal(Vec2::new(f32::NAN, f32::NAN), Vec2::new(f32::NAN, f32::NAN)));
    }

    #[test]
    fn test_equal_with_infinity() {
        let a = Vec2::new(f32::INFINITY, f32::NEG_INFINITY);
        assert!(equal(a, a));
        assert!(!equal(a, Vec2::new(f32::INFINITY, f32::INFINITY)));
    }

    #[test]
    fn test_nearly_equal_below_epsilon() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(EPSILON * 0.5, -EPSILON * 0.5);
        assert!(nearly_equal(a, b));
        assert!(nearly_equal(b, a));
    }

    #[test]
    fn test_nearly_equal_at_epsilon_is_false() {
        let a = Vec4::new(0.0, 1.0, 2.0, 3.0);
        let b = Vec4::new(EPSILON, 1.0, 2.0, 3.0);
        assert!(!nearly_equal(a, b));

        let c = Vec2::new(1.0, 0.0);
        let d = Vec2::new(1.0 + EPSILON, 0.0);
        assert!(!nearly_equal(c, d));
    }

    #[test]
    fn test_nearly_equal_nan_is_false() {
        let a = Vec3::new(0.0, f32::NAN, 0.0);
        assert!(!nearly_equal(a, a));
    }

    #[test]
    fn test_scalar_nearly_eq() {
        assert!(1.0_f32.nearly_eq(&1.0));
        assert!(0.0_f32.nearly_eq(&(EPSILON * 0.25)));
        assert!(!0.0_f32.nearly_eq(&EPSILON));
        assert!(!f32::NAN.nearly_eq(&f32::NAN));
    }

    #[test]
    fn test_any_lane_negative() {
        assert!(!any_lane_negative(Vec2::new(0.0, 0.0)));
        assert!(any_lane_negative(Vec2::new(-0.1, 0.0)));
        assert!(any_lane_negative(Vec2::new(5.0, -f32::MIN_POSITIVE)));
        assert!(any_lane_negative(Vec2::new(f32::NEG_INFINITY, 1.0)));
    }

    #[test]
    fn test_any_lane_negative_ignores_negative_zero_and_nan() {
        assert!(!any_lane_negative(Vec2::new(-0.0, -0.0)));
        assert!(!any_lane_negative(Vec2::new(f32::NAN, 1.0)));
    }
}

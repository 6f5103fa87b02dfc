//! Lane-wise rounding to integral values

use crate::core_types::VecN;

/// Round every lane to the nearest integral value, ties to even.
///
/// Matches IEEE-754 `roundToIntegralTiesToEven` (C `rint` in the default
/// rounding mode): `2.5 -> 2.0`, `-2.5 -> -2.0`, `3.5 -> 4.0`. NaN and
/// infinities pass through unchanged and the sign of zero is preserved.
#[inline]
pub fn round_to_nearest_int<const D: usize>(v: VecN<D>) -> VecN<D> {
    v.map(f32::round_ties_even)
}

/// Round every lane towards positive infinity.
#[inline]
pub fn ceil_to_int<const D: usize>(v: VecN<D>) -> VecN<D> {
    v.map(f32::ceil)
}

/// Round every lane towards negative infinity.
#[inline]
pub fn floor_to_int<const D: usize>(v: VecN<D>) -> VecN<D> {
    v.map(f32::floor)
}

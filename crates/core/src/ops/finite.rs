//! Floating-point validation and finite conversion

use tracing::trace;

use crate::core_types::{scalar, VecN};

/// Returns `true` if any lane is NaN.
#[inline]
pub fn has_nan<const D: usize>(v: VecN<D>) -> bool {
    v.iter().any(|lane| lane.is_nan())
}

/// Returns `true` if every lane is finite (neither NaN nor infinite).
#[inline]
pub fn is_finite<const D: usize>(v: VecN<D>) -> bool {
    v.iter().all(|lane| lane.is_finite())
}

/// Returns `true` if any lane is positive or negative infinity.
#[inline]
pub fn is_infinite<const D: usize>(v: VecN<D>) -> bool {
    v.iter().any(|lane| lane.is_infinite())
}

/// Replace every non-finite lane with its nearest finite value.
///
/// See [`scalar::make_finite`] for the per-lane mapping.
pub fn make_finite<const D: usize>(v: VecN<D>) -> VecN<D> {
    if is_finite(v) {
        return v;
    }
    trace!(lanes = D, "replacing non-finite lanes with finite values");
    v.map(scalar::make_finite)
}

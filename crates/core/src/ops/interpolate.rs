//! Linear interpolation

use crate::core_types::VecN;

/// Build a linear interpolator between `from` and `to`.
///
/// The returned closure maps `t` to `from + (to - from) * t`. The difference is
/// computed once, so the closure is cheap to call in an animation loop. `t` is
/// not clamped; values outside `[0, 1]` extrapolate.
///
/// ```
/// use vector_math_core::{lerp, Vec2};
///
/// let along = lerp(Vec2::new(0.0, 10.0), Vec2::new(10.0, 20.0));
/// assert_eq!(along(0.5), Vec2::new(5.0, 15.0));
/// ```
pub fn lerp<const D: usize>(from: VecN<D>, to: VecN<D>) -> impl Fn(f32) -> VecN<D> {
    let delta = to - from;
    move |t| from + delta * t
}

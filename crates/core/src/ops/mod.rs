//! Lane-wise vector operations
//!
//! Every function here is pure and total: it never panics and never fails.
//! NaN and infinity propagate according to IEEE-754.

pub mod compare;
pub mod finite;
pub mod interpolate;
pub mod rounding;
pub mod trig;

pub use compare::{any_lane_negative, equal, nearly_equal, NearlyEq};
pub use finite::{has_nan, is_finite, is_infinite, make_finite};
pub use interpolate::lerp;
pub use rounding::{ceil_to_int, floor_to_int, round_to_nearest_int};
pub use trig::{cos, degrees_to_radians, radians_to_degrees, sin};

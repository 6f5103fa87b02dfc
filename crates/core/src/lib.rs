//! Vector Math Core Library
//!
//! Convenience operations over fixed-size 2, 3 and 4 lane `f32` vectors:
//! exact and approximate equality, round-half-to-even, sign checks,
//! trigonometry, finite conversion and interpolation.
//!
//! Vectors are plain `nalgebra` fixed-size vectors, so all of nalgebra's
//! arithmetic is available on them. This crate only composes nalgebra's
//! lane-wise primitives into named operations.
//!
//! ```
//! use vector_math_core::{nearly_equal, round_to_nearest_int, Vec2, EPSILON};
//!
//! let v = Vec2::new(2.5, -2.5);
//! assert_eq!(round_to_nearest_int(v), Vec2::new(2.0, -2.0));
//! assert!(nearly_equal(v, v + Vec2::new(EPSILON / 2.0, 0.0)));
//! ```

// Core types and constants
pub mod core_types;

// Lane-wise operations
pub mod ops;

// Re-export core types
pub use core_types::{Vec2, Vec3, Vec4, VecN};
pub use core_types::{
    DEGREES_PER_RADIAN, EPSILON, HALF_PI, PI, QUARTER_PI, RADIANS_PER_DEGREE, TWO_PI,
};

// Re-export operations
pub use ops::{any_lane_negative, equal, nearly_equal, round_to_nearest_int, NearlyEq};
pub use ops::{ceil_to_int, floor_to_int};
pub use ops::{cos, degrees_to_radians, radians_to_degrees, sin};
pub use ops::{has_nan, is_finite, is_infinite, lerp, make_finite};

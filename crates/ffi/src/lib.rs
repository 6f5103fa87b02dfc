//! C ABI for the vector math utilities.
//!
//! Vectors cross the boundary by value as `#[repr(C)]` structs of floats
//! (`FfiVec2`, `FfiVec3`, `FfiVec4`). By-value functions cannot fail. The
//! `*_buffer*` functions work in place on packed float arrays and report
//! failures through `VectorMathErrorCode` plus a thread-local last error.
//!
//! The C header `VectorMathFFI.h` is generated by `build.rs`.

mod buffers;
mod error;
mod helpers;
mod types;
mod vectors;

pub use buffers::*;
pub use error::{vector_math_get_last_error, vector_math_get_last_error_code, VectorMathErrorCode};
pub use types::{FfiVec2, FfiVec3, FfiVec4};
pub use vectors::*;

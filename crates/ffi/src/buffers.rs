//! In-place operations over flat `float` buffers.
//!
//! Bindings usually hold vectors as a packed array of floats. These entry
//! points view such a buffer as a slice of `FfiVec*` (checked by `bytemuck`)
//! and rewrite it in place. On error nothing is written and the thread-local
//! last error is set; on success it is cleared.

use bytemuck::Pod;
use vector_math_core::core_types::scalar;
use vector_math_core::{cos, round_to_nearest_int, sin, Vec2, Vec3, Vec4};

use crate::error::{DefaultVectorMathError, VectorMathErrorCode};
use crate::helpers::handle_ffi_result_error;
use crate::types::{FfiVec2, FfiVec3, FfiVec4};

/// Borrow `len` floats at `data` as a mutable slice.
///
/// A null pointer is accepted for an empty buffer.
///
/// # Safety
/// `data` must be null with `len == 0`, or valid for reads and writes of
/// `len` consecutive `f32` values that nothing else accesses for `'a`.
unsafe fn floats_from_raw<'a>(
    data: *mut f32,
    len: usize,
) -> Result<&'a mut [f32], DefaultVectorMathError> {
    if len == 0 {
        return Ok(&mut []);
    }
    if data.is_null() {
        return Err(DefaultVectorMathError::null_pointer("data"));
    }
    // SAFETY: non-null and the caller guarantees `len` valid, exclusive floats.
    Ok(unsafe { std::slice::from_raw_parts_mut(data, len) })
}

/// Apply `op` to each `arity`-lane vector packed in `floats`.
fn map_packed<V, T>(floats: &mut [f32], op: impl Fn(T) -> T) -> Result<(), DefaultVectorMathError>
where
    V: Pod + From<T>,
    T: From<V>,
{
    let arity = std::mem::size_of::<V>() / std::mem::size_of::<f32>();
    let len = floats.len();
    let vectors: &mut [V] = bytemuck::try_cast_slice_mut(floats)
        .map_err(|_| DefaultVectorMathError::buffer_length(len, arity))?;
    for v in vectors.iter_mut() {
        *v = V::from(op(T::from(*v)));
    }
    Ok(())
}

/// Round every vector in a packed buffer to the nearest integers, ties to even.
///
/// # Parameters
/// - `data`: Packed lanes, `arity` floats per vector
/// - `len`: Buffer length in floats (must be a multiple of `arity`)
/// - `arity`: Lanes per vector (2, 3 or 4)
///
/// # Returns
/// - `VectorMathErrorCode::Ok` (0) on success
/// - `VectorMathErrorCode::NullPointer` (1) if `data` is null and `len > 0`
/// - `VectorMathErrorCode::InvalidParameter` (2) if `arity` is unsupported or
///   `len` is not a multiple of it
///
/// # Safety
/// `data` must be null with `len == 0`, or point to `len` writable floats.
#[no_mangle]
pub unsafe extern "C" fn vector_math_round_buffer(
    data: *mut f32,
    len: usize,
    arity: u8,
) -> VectorMathErrorCode {
    handle_ffi_result_error(|| {
        if !(2..=4).contains(&arity) {
            return Err(DefaultVectorMathError::unsupported_arity(arity));
        }
        // SAFETY: forwarded from this function's contract.
        let floats = unsafe { floats_from_raw(data, len)? };
        match arity {
            2 => map_packed::<FfiVec2, Vec2>(floats, round_to_nearest_int),
            3 => map_packed::<FfiVec3, Vec3>(floats, round_to_nearest_int),
            _ => map_packed::<FfiVec4, Vec4>(floats, round_to_nearest_int),
        }
    })
}

/// Replace every packed 3-lane vector with its lane-wise sine (radians).
///
/// # Returns
/// - `VectorMathErrorCode::Ok` (0) on success
/// - `VectorMathErrorCode::NullPointer` (1) if `data` is null and `len > 0`
/// - `VectorMathErrorCode::InvalidParameter` (2) if `len` is not a multiple of 3
///
/// # Safety
/// `data` must be null with `len == 0`, or point to `len` writable floats.
#[no_mangle]
pub unsafe extern "C" fn vector_math_sin_buffer3(data: *mut f32, len: usize) -> VectorMathErrorCode {
    handle_ffi_result_error(|| {
        // SAFETY: forwarded from this function's contract.
        let floats = unsafe { floats_from_raw(data, len)? };
        map_packed::<FfiVec3, Vec3>(floats, sin)
    })
}

/// Replace every packed 3-lane vector with its lane-wise cosine (radians).
///
/// # Returns
/// Same codes as `vector_math_sin_buffer3`.
///
/// # Safety
/// `data` must be null with `len == 0`, or point to `len` writable floats.
#[no_mangle]
pub unsafe extern "C" fn vector_math_cos_buffer3(data: *mut f32, len: usize) -> VectorMathErrorCode {
    handle_ffi_result_error(|| {
        // SAFETY: forwarded from this function's contract.
        let floats = unsafe { floats_from_raw(data, len)? };
        map_packed::<FfiVec3, Vec3>(floats, cos)
    })
}

/// Replace NaN with 0 and infinities with `±FLT_MAX` in every float of the buffer.
///
/// Works lane by lane, so any arity (or a plain float array) is accepted.
///
/// # Returns
/// - `VectorMathErrorCode::Ok` (0) on success
/// - `VectorMathErrorCode::NullPointer` (1) if `data` is null and `len > 0`
///
/// # Safety
/// `data` must be null with `len == 0`, or point to `len` writable floats.
#[no_mangle]
pub unsafe extern "C" fn vector_math_make_finite_buffer(
    data: *mut f32,
    len: usize,
) -> VectorMathErrorCode {
    handle_ffi_result_error(|| {
        // SAFETY: forwarded from this function's contract.
        let floats = unsafe { floats_from_raw(data, len)? };
        for lane in floats.iter_mut() {
            *lane = scalar::make_finite(*lane);
        }
        Ok::<(), DefaultVectorMathError>(())
    })
}

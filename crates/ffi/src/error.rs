use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait VectorMathError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> VectorMathErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `VectorMathError` for the buffer entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVectorMathError {
    code: VectorMathErrorCode,
    msg: String,
}

impl DefaultVectorMathError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"data"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: VectorMathErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an arity other than 2, 3 or 4.
    pub fn unsupported_arity(arity: u8) -> Self {
        Self::invalid_parameter(format!("Arity must be 2, 3 or 4, got {arity}"))
    }

    /// Create error for a buffer whose length is not a whole number of vectors.
    ///
    /// # Arguments
    /// * `len` - Buffer length in floats
    /// * `arity` - Lanes per vector
    pub fn buffer_length(len: usize, arity: usize) -> Self {
        Self::invalid_parameter(format!(
            "Buffer length {len} is not a multiple of vector arity {arity}"
        ))
    }

    /// Create error for invalid parameter.
    ///
    /// # Arguments
    /// * `message` - Description of the error
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: VectorMathErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl VectorMathError for DefaultVectorMathError {
    fn code(&self) -> VectorMathErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the buffer functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorMathErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter: unsupported arity or a buffer length that is not a
    /// multiple of the arity.
    InvalidParameter = 2,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored so the pointer handed out by `vector_math_get_last_error`
    /// stays valid until the next call that sets or clears the error.
    static LAST_ERROR: RefCell<(Option<CString>, VectorMathErrorCode)> = const { RefCell::new((None, VectorMathErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, VectorMathErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, VectorMathErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last buffer call failed.
/// - `null` if no error has occurred or the last buffer call succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread has its own
/// independent error state.
///
/// # Lifetime
/// The returned pointer is valid until the next buffer call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// float data[5] = {0};
/// VectorMathErrorCode err = vector_math_round_buffer(data, 5, 2);
/// if (err != VectorMathErrorCode_Ok) {
///     const char* error = vector_math_get_last_error();
///     if (error) {
///         printf("Rounding failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vector_math_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `VectorMathErrorCode::Ok` (0) if no error has occurred
/// - The specific error code from the last failed buffer call
#[no_mangle]
pub extern "C" fn vector_math_get_last_error_code() -> VectorMathErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

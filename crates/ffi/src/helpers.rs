use crate::error::{with_last_error_mut, VectorMathError, VectorMathErrorCode};
use std::ffi::CString;
use tracing::debug;

/// Set the thread-local error message and code.
/// Internal helper for FFI functions to record failure details.
pub(crate) fn set_last_error(error: &impl VectorMathError) {
    debug!(code = ?error.code(), "{}", error.msg());
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
/// Internal helper called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = VectorMathErrorCode::Ok;
    });
}

/// Run a fallible FFI body, recording the error or clearing the slot.
///
/// Returns the code to hand back across the FFI boundary.
pub(crate) fn handle_ffi_result_error<E, F>(func: F) -> VectorMathErrorCode
where
    E: VectorMathError,
    F: FnOnce() -> Result<(), E>,
{
    match func() {
        Ok(()) => {
            clear_last_error();
            VectorMathErrorCode::Ok
        }
        Err(error) => {
            set_last_error(&error);
            error.code()
        }
    }
}

#![allow(non_camel_case_types)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Result codes returned by the functions in this API.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum HSCK_RESULT {
    /// The operation was successful.
    SUCCESS,
    /// The pattern was rejected by the Hyperscan pattern compiler.
    INVALID_PATTERN,
    /// One of the arguments passed to the function is invalid.
    INVALID_ARGUMENT,
}

/// Validates that `pattern` is a valid Hyperscan pattern.
///
/// `pattern` must be a null-terminated UTF-8 string with the pattern to
/// validate. The pattern is compiled for block mode with default flags.
///
/// When the pattern is valid this function returns [`HSCK_RESULT::SUCCESS`]
/// and sets `error` to NULL. When the pattern compiler rejects the pattern
/// it returns [`HSCK_RESULT::INVALID_PATTERN`] and leaves in `error` a
/// pointer to a null-terminated string with the compiler's diagnostic. The
/// string is owned by the caller and must be freed with
/// [`hsck_error_destroy`].
#[no_mangle]
pub unsafe extern "C" fn hsck_validate_pattern(
    pattern: *const c_char,
    error: &mut *mut c_char,
) -> HSCK_RESULT {
    *error = ptr::null_mut();

    if pattern.is_null() {
        return HSCK_RESULT::INVALID_ARGUMENT;
    }

    let pattern = match CStr::from_ptr(pattern).to_str() {
        Ok(pattern) => pattern,
        Err(_) => return HSCK_RESULT::INVALID_ARGUMENT,
    };

    match hscheck::validate(pattern) {
        Ok(()) => HSCK_RESULT::SUCCESS,
        Err(err) => {
            // Engine diagnostics never contain interior nul bytes.
            let message = CString::new(err.message()).unwrap_or_default();
            *error = message.into_raw();
            HSCK_RESULT::INVALID_PATTERN
        }
    }
}

/// Frees a diagnostic message returned by [`hsck_validate_pattern`].
///
/// Passing NULL is a no-op.
#[no_mangle]
pub unsafe extern "C" fn hsck_error_destroy(error: *mut c_char) {
    if !error.is_null() {
        drop(CString::from_raw(error));
    }
}

#[cfg(test)]
mod tests;

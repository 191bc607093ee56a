use std::ffi::{CStr, CString};
use std::ptr;

use crate::{hsck_error_destroy, hsck_validate_pattern, HSCK_RESULT};

#[test]
fn capi() {
    unsafe {
        let pattern = CString::new("foo|bar").unwrap();
        let mut error = ptr::null_mut();

        assert_eq!(
            hsck_validate_pattern(pattern.as_ptr(), &mut error),
            HSCK_RESULT::SUCCESS
        );
        assert!(error.is_null());

        let pattern = CString::new("foo(bar").unwrap();

        assert_eq!(
            hsck_validate_pattern(pattern.as_ptr(), &mut error),
            HSCK_RESULT::INVALID_PATTERN
        );
        assert!(!error.is_null());
        assert!(!CStr::from_ptr(error).to_bytes().is_empty());

        hsck_error_destroy(error);

        let mut error = ptr::null_mut();

        assert_eq!(
            hsck_validate_pattern(ptr::null(), &mut error),
            HSCK_RESULT::INVALID_ARGUMENT
        );
        assert!(error.is_null());
    }
}

// C ABI for presentation layers that cannot link Rust directly.
// Every call is stateless; panics are caught so they never unwind into C.
use crate::core::engine::ProsodyAnalyzer;
use crate::error::{ChandasError, Result};
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

fn analyze_to_json(text: *const c_char) -> Result<String> {
    if text.is_null() {
        return Err(ChandasError::input("null verse pointer"));
    }
    let c_str = unsafe { CStr::from_ptr(text) };
    let verse = c_str
        .to_str()
        .map_err(|e| ChandasError::input(format!("verse is not UTF-8: {e}")))?;
    let result = ProsodyAnalyzer::default().analyze(verse);
    Ok(serde_json::to_string(&result)?)
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Analyzes a NUL-terminated UTF-8 verse and returns the result as JSON, or
/// `{"error": ...}`. Release the string with `chandas_free_string`.
#[no_mangle]
pub extern "C" fn chandas_analyze_json(text: *const c_char) -> *mut c_char {
    let outcome = catch_unwind(AssertUnwindSafe(|| analyze_to_json(text)));
    let json_string = match outcome {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => {
            log::error!("chandas_analyze_json failed: {e}");
            error_json(&e.to_string())
        }
        Err(_) => {
            log::error!("Panic in chandas_analyze_json");
            error_json("internal panic")
        }
    };
    match CString::new(json_string) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn chandas_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

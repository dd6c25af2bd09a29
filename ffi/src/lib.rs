//! C-ABI wrapper around the sans-IO half of `apputil-core`.
//!
//! # Overview
//! Hosts that perform HTTP themselves (a browser shell, a native UI) build
//! the request here, execute it, and hand the response back for status
//! checking and JSON decoding. The async `RequestHelper` and the highlighter
//! are Rust-side APIs and are not exported.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - JSON crosses as text and is only validated, never re-encoded, so key
//!   order and number precision survive in both directions.
//! - The C caller owns all returned pointers and must call the matching
//!   `apputil_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use apputil_core::{HttpResponse, RequestClient, RequestOptions};
use serde_json::value::RawValue;

use types::*;

/// Borrow a C string as `&str`. `None` for null or invalid UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives the
/// returned slice.
unsafe fn borrow_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

// ---------------------------------------------------------------------------
// Build
// ---------------------------------------------------------------------------

/// Build an HTTP request for `method` and `url` carrying `payload_json`.
///
/// `payload_json` must be valid JSON text; it becomes the body unchanged. `content_type` may be null to use `application/json`.
/// Returns null if a required argument is null or not UTF-8, or if the
/// payload is not valid JSON.
/// The caller must free the returned pointer with `apputil_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn apputil_build_request(
    method: *const c_char,
    url: *const c_char,
    payload_json: *const c_char,
    content_type: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        let (Some(method), Some(url), Some(payload)) = (unsafe { borrow_str(method) }, unsafe { borrow_str(url) }, unsafe {
            borrow_str(payload_json)
        }) else {
            return std::ptr::null_mut();
        };
        let payload: Box<RawValue> = match serde_json::from_str(payload) {
            Ok(v) => v,
            Err(_) => return std::ptr::null_mut(),
        };
        let content_type = unsafe { borrow_str(content_type) };

        match RequestClient::default().build_request(method, url, &payload, content_type) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

/// Check the status of `response` against `policy` and decode its body.
///
/// A null body is treated as empty, which decodes to JSON `null`.
#[unsafe(no_mangle)]
pub extern "C" fn apputil_parse_response(response: *const FfiHttpResponse, policy: FfiStatusPolicy) -> *mut FfiResult {
    catch_unwind(|| {
        if response.is_null() {
            return FfiResult::null_arg("response");
        }
        let resp = unsafe { &*response };
        let body = if resp.body.is_null() {
            String::new()
        } else {
            match unsafe { CStr::from_ptr(resp.body) }.to_str() {
                Ok(s) => s.to_string(),
                Err(e) => return FfiResult::invalid_arg(format!("response body is not UTF-8: {e}")),
            }
        };

        let client = RequestClient::new(RequestOptions::default().with_status_policy(policy.into()));
        match client.parse_response_as::<Box<RawValue>>(HttpResponse::new(resp.status, body)) {
            Ok(value) => FfiResult::ok_json(value),
            Err(e) => FfiResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiResult::panic("panic in apputil_parse_response"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `apputil_build_request`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn apputil_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.method);
        free_c_string(req.url);
        free_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(req.headers, req.headers_len as usize))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiResult` returned by `apputil_parse_response`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn apputil_free_result(result: *mut FfiResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        free_c_string(result.json);
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn apputil_free_string(s: *mut c_char) {
    let _ = catch_unwind(|| free_c_string(s));
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

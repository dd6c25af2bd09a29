//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`. Decoded
//! response values cross as JSON text, since their shape is caller-defined.
//! Conversion functions live here to keep `lib.rs` focused on the
//! `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use apputil_core::{HttpRequest, RequestError};
use serde_json::value::RawValue;

/// Build a C string, dropping interior NULs rather than failing.
pub(crate) fn c_string(s: String) -> *mut c_char {
    let cleaned = match CString::new(s) {
        Ok(c) => c,
        Err(e) => {
            let mut bytes = e.into_vec();
            bytes.retain(|&b| b != 0);
            CString::new(bytes).unwrap_or_default()
        }
    };
    cleaned.into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `apputil_build_request`. The C caller executes the request and
/// passes the response back through `apputil_parse_response`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: *mut c_char,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Vec<FfiHeader> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers.into_boxed_slice()) as *mut FfiHeader
        };

        let ffi_req = Box::new(FfiHttpRequest {
            method: c_string(req.method),
            url: c_string(req.url),
            headers,
            headers_len,
            body: c_string(req.body),
        });
        Box::into_raw(ffi_req)
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this after executing a request and passes a
/// pointer to `apputil_parse_response`. The FFI layer reads but does not
/// free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Status = 1,
    Decode = 2,
    Serialization = 3,
    Transport = 4,
    Panic = 5,
    NullArg = 6,
    InvalidArg = 7,
}

/// Status policy as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiStatusPolicy {
    SuccessOnly = 0,
    AcceptAny = 1,
}

impl From<FfiStatusPolicy> for apputil_core::StatusPolicy {
    fn from(p: FfiStatusPolicy) -> Self {
        match p {
            FfiStatusPolicy::SuccessOnly => apputil_core::StatusPolicy::SuccessOnly,
            FfiStatusPolicy::AcceptAny => apputil_core::StatusPolicy::AcceptAny,
        }
    }
}

/// Result envelope for `apputil_parse_response`.
///
/// On success `error_code` is `Ok`, `error_message` is null and `json`
/// holds the validated body text exactly as received (`null` for an empty
/// body).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string and `json` is null. `http_status` is set for
/// `Status` errors.
#[repr(C)]
pub struct FfiResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub json: *mut c_char,
}

impl FfiResult {
    fn boxed(error_code: FfiErrorCode, error_message: *mut c_char, http_status: u16, json: *mut c_char) -> *mut Self {
        Box::into_raw(Box::new(FfiResult {
            error_code,
            error_message,
            http_status,
            json,
        }))
    }

    /// Build a success result carrying the validated JSON text.
    pub(crate) fn ok_json(value: Box<RawValue>) -> *mut Self {
        Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), 0, c_string(value.get().to_string()))
    }

    /// Build an error result from a `RequestError`.
    pub(crate) fn from_error(err: RequestError) -> *mut Self {
        let (error_code, http_status) = match &err {
            RequestError::Status { status, .. } => (FfiErrorCode::Status, *status),
            RequestError::Decode(_) => (FfiErrorCode::Decode, 0),
            RequestError::Serialization(_) => (FfiErrorCode::Serialization, 0),
            RequestError::Transport(_) | RequestError::Abandoned => (FfiErrorCode::Transport, 0),
        };
        Self::boxed(error_code, c_string(err.to_string()), http_status, std::ptr::null_mut())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::boxed(
            FfiErrorCode::NullArg,
            c_string(format!("null argument: {name}")),
            0,
            std::ptr::null_mut(),
        )
    }

    pub(crate) fn invalid_arg(msg: String) -> *mut Self {
        Self::boxed(FfiErrorCode::InvalidArg, c_string(msg), 0, std::ptr::null_mut())
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::boxed(FfiErrorCode::Panic, c_string(msg.to_string()), 0, std::ptr::null_mut())
    }
}

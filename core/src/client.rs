//! Stateless HTTP request builder and response parser.
//!
//! # Design
//! `RequestClient` holds only its `RequestOptions` and carries no mutable
//! state between calls. `build_request` produces an `HttpRequest` and the
//! `parse_*` methods consume an `HttpResponse`. Whoever sits in between
//! (a `Transport`, or a foreign host through the FFI crate) executes the
//! round-trip, keeping this half deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::RequestOptions;
use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse, CONTENT_TYPE_HEADER};

#[derive(Debug, Clone, Default)]
pub struct RequestClient {
    options: RequestOptions,
}

impl RequestClient {
    pub fn new(options: RequestOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Serialize `payload` and describe the request.
    ///
    /// Method and URL are passed through untouched. The payload becomes the
    /// body for every verb, and `content_type` (or the configured default)
    /// is the only header.
    pub fn build_request<P>(
        &self,
        method: &str,
        url: &str,
        payload: &P,
        content_type: Option<&str>,
    ) -> Result<HttpRequest, RequestError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload).map_err(|e| RequestError::Serialization(e.to_string()))?;
        let content_type = content_type.unwrap_or(&self.options.default_content_type);
        Ok(HttpRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: vec![(CONTENT_TYPE_HEADER.to_string(), content_type.to_string())],
            body,
        })
    }

    /// Apply the status policy, then decode the body as a JSON value.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, RequestError> {
        self.parse_response_as(response)
    }

    /// Apply the status policy, then decode the body into `T`.
    pub fn parse_response_as<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, RequestError> {
        self.check_status(&response)?;
        decode_body(&response.body)
    }

    /// Reject statuses the configured policy does not accept.
    pub fn check_status(&self, response: &HttpResponse) -> Result<(), RequestError> {
        if self.options.status_policy.accepts(response.status) {
            return Ok(());
        }
        Err(RequestError::Status {
            status: response.status,
            body: response.body.clone(),
        })
    }
}

/// Decode a response body. An empty or blank body stands for JSON `null`.
///
/// Decoding always goes through the text deserializer so targets such as
/// `Box<RawValue>` see the same input they would for a literal `null`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
}

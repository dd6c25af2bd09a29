//! Error types for the request and highlight helpers.
//!
//! # Design
//! Each failure a caller may want to react to differently gets its own
//! variant: the transport never completed the exchange, the server answered
//! with a rejected status, or the body was not valid JSON. Payloads are owned
//! strings so errors stay `Clone` and map cleanly onto the FFI error codes.

use thiserror::Error;

/// Failures reported by a `Transport` while performing an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be turned into something the transport can send
    /// (unparseable method or URL).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Connection-level failure: unreachable host, reset, TLS, I/O.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The response arrived but its body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors returned by `RequestClient` and `RequestHelper`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The status policy rejected the response status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body is not valid JSON for the requested type.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The transport dropped its completion handle without reporting.
    #[error("transport dropped the exchange without completing it")]
    Abandoned,
}

/// Errors returned by `Highlighter::highlight`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    #[error("no element with id '{id}'")]
    ElementNotFound { id: String },
}

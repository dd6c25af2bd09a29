//! Request and highlight helpers for browser-style front ends.
//!
//! # Overview
//! Two independent helpers:
//! - `RequestHelper::send_request` performs one HTTP exchange through an
//!   injected `Transport` and resolves with the decoded JSON body.
//! - `Highlighter::highlight` styles one element of an injected `Document`
//!   and schedules the reversal on an injected `Scheduler`.
//!
//! # Design
//! - The request path is split the host-does-IO way: `RequestClient` builds
//!   `HttpRequest` values and parses `HttpResponse` values without touching
//!   the network, and `RequestHelper` waits on the transport in between.
//! - One contract: only statuses accepted by the `StatusPolicy` are decoded;
//!   transport, status and decode failures are distinct `RequestError`s.
//! - No retry, timeout or cancellation anywhere. Callers that need a
//!   deadline race the returned future against their own timer.

pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod highlight;
pub mod http;
pub mod request;
pub mod scheduler;
pub mod transport;
pub mod ureq_transport;

pub use client::RequestClient;
pub use config::{HighlightConfig, RequestOptions, StatusPolicy};
pub use dom::{Document, Element, MemoryDocument, MemoryElement};
pub use error::{HighlightError, RequestError, TransportError};
pub use highlight::Highlighter;
pub use http::{HttpRequest, HttpResponse, DEFAULT_CONTENT_TYPE};
pub use request::RequestHelper;
pub use scheduler::{ManualScheduler, Scheduler, TokioScheduler};
pub use transport::{Completion, Transport};
pub use ureq_transport::UreqTransport;

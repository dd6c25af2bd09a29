//! Blocking `ureq` transport driven from a worker thread.
//!
//! Each `send` spawns one thread that performs the round-trip and reports
//! through the `Completion`, so the awaiting task never blocks. Status codes
//! are returned as data, leaving their interpretation to the status policy.

use std::thread;

use http::Method;
use ureq::Agent;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Completion, ExchangeOutcome, Transport};

#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        let agent = Agent::config_builder().http_status_as_error(false).build().new_agent();
        Self { agent }
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured agent. It should keep `http_status_as_error`
    /// disabled, otherwise non-2xx responses surface as transport errors.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest, completion: Completion) -> Result<(), TransportError> {
        let http_request = to_http_request(&request)?;
        let agent = self.agent.clone();
        thread::Builder::new()
            .name("apputil-ureq".to_string())
            .spawn(move || completion.finish(execute(&agent, request, http_request)))
            .map_err(|e| TransportError::Connection(format!("failed to spawn transport thread: {e}")))?;
        Ok(())
    }
}

/// Methods ureq will put on the wire. Extension methods such as `PURGE`
/// are refused by its protocol layer.
const SENDABLE_METHODS: [Method; 8] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
    Method::TRACE,
    Method::PATCH,
];

/// Validate method, URL and headers up front so bad input fails before
/// anything is dispatched.
fn to_http_request(request: &HttpRequest) -> Result<http::Request<Vec<u8>>, TransportError> {
    let mut builder = http::Request::builder()
        .method(request.method.as_str())
        .uri(request.url.as_str());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let http_request = builder
        .body(request.body.clone().into_bytes())
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
    if !SENDABLE_METHODS.contains(http_request.method()) {
        return Err(TransportError::InvalidRequest(format!(
            "method {} cannot be sent by the ureq transport",
            http_request.method()
        )));
    }
    Ok(http_request)
}

fn execute(agent: &Agent, request: HttpRequest, http_request: http::Request<Vec<u8>>) -> ExchangeOutcome {
    let sent = match request.method.as_str() {
        "GET" | "HEAD" | "DELETE" => send_forcing_body(agent, &request),
        _ => agent.run(http_request),
    };
    let mut response = sent.map_err(|e| TransportError::Connection(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError::Body(e.to_string()))?;

    Ok(HttpResponse { status, headers, body })
}

// ureq drops bodies on these verbs unless told otherwise.
fn send_forcing_body(agent: &Agent, request: &HttpRequest) -> Result<http::Response<ureq::Body>, ureq::Error> {
    let url = request.url.as_str();
    let mut builder = match request.method.as_str() {
        "HEAD" => agent.head(url),
        "DELETE" => agent.delete(url),
        _ => agent.get(url),
    }
    .force_send_body();
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder.send(request.body.as_bytes())
}

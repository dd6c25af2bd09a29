//! The seam between the request helper and whatever moves bytes.
//!
//! # Design
//! A `Transport` receives a fully built `HttpRequest` together with a
//! `Completion` handle and returns immediately. When the exchange is over it
//! signals through the handle, from any thread. `Completion` is consumed on
//! use, so a transport can report at most once per request.

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub type ExchangeOutcome = Result<HttpResponse, TransportError>;

pub trait Transport {
    /// Start the exchange described by `request`.
    ///
    /// An `Err` means the request was never dispatched; `completion` is then
    /// dropped unused.
    fn send(&self, request: HttpRequest, completion: Completion) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest, completion: Completion) -> Result<(), TransportError> {
        (**self).send(request, completion)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: HttpRequest, completion: Completion) -> Result<(), TransportError> {
        (**self).send(request, completion)
    }
}

/// One-shot completion signal for a single exchange.
#[derive(Debug)]
pub struct Completion {
    sender: oneshot::Sender<ExchangeOutcome>,
}

impl Completion {
    pub(crate) fn pair() -> (Self, oneshot::Receiver<ExchangeOutcome>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// The response has been fully received.
    pub fn complete(self, response: HttpResponse) {
        self.finish(Ok(response));
    }

    pub fn fail(self, error: TransportError) {
        self.finish(Err(error));
    }

    pub fn finish(self, outcome: ExchangeOutcome) {
        if self.sender.send(outcome).is_err() {
            log::debug!("exchange finished after its caller stopped waiting");
        }
    }
}

//! Asynchronous request helper.
//!
//! `RequestHelper` glues the sans-IO `RequestClient` to a `Transport`: build
//! the request, hand it to the transport, wait for the completion signal, then
//! parse. The wait on the completion receiver is the only suspension point;
//! there is no retry, timeout or cancellation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::RequestClient;
use crate::config::RequestOptions;
use crate::error::RequestError;
use crate::http::HttpResponse;
use crate::transport::{Completion, Transport};

#[derive(Debug, Clone)]
pub struct RequestHelper<T> {
    client: RequestClient,
    transport: T,
}

impl<T: Transport> RequestHelper<T> {
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, RequestOptions::default())
    }

    pub fn with_options(transport: T, options: RequestOptions) -> Self {
        Self {
            client: RequestClient::new(options),
            transport,
        }
    }

    pub fn client(&self) -> &RequestClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and resolve with the decoded JSON body.
    pub async fn send_request<P>(
        &self,
        method: &str,
        url: &str,
        payload: &P,
        content_type: Option<&str>,
    ) -> Result<Value, RequestError>
    where
        P: Serialize + ?Sized,
    {
        self.send_request_as(method, url, payload, content_type).await
    }

    /// Like `send_request`, decoding straight into `R`.
    pub async fn send_request_as<R, P>(
        &self,
        method: &str,
        url: &str,
        payload: &P,
        content_type: Option<&str>,
    ) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let response = self.exchange(method, url, payload, content_type).await?;
        self.client.parse_response_as(response)
    }

    /// Send one request and resolve with the undecoded response.
    ///
    /// The status policy still applies; combine with
    /// `StatusPolicy::AcceptAny` to receive every completed response.
    pub async fn send_request_raw<P>(
        &self,
        method: &str,
        url: &str,
        payload: &P,
        content_type: Option<&str>,
    ) -> Result<HttpResponse, RequestError>
    where
        P: Serialize + ?Sized,
    {
        let response = self.exchange(method, url, payload, content_type).await?;
        self.client.check_status(&response)?;
        Ok(response)
    }

    async fn exchange<P>(
        &self,
        method: &str,
        url: &str,
        payload: &P,
        content_type: Option<&str>,
    ) -> Result<HttpResponse, RequestError>
    where
        P: Serialize + ?Sized,
    {
        let request = self.client.build_request(method, url, payload, content_type)?;
        log::debug!("sending {} {} ({} byte body)", request.method, request.url, request.body.len());

        let (completion, receiver) = Completion::pair();
        self.transport.send(request, completion)?;

        let response = receiver.await.map_err(|_| RequestError::Abandoned)??;
        log::debug!("received HTTP {} ({} byte body)", response.status, response.body.len());
        Ok(response)
    }
}

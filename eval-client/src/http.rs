//! HTTP client for the evaluation service
//!
//! `ApiClient` owns a transport, its configuration and the interceptor. It is
//! built explicitly and passed to whoever needs it.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, TransportError};
use crate::interceptor::{Interceptor, Outcome};
use crate::notify::Notifier;
use crate::request::{ApiRequest, FilePart, RawResponse};
use crate::transport::{ReqwestTransport, Transport};

/// Client for the evaluation service API
#[derive(Debug)]
pub struct ApiClient<T: Transport = ReqwestTransport> {
    transport: T,
    interceptor: Interceptor,
    config: ClientConfig,
}

impl ApiClient<ReqwestTransport> {
    /// Create a network client from configuration
    pub fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(transport, config, notifier))
    }

    /// Create a network client configured from the environment
    pub fn from_env(notifier: Arc<dyn Notifier>) -> ClientResult<Self> {
        Self::new(ClientConfig::from_env(), notifier)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T, config: ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        let interceptor = Interceptor::new(notifier, config.timeout);
        Self {
            transport,
            interceptor,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn interceptor(&self) -> &Interceptor {
        &self.interceptor
    }

    /// Send a request through the interceptor.
    ///
    /// A non-2xx reply is turned into a [`TransportError`] carrying the
    /// status and body before it reaches the error hook.
    pub async fn execute(&self, request: ApiRequest) -> ClientResult<Outcome> {
        let request = self.interceptor.on_request(request);
        match self.transport.send(&request).await {
            Ok(response) if response.status.is_success() => self.interceptor.on_response(response),
            Ok(response) => Err(self.interceptor.on_error(TransportError::from_status(response))),
            Err(err) => Err(self.interceptor.on_error(err)),
        }
    }

    /// Send a request and decode the JSON body
    pub async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<R> {
        match self.execute(request).await? {
            Outcome::Body(body) => Ok(serde_json::from_value(body)?),
            Outcome::Raw(_) => Err(ClientError::InvalidResponse(
                "expected a JSON body, got a binary response".into(),
            )),
        }
    }

    /// Send a request as a binary download and return the raw response
    pub async fn download(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        match self.execute(request.blob()).await? {
            Outcome::Raw(response) => Ok(response),
            Outcome::Body(_) => Err(ClientError::InvalidResponse(
                "expected a binary response".into(),
            )),
        }
    }

    // ========== Verb helpers ==========

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.send_json(ApiRequest::get(path)).await
    }

    pub async fn get_with_query<R, Q>(&self, path: &str, query: &Q) -> ClientResult<R>
    where
        R: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::get(path).query_params(query)?)
            .await
    }

    pub async fn post<R, B>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::post(path).json(body)?).await
    }

    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.send_json(ApiRequest::post(path)).await
    }

    /// POST without a body, parameters in the query string
    pub async fn post_with_query<R, Q>(&self, path: &str, query: &Q) -> ClientResult<R>
    where
        R: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::post(path).query_params(query)?)
            .await
    }

    /// POST with both a JSON body and query parameters
    pub async fn post_json_with_query<R, B, Q>(
        &self,
        path: &str,
        body: &B,
        query: &Q,
    ) -> ClientResult<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::post(path).json(body)?.query_params(query)?)
            .await
    }

    pub async fn put<R, B>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::put(path).json(body)?).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.send_json(ApiRequest::delete(path)).await
    }

    pub async fn delete_with_query<R, Q>(&self, path: &str, query: &Q) -> ClientResult<R>
    where
        R: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::delete(path).query_params(query)?)
            .await
    }

    pub async fn delete_with_body<R, B>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::delete(path).json(body)?).await
    }

    /// POST a file as multipart form data
    pub async fn upload<R: DeserializeOwned>(&self, path: &str, file: FilePart) -> ClientResult<R> {
        self.send_json(ApiRequest::post(path).multipart(file)).await
    }
}

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

/// Service info and health
pub struct SystemApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SystemApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn info(&self) -> ClientResult<ApiEnvelope> {
        self.client.get("/").await
    }

    pub async fn health(&self) -> ClientResult<ApiEnvelope> {
        self.client.get("/health").await
    }
}

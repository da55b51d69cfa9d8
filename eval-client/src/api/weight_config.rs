//! Weight configuration endpoints (`/api/weight-config`)

use serde_json::Value;
use shared::models::WeightConfigCopy;

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/weight-config";

pub struct WeightConfigApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> WeightConfigApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(BASE).await
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    pub async fn get_by_name(&self, config_name: &str) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/name/{config_name}")).await
    }

    /// Currently active configuration
    pub async fn get_active(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/active")).await
    }

    pub async fn create(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(BASE, data).await
    }

    pub async fn update(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.put(BASE, data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.delete(&format!("{BASE}/{id}")).await
    }

    pub async fn activate(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.post_empty(&format!("{BASE}/activate/{id}")).await
    }

    pub async fn deactivate(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.post_empty(&format!("{BASE}/deactivate/{id}")).await
    }

    /// Duplicate a configuration under a new name
    pub async fn copy(&self, id: i64, new_config_name: &str) -> ClientResult<ApiEnvelope> {
        let query = WeightConfigCopy {
            new_config_name: new_config_name.to_string(),
        };
        self.client
            .post_with_query(&format!("{BASE}/copy/{id}"), &query)
            .await
    }

    pub async fn validate(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/validate"), data).await
    }
}

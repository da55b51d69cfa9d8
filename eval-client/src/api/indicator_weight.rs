//! Indicator weight endpoints (`/api/indicator-weight`)

use serde_json::Value;

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/indicator-weight";

pub struct IndicatorWeightApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> IndicatorWeightApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(BASE).await
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    pub async fn get_by_config_id(&self, config_id: i64) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/config/{config_id}")).await
    }

    pub async fn get_by_indicator_code(&self, indicator_code: &str) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/indicator/{indicator_code}"))
            .await
    }

    pub async fn create(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(BASE, data).await
    }

    pub async fn batch_create(&self, data: &[Value]) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/batch"), data).await
    }

    pub async fn update(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.put(BASE, data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.delete(&format!("{BASE}/{id}")).await
    }

    /// Check a set of weights before saving
    pub async fn validate(&self, weights: &[Value]) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/validate"), weights).await
    }
}

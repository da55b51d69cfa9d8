use serde_json::Value;

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/algorithm-config";

/// Algorithm configuration CRUD
pub struct AlgorithmConfigApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AlgorithmConfigApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(BASE).await
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    pub async fn get_default(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/default")).await
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
}

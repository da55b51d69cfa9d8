//! Evaluation model management (`/api/model-management`)
//!
//! A model is an ordered list of steps; each step owns one or more
//! expression-based algorithms.

use serde_json::Value;
use shared::models::ExpressionRequest;

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/model-management";

pub struct ModelManagementApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ModelManagementApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    // ========== Models ==========

    pub async fn models(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/models")).await
    }

    pub async fn model(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/models/{id}")).await
    }

    /// Model with its steps and their algorithms
    pub async fn model_detail(&self, model_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/models/{model_id}/detail"))
            .await
    }

    pub async fn create_model(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/models"), data).await
    }

    pub async fn update_model(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.put(&format!("{BASE}/models"), data).await
    }

    pub async fn delete_model(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.delete(&format!("{BASE}/models/{id}")).await
    }

    // ========== Steps ==========

    pub async fn model_steps(&self, model_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/models/{model_id}/steps"))
            .await
    }

    pub async fn create_step(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/steps"), data).await
    }

    pub async fn update_step(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.put(&format!("{BASE}/steps"), data).await
    }

    pub async fn delete_step(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.delete(&format!("{BASE}/steps/{id}")).await
    }

    // ========== Step algorithms ==========

    pub async fn step_algorithms(&self, step_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/steps/{step_id}/algorithms"))
            .await
    }

    pub async fn create_step_algorithm(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/algorithms"), data).await
    }

    pub async fn update_step_algorithm(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.put(&format!("{BASE}/algorithms"), data).await
    }

    pub async fn delete_step_algorithm(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.delete(&format!("{BASE}/algorithms/{id}")).await
    }

    // ========== Expressions ==========

    pub async fn validate_expression(&self, request: &ExpressionRequest) -> ClientResult<ApiEnvelope> {
        self.client
            .post(&format!("{BASE}/validate-expression"), request)
            .await
    }

    /// Evaluate an expression against a sample context
    pub async fn test_expression(&self, request: &ExpressionRequest) -> ClientResult<ApiEnvelope> {
        self.client
            .post(&format!("{BASE}/test-expression"), request)
            .await
    }
}

//! Algorithm execution endpoints (`/api/algorithm/execution`)

use shared::models::{
    BatchExecutionRequest, ExecutionRequest, ParameterValidation, StepCalculation, StepExecution,
};

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/algorithm/execution";

pub struct AlgorithmExecutionApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AlgorithmExecutionApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, request: &ExecutionRequest) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/execute"), request).await
    }

    pub async fn validate(&self, request: &ParameterValidation) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/validate"), request).await
    }

    pub async fn progress(&self, execution_id: &str) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/progress/{execution_id}"))
            .await
    }

    pub async fn stop(&self, execution_id: &str) -> ClientResult<ApiEnvelope> {
        self.client
            .post_empty(&format!("{BASE}/stop/{execution_id}"))
            .await
    }

    pub async fn supported_types(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/types")).await
    }

    pub async fn batch_execute(&self, request: &BatchExecutionRequest) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/batch"), request).await
    }

    pub async fn calculate_step(&self, request: &StepCalculation) -> ClientResult<ApiEnvelope> {
        self.client
            .post(&format!("{BASE}/step/calculate"), request)
            .await
    }

    pub async fn execute_step(&self, request: &StepExecution) -> ClientResult<ApiEnvelope> {
        self.client
            .post(&format!("{BASE}/step/execute"), request)
            .await
    }
}

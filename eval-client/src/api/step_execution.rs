//! Step-by-step algorithm execution (`/api/algorithm-step-execution`)

use shared::models::RegionSelection;

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/algorithm-step-execution";

pub struct StepExecutionApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> StepExecutionApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn steps(&self, algorithm_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/{algorithm_id}/steps"))
            .await
    }

    pub async fn execute_step(
        &self,
        algorithm_id: i64,
        step_order: i32,
        selection: &RegionSelection,
    ) -> ClientResult<ApiEnvelope> {
        self.client
            .post(
                &format!("{BASE}/{algorithm_id}/step/{step_order}/execute"),
                selection,
            )
            .await
    }

    /// Run every step up to and including `up_to_step_order`
    pub async fn execute_up_to(
        &self,
        algorithm_id: i64,
        up_to_step_order: i32,
        selection: &RegionSelection,
    ) -> ClientResult<ApiEnvelope> {
        self.client
            .post(
                &format!("{BASE}/{algorithm_id}/steps/execute-up-to/{up_to_step_order}"),
                selection,
            )
            .await
    }

    pub async fn detail(&self, algorithm_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/{algorithm_id}/detail"))
            .await
    }

    pub async fn algorithms(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/algorithms")).await
    }

    pub async fn validate_params(
        &self,
        algorithm_id: i64,
        selection: &RegionSelection,
    ) -> ClientResult<ApiEnvelope> {
        self.client
            .post(
                &format!("{BASE}/{algorithm_id}/validate-params"),
                selection,
            )
            .await
    }
}

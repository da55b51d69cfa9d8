//! Evaluation endpoints (`/api/evaluation`)

use serde_json::Value;
use shared::models::{BatchEvaluationQuery, EvaluationParams, ModelExecutionQuery, StepResult};

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/evaluation";

pub struct EvaluationApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> EvaluationApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn calculate(&self, params: &EvaluationParams) -> ClientResult<ApiEnvelope> {
        self.client
            .post_with_query(&format!("{BASE}/calculate"), params)
            .await
    }

    pub async fn recalculate(&self, params: &EvaluationParams) -> ClientResult<ApiEnvelope> {
        self.client
            .post_with_query(&format!("{BASE}/recalculate"), params)
            .await
    }

    /// Evaluate several surveys with one algorithm and weight configuration
    pub async fn batch_calculate(
        &self,
        survey_ids: &[i64],
        algorithm_id: i64,
        weight_config_id: i64,
    ) -> ClientResult<ApiEnvelope> {
        let query = BatchEvaluationQuery {
            algorithm_id,
            weight_config_id,
        };
        self.client
            .post_json_with_query(&format!("{BASE}/batch"), survey_ids, &query)
            .await
    }

    /// Intermediate data of every algorithm step
    pub async fn process_data(&self, params: &EvaluationParams) -> ClientResult<ApiEnvelope> {
        self.client
            .get_with_query(&format!("{BASE}/process"), params)
            .await
    }

    /// History of one survey, or of all surveys when `survey_id` is `None`
    pub async fn history(&self, survey_id: Option<i64>) -> ClientResult<ApiEnvelope> {
        match survey_id {
            Some(id) => self.client.get(&format!("{BASE}/history/{id}")).await,
            None => self.client.get(&format!("{BASE}/history")).await,
        }
    }

    pub async fn validate_params(&self, params: &EvaluationParams) -> ClientResult<ApiEnvelope> {
        self.client
            .post_with_query(&format!("{BASE}/validate"), params)
            .await
    }

    pub async fn delete_results(&self, params: &EvaluationParams) -> ClientResult<ApiEnvelope> {
        self.client
            .delete_with_query(&format!("{BASE}/results"), params)
            .await
    }

    /// Create an evaluation task
    pub async fn create(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/create"), data).await
    }

    pub async fn save_step_result(&self, result: &StepResult) -> ClientResult<ApiEnvelope> {
        self.client
            .post(&format!("{BASE}/step-result"), result)
            .await
    }

    pub async fn finalize(&self, evaluation_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .post_empty(&format!("{BASE}/finalize/{evaluation_id}"))
            .await
    }

    /// Run a configured evaluation model over a set of regions
    pub async fn execute_model(
        &self,
        model_id: i64,
        region_codes: &[String],
        weight_config_id: i64,
    ) -> ClientResult<ApiEnvelope> {
        let query = ModelExecutionQuery {
            model_id,
            weight_config_id,
        };
        self.client
            .post_json_with_query(&format!("{BASE}/execute-model"), region_codes, &query)
            .await
    }

    /// Build the two-dimensional result table from execution results
    pub async fn generate_result_table(&self, execution_results: &Value) -> ClientResult<ApiEnvelope> {
        self.client
            .post(&format!("{BASE}/generate-table"), execution_results)
            .await
    }
}

//! Algorithm management endpoints (`/api/algorithm/management`)
//!
//! Algorithms are edited as a whole: configuration, ordered steps and the
//! formulas the steps reference.

use serde_json::Value;
use shared::models::{
    AlgorithmConfig, AlgorithmCopy, AlgorithmDetail, AlgorithmPayload, AlgorithmStep,
    FormulaConfig, FormulaValidation,
};

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::request::ApiRequest;
use crate::transport::Transport;

const BASE: &str = "/api/algorithm/management";

pub struct AlgorithmManagementApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AlgorithmManagementApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<ApiEnvelope<Vec<AlgorithmConfig>>> {
        self.client.get(&format!("{BASE}/list")).await
    }

    pub async fn detail(&self, algorithm_id: i64) -> ClientResult<ApiEnvelope<AlgorithmDetail>> {
        self.client
            .get(&format!("{BASE}/detail/{algorithm_id}"))
            .await
    }

    pub async fn create(&self, payload: &AlgorithmPayload) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/create"), payload).await
    }

    pub async fn update(&self, payload: &AlgorithmPayload) -> ClientResult<ApiEnvelope> {
        self.client.put(&format!("{BASE}/update"), payload).await
    }

    pub async fn delete(&self, algorithm_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .delete(&format!("{BASE}/delete/{algorithm_id}"))
            .await
    }

    /// Steps together with their formulas
    pub async fn steps(&self, algorithm_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/steps/{algorithm_id}"))
            .await
    }

    // ========== Steps ==========

    pub async fn create_step(&self, step: &AlgorithmStep) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/step/create"), step).await
    }

    pub async fn update_step(&self, step: &AlgorithmStep) -> ClientResult<ApiEnvelope> {
        self.client.put(&format!("{BASE}/step/update"), step).await
    }

    pub async fn delete_step(&self, step_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .delete(&format!("{BASE}/step/delete/{step_id}"))
            .await
    }

    pub async fn batch_update_steps(&self, steps: &[AlgorithmStep]) -> ClientResult<ApiEnvelope> {
        self.client.put(&format!("{BASE}/steps/batch"), steps).await
    }

    // ========== Formulas ==========

    /// All formulas, optionally of one type
    pub async fn formulas(&self, formula_type: Option<&str>) -> ClientResult<ApiEnvelope> {
        self.client
            .send_json(ApiRequest::get(format!("{BASE}/formulas")).query_opt("formulaType", formula_type))
            .await
    }

    pub async fn create_formula(&self, formula: &FormulaConfig) -> ClientResult<ApiEnvelope> {
        self.client
            .post(&format!("{BASE}/formula/create"), formula)
            .await
    }

    pub async fn update_formula(&self, formula: &FormulaConfig) -> ClientResult<ApiEnvelope> {
        self.client
            .put(&format!("{BASE}/formula/update"), formula)
            .await
    }

    pub async fn delete_formula(&self, formula_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .delete(&format!("{BASE}/formula/delete/{formula_id}"))
            .await
    }

    pub async fn validate_formula(&self, expression: &str) -> ClientResult<ApiEnvelope> {
        let body = FormulaValidation {
            expression: expression.to_string(),
        };
        self.client
            .post(&format!("{BASE}/formula/validate"), &body)
            .await
    }

    // ========== Whole algorithms ==========

    pub async fn copy(&self, source_algorithm_id: i64, new_algorithm_name: &str) -> ClientResult<ApiEnvelope> {
        let body = AlgorithmCopy {
            new_algorithm_name: new_algorithm_name.to_string(),
        };
        self.client
            .post(&format!("{BASE}/copy/{source_algorithm_id}"), &body)
            .await
    }

    pub async fn import(&self, algorithm: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/import"), algorithm).await
    }

    pub async fn export(&self, algorithm_id: i64) -> ClientResult<ApiEnvelope> {
        self.client
            .get(&format!("{BASE}/export/{algorithm_id}"))
            .await
    }
}

//! Evaluation Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies one evaluation run: survey, algorithm and weight configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationParams {
    pub survey_id: i64,
    pub algorithm_id: i64,
    pub weight_config_id: i64,
}

impl EvaluationParams {
    pub fn new(survey_id: i64, algorithm_id: i64, weight_config_id: i64) -> Self {
        Self {
            survey_id,
            algorithm_id,
            weight_config_id,
        }
    }
}

/// Query for the batch calculation; survey ids travel in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEvaluationQuery {
    pub algorithm_id: i64,
    pub weight_config_id: i64,
}

/// Query for model-based execution; region codes travel in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelExecutionQuery {
    pub model_id: i64,
    pub weight_config_id: i64,
}

/// Intermediate result of one algorithm step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    pub evaluation_id: i64,
    pub step_id: i64,
    pub result: Value,
}

/// Copy weight configuration query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfigCopy {
    pub new_config_name: String,
}

//! Algorithm execution request bodies

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Run an algorithm over a survey or a set of regions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    pub algorithm_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_config: Option<HashMap<String, f64>>,
}

/// Run an algorithm over several surveys
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchExecutionRequest {
    pub algorithm_id: i64,
    pub survey_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_config: Option<HashMap<String, f64>>,
}

/// Validate algorithm parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterValidation {
    pub algorithm_id: i64,
    pub parameters: Map<String, Value>,
}

/// Calculate the result of a single step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepCalculation {
    pub algorithm_id: i64,
    pub step_id: i64,
    pub step_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

/// Execute a single step within an evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepExecution {
    pub evaluation_id: i64,
    pub step_id: i64,
    pub algorithm_id: i64,
    pub region_ids: Vec<String>,
    pub parameters: Map<String, Value>,
}

/// Region selection for the step-by-step execution endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSelection {
    pub region_codes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_config_id: Option<i64>,
}

/// Expression check or trial run for model management
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpressionRequest {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_execution_request_skips_absent_fields() {
        let req = ExecutionRequest {
            algorithm_id: 2,
            survey_id: Some(5),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "algorithmId": 2, "surveyId": 5 })
        );
    }

    #[test]
    fn test_region_selection_camel_case() {
        let sel = RegionSelection {
            region_codes: vec!["110101".into()],
            weight_config_id: Some(4),
        };
        assert_eq!(
            serde_json::to_value(&sel).unwrap(),
            json!({ "regionCodes": ["110101"], "weightConfigId": 4 })
        );
    }
}

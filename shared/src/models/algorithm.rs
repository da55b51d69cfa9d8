//! Algorithm Model
//!
//! Algorithm configurations with their ordered steps and formulas, as served
//! by the algorithm management endpoints. Fields the client does not read are
//! kept in `extra` so an unchanged update sends them back as received.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Algorithm configuration entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmConfig {
    pub id: i64,
    pub config_name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    /// 1 = enabled, 0 = disabled
    pub status: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Algorithm step entity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_config_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_order: Option<i32>,
    /// Either a comma-separated string or an array, depending on the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula_ids: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AlgorithmStep {
    /// Copy of this step with `formulaIds` as the comma string the update
    /// endpoint expects
    pub fn with_normalized_formula_ids(&self) -> Self {
        let mut step = self.clone();
        step.formula_ids = Some(Value::String(normalize_formula_ids(
            self.formula_ids.as_ref(),
        )));
        step
    }
}

/// Flatten a `formulaIds` value into a comma-separated string.
///
/// Strings are kept as-is, arrays are joined with `,`, anything else
/// (including a missing value) becomes an empty string.
pub fn normalize_formula_ids(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(","),
        _ => String::new(),
    }
}

/// Formula configuration entity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula_expression: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Algorithm detail: configuration plus steps and formulas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmDetail {
    pub algorithm: AlgorithmConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<AlgorithmStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formulas: Vec<FormulaConfig>,
}

/// Create/update algorithm payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmPayload {
    /// Required for update, absent for create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub config_name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    pub steps: Vec<AlgorithmStep>,
    pub formulas: Vec<FormulaConfig>,
}

impl AlgorithmPayload {
    /// Build an update payload that rewrites the algorithm unchanged
    pub fn update_from_detail(detail: &AlgorithmDetail) -> Self {
        let algorithm = &detail.algorithm;
        Self {
            id: Some(algorithm.id),
            config_name: algorithm.config_name.clone(),
            description: algorithm.description.clone(),
            version: algorithm.version.clone(),
            status: algorithm.status,
            steps: detail
                .steps
                .iter()
                .map(AlgorithmStep::with_normalized_formula_ids)
                .collect(),
            formulas: detail.formulas.clone(),
        }
    }
}

/// Formula expression validation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaValidation {
    pub expression: String,
}

/// Copy algorithm request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmCopy {
    pub new_algorithm_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_formula_ids() {
        assert_eq!(normalize_formula_ids(Some(&json!("1,2,3"))), "1,2,3");
        assert_eq!(normalize_formula_ids(Some(&json!([4, 5]))), "4,5");
        assert_eq!(normalize_formula_ids(Some(&json!(["a", "b"]))), "a,b");
        assert_eq!(normalize_formula_ids(Some(&json!([]))), "");
        assert_eq!(normalize_formula_ids(Some(&json!(7))), "");
        assert_eq!(normalize_formula_ids(Some(&Value::Null)), "");
        assert_eq!(normalize_formula_ids(None), "");
    }

    #[test]
    fn test_detail_null_lists() {
        let detail: AlgorithmDetail = serde_json::from_value(json!({
            "algorithm": { "id": 3, "configName": "TOPSIS" },
            "steps": null
        }))
        .unwrap();
        assert_eq!(detail.algorithm.id, 3);
        assert!(detail.steps.is_empty());
        assert!(detail.formulas.is_empty());
    }

    #[test]
    fn test_update_payload_keeps_unknown_fields() {
        let detail: AlgorithmDetail = serde_json::from_value(json!({
            "algorithm": {
                "id": 9,
                "configName": "Capacity",
                "description": "desc",
                "version": "1.0",
                "status": 1,
                "createTime": "2024-01-01T00:00:00"
            },
            "steps": [
                { "id": 1, "stepName": "normalize", "stepOrder": 1, "formulaIds": [10, 11], "stepCode": "S1" },
                { "id": 2, "stepName": "weight", "stepOrder": 2, "formulaIds": "12" }
            ],
            "formulas": [ { "id": 10, "formulaName": "f", "formulaExpression": "a+b" } ]
        }))
        .unwrap();

        let payload = AlgorithmPayload::update_from_detail(&detail);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["id"], json!(9));
        assert_eq!(value["configName"], json!("Capacity"));
        assert_eq!(value["status"], json!(1));
        assert_eq!(value["steps"][0]["formulaIds"], json!("10,11"));
        assert_eq!(value["steps"][0]["stepCode"], json!("S1"));
        assert_eq!(value["steps"][1]["formulaIds"], json!("12"));
        assert_eq!(value["formulas"][0]["formulaExpression"], json!("a+b"));
        assert!(value.get("createTime").is_none());
    }
}

//! Thematic map Model

use serde::{Deserialize, Serialize};

/// Filter for thematic map data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThematicQuery {
    pub report_id: Option<i64>,
    pub region_ids: Option<Vec<i64>>,
    pub survey_id: Option<i64>,
    pub algorithm_id: Option<i64>,
}

/// Rendered map image to persist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapImage {
    /// Base64 image data
    pub image_data: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

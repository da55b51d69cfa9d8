//! Community capacity Model
//!
//! Filters for the community / administrative-village disaster reduction
//! capacity records.

use serde::{Deserialize, Serialize};

/// Paged listing filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub region_code: Option<String>,
    pub community_name: Option<String>,
}

/// Keyword search filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySearchQuery {
    pub keyword: Option<String>,
    pub region_code: Option<String>,
    pub community_name: Option<String>,
}

/// Province / city / county cascade selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCascade {
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_name: Option<String>,
}

impl RegionCascade {
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            ..Default::default()
        }
    }

    pub fn province(mut self, name: impl Into<String>) -> Self {
        self.province_name = Some(name.into());
        self
    }

    pub fn city(mut self, name: impl Into<String>) -> Self {
        self.city_name = Some(name.into());
        self
    }

    pub fn county(mut self, name: impl Into<String>) -> Self {
        self.county_name = Some(name.into());
        self
    }
}

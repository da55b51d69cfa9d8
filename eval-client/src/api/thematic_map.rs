//! Thematic map endpoints (`/api/thematic-map`)

use serde_json::Value;
use shared::models::{MapImage, ThematicQuery};

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/thematic-map";

pub struct ThematicMapApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ThematicMapApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn data(&self, query: &ThematicQuery) -> ClientResult<ApiEnvelope> {
        self.client
            .get_with_query(&format!("{BASE}/data"), query)
            .await
    }

    pub async fn boundaries(&self, region_ids: &[i64]) -> ClientResult<ApiEnvelope> {
        self.client
            .post(&format!("{BASE}/boundaries"), region_ids)
            .await
    }

    pub async fn save_image(&self, image: &MapImage) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/save-image"), image).await
    }

    /// Saved maps of one report, or of all reports when `report_id` is `None`
    pub async fn history(&self, report_id: Option<i64>) -> ClientResult<ApiEnvelope> {
        match report_id {
            Some(id) => self.client.get(&format!("{BASE}/history/{id}")).await,
            None => self.client.get(&format!("{BASE}/history")).await,
        }
    }

    pub async fn delete_record(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.delete(&format!("{BASE}/{id}")).await
    }

    pub async fn config(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/config")).await
    }

    pub async fn update_config(&self, config: &Value) -> ClientResult<ApiEnvelope> {
        self.client.put(&format!("{BASE}/config"), config).await
    }

    /// Tianditu base map settings (API key, layers)
    pub async fn tianditu_config(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/tianditu-config")).await
    }
}

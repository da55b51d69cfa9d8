//! Region endpoints (`/api/region`)
//!
//! Administrative region tree plus the province / city / county cascade used
//! to pick data by county.

use shared::models::RegionCascade;

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::transport::Transport;

const BASE: &str = "/api/region";

pub struct RegionApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> RegionApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn tree(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/tree")).await
    }

    pub async fn children(&self, parent_id: i64) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/children/{parent_id}")).await
    }

    pub async fn by_level(&self, level: i32) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/level/{level}")).await
    }

    pub async fn by_code(&self, code: &str) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/code/{code}")).await
    }

    pub async fn by_ids(&self, ids: &[i64]) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/batch"), ids).await
    }

    /// All enabled regions
    pub async fn all_enabled(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/all")).await
    }

    // ========== Cascade ==========

    pub async fn provinces(&self, data_type: &str) -> ClientResult<ApiEnvelope> {
        self.client
            .get_with_query(&format!("{BASE}/provinces"), &RegionCascade::new(data_type))
            .await
    }

    pub async fn cities(&self, data_type: &str, province_name: &str) -> ClientResult<ApiEnvelope> {
        let query = RegionCascade::new(data_type).province(province_name);
        self.client
            .get_with_query(&format!("{BASE}/cities"), &query)
            .await
    }

    pub async fn counties(
        &self,
        data_type: &str,
        province_name: &str,
        city_name: &str,
    ) -> ClientResult<ApiEnvelope> {
        let query = RegionCascade::new(data_type)
            .province(province_name)
            .city(city_name);
        self.client
            .get_with_query(&format!("{BASE}/counties"), &query)
            .await
    }

    /// Data of the selected county
    pub async fn data_by_county(&self, selection: &RegionCascade) -> ClientResult<ApiEnvelope> {
        self.client
            .get_with_query(&format!("{BASE}/data"), selection)
            .await
    }
}

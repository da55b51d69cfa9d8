//! Community disaster reduction capacity (`/api/community-capacity`)

use serde_json::Value;
use shared::models::{CapacityListQuery, CapacitySearchQuery};

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::request::{ApiRequest, FilePart, RawResponse};
use crate::transport::Transport;

const BASE: &str = "/api/community-capacity";

pub struct CommunityCapacityApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> CommunityCapacityApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Import an Excel workbook of capacity records
    pub async fn import(&self, file: FilePart) -> ClientResult<ApiEnvelope> {
        self.client.upload(&format!("{BASE}/import"), file).await
    }

    pub async fn list(&self, query: &CapacityListQuery) -> ClientResult<ApiEnvelope> {
        self.client
            .get_with_query(&format!("{BASE}/list"), query)
            .await
    }

    pub async fn search(&self, query: &CapacitySearchQuery) -> ClientResult<ApiEnvelope> {
        self.client
            .get_with_query(&format!("{BASE}/search"), query)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    pub async fn update(&self, id: i64, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.put(&format!("{BASE}/{id}"), data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.delete(&format!("{BASE}/{id}")).await
    }

    /// Delete several records; ids travel in the request body
    pub async fn batch_delete(&self, ids: &[i64]) -> ClientResult<ApiEnvelope> {
        self.client
            .delete_with_body(&format!("{BASE}/batch"), ids)
            .await
    }

    /// Blank import template
    pub async fn download_template(&self) -> ClientResult<RawResponse> {
        self.client
            .download(ApiRequest::get(format!("{BASE}/template")))
            .await
    }
}

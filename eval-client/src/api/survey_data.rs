//! Survey data endpoints (`/api/survey-data`)

use serde_json::Value;

use crate::api::ApiEnvelope;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::request::{ApiRequest, FilePart, RawResponse};
use crate::transport::Transport;

const BASE: &str = "/api/survey-data";

pub struct SurveyDataApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SurveyDataApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> ClientResult<ApiEnvelope> {
        self.client.get(BASE).await
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    pub async fn get_by_survey_name(&self, survey_name: &str) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/survey/{survey_name}")).await
    }

    pub async fn get_by_region(&self, region: &str) -> ClientResult<ApiEnvelope> {
        self.client.get(&format!("{BASE}/region/{region}")).await
    }

    pub async fn search(&self, keyword: &str) -> ClientResult<ApiEnvelope> {
        self.client
            .send_json(ApiRequest::get(format!("{BASE}/search")).query("keyword", keyword))
            .await
    }

    pub async fn create(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.post(BASE, data).await
    }

    pub async fn batch_create(&self, data: &[Value]) -> ClientResult<ApiEnvelope> {
        self.client.post(&format!("{BASE}/batch"), data).await
    }

    pub async fn update(&self, data: &Value) -> ClientResult<ApiEnvelope> {
        self.client.put(BASE, data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<ApiEnvelope> {
        self.client.delete(&format!("{BASE}/{id}")).await
    }

    pub async fn delete_by_survey_name(&self, survey_name: &str) -> ClientResult<ApiEnvelope> {
        self.client
            .delete(&format!("{BASE}/survey/{survey_name}"))
            .await
    }

    /// Import an Excel workbook
    pub async fn import(&self, file: FilePart) -> ClientResult<ApiEnvelope> {
        self.client.upload(&format!("{BASE}/import"), file).await
    }

    /// Export all survey data as an Excel workbook
    pub async fn export_all(&self) -> ClientResult<RawResponse> {
        self.client
            .download(ApiRequest::get(format!("{BASE}/export/all")))
            .await
    }
}

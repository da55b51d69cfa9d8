//! Transport primitive
//!
//! Sends one [`ApiRequest`] and returns whatever came back, any status.
//! Deciding what a status or body means is the interceptor's job.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::request::{ApiRequest, FilePart, RawResponse, RequestBody};

/// Sends requests to the evaluation service
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Network transport over reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn multipart_form(part: &FilePart) -> Result<Form, reqwest::Error> {
    let mut file = Part::bytes(part.bytes.clone()).file_name(part.file_name.clone());
    if let Some(mime) = &part.mime {
        file = file.mime_str(mime)?;
    }
    Ok(Form::new().part(part.field.clone(), file))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.url(&request.path);
        let mut req = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }
        req = match &request.body {
            RequestBody::Empty => req,
            RequestBody::Json(body) => req.json(body),
            RequestBody::Multipart(part) => req.multipart(multipart_form(part)?),
        };

        tracing::debug!(method = %request.method, url = %url, "Sending request");
        let response = req.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::from(err).with_status(status))?;

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
            response_type: request.response_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let transport =
            ReqwestTransport::new(&ClientConfig::new("http://localhost:8081/")).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8081");
        assert_eq!(
            transport.url("/api/survey-data"),
            "http://localhost:8081/api/survey-data"
        );
        assert_eq!(transport.url("health"), "http://localhost:8081/health");
        assert_eq!(transport.url("/"), "http://localhost:8081/");
    }
}

//! Request description and raw response
//!
//! `ApiRequest` is what endpoint wrappers hand to the client; `RawResponse`
//! is what a transport hands back before the interceptor looks at it.

use std::time::Duration;

use http::{HeaderMap, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// How the caller wants the response body treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    /// JSON envelope, checked by the interceptor
    #[default]
    Json,
    /// File download, returned untouched
    Blob,
}

/// File attached as a multipart form field
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// File under the `file` field, which is what every upload endpoint reads
    pub fn file(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            field: "file".to_string(),
            file_name: file_name.into(),
            mime: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(FilePart),
}

/// One call to the remote service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/api/survey-data`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub response_type: ResponseType,
    /// Overrides the client's default timeout for this call
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            response_type: ResponseType::Json,
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter only when it has a value
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Append every field of a serializable struct as query parameters.
    ///
    /// `null` fields are skipped and arrays become repeated keys.
    pub fn query_params<Q: Serialize + ?Sized>(mut self, params: &Q) -> serde_json::Result<Self> {
        let Value::Object(map) = serde_json::to_value(params)? else {
            return Err(serde::ser::Error::custom(
                "query parameters must serialize to an object",
            ));
        };
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items.into_iter().filter(|v| !v.is_null()) {
                        self.query.push((key.clone(), scalar_to_string(item)));
                    }
                }
                other => self.query.push((key, scalar_to_string(other))),
            }
        }
        Ok(self)
    }

    /// Set a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> serde_json::Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Set a multipart body with a single file
    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = RequestBody::Multipart(part);
        self
    }

    /// Mark the response as a binary download
    pub fn blob(mut self) -> Self {
        self.response_type = ResponseType::Blob;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Response exactly as the transport received it
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Copied from the request that produced this response
    pub response_type: ResponseType,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
            response_type: ResponseType::Json,
        }
    }

    /// Response with a JSON-encoded body
    pub fn json_body(status: StatusCode, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    /// Body parsed leniently: JSON when valid, `null` when empty, otherwise
    /// the text as a JSON string
    pub fn json(&self) -> Value {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Value::Null;
        }
        serde_json::from_slice(&self.body).unwrap_or_else(|_| Value::String(self.text()))
    }

    /// Body as UTF-8 text, lossy
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Value of the `Content-Type` header
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Filter {
        report_id: Option<i64>,
        region_ids: Option<Vec<i64>>,
        keyword: &'static str,
        enabled: bool,
    }

    #[test]
    fn test_query_params_flattening() {
        let mut query = ApiRequest::get("/api/thematic-map/data")
            .query_params(&Filter {
                report_id: None,
                region_ids: Some(vec![3, 4]),
                keyword: "flood",
                enabled: true,
            })
            .unwrap()
            .query;
        query.sort();

        assert_eq!(
            query,
            vec![
                ("enabled".to_string(), "true".to_string()),
                ("keyword".to_string(), "flood".to_string()),
                ("regionIds".to_string(), "3".to_string()),
                ("regionIds".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_rejects_non_object() {
        assert!(ApiRequest::get("/").query_params(&[1, 2]).is_err());
    }

    #[test]
    fn test_query_opt() {
        let req = ApiRequest::get("/api/algorithm/management/formulas")
            .query_opt("formulaType", None::<&str>)
            .query_opt("page", Some(2));
        assert_eq!(req.query, vec![("page".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_builder_defaults() {
        let req = ApiRequest::post("/api/weight-config/validate")
            .json(&json!({ "a": 1 }))
            .unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.response_type, ResponseType::Json);
        assert_eq!(req.body, RequestBody::Json(json!({ "a": 1 })));
        assert!(req.timeout.is_none());

        let req = ApiRequest::get("/api/survey-data/export/all")
            .blob()
            .timeout(Duration::from_secs(5));
        assert_eq!(req.response_type, ResponseType::Blob);
        assert_eq!(req.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_raw_response_json_is_lenient() {
        assert_eq!(RawResponse::new(StatusCode::OK, "").json(), Value::Null);
        assert_eq!(RawResponse::new(StatusCode::OK, "  \n").json(), Value::Null);
        assert_eq!(
            RawResponse::new(StatusCode::OK, "plain text").json(),
            json!("plain text")
        );
        assert_eq!(
            RawResponse::new(StatusCode::OK, r#"{"data":[1,2,3]}"#).json(),
            json!({ "data": [1, 2, 3] })
        );
    }
}

//! Response/error interceptor
//!
//! Every call goes through three hooks:
//!
//! - **request**: identity, the place to inject headers later
//! - **response** (2xx): binary downloads pass through untouched; a JSON
//!   object with `success: false` becomes [`ClientError::Rejected`];
//!   anything else is returned as the body itself
//! - **error** (transport failure or non-2xx): classified as timeout, HTTP
//!   status, connectivity or configuration, then handed back unchanged
//!
//! Each failed call produces exactly one notification. Successful calls
//! produce none. Nothing is retried here.

use std::sync::Arc;
use std::time::Duration;

use http::StatusCode;
use serde_json::Value;

use crate::error::{ClientError, ClientResult, TransportError};
use crate::notify::Notifier;
use crate::request::{ApiRequest, RawResponse, ResponseType};
use shared::DEFAULT_FAILURE_MESSAGE;

pub const MSG_BAD_REQUEST: &str = "request parameter error";
pub const MSG_UNAUTHORIZED: &str = "unauthorized, please log in again";
pub const MSG_FORBIDDEN: &str = "access denied";
pub const MSG_NOT_FOUND: &str = "requested resource not found";
pub const MSG_SERVER_ERROR: &str = "internal server error";
pub const MSG_NETWORK_ERROR: &str = "network error";
pub const MSG_CONNECTION_FAILED: &str = "network connection failed, please check the network";
pub const MSG_CONFIG_ERROR: &str = "request configuration error";

/// What a successful call yields
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Parsed body, exactly as the server sent it
    Body(Value),
    /// Untouched response of a binary download
    Raw(RawResponse),
}

/// Classification of a transport failure, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Status(StatusCode),
    /// Request went out, no response came back
    Connectivity,
    /// Request was never sent
    Configuration,
}

/// Classify a transport failure
pub fn classify(error: &TransportError) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if let Some(status) = error.status() {
        FailureKind::Status(status)
    } else if error.request_sent {
        FailureKind::Connectivity
    } else {
        FailureKind::Configuration
    }
}

/// Fixed text for an error status without a server message
pub fn status_fallback(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => MSG_BAD_REQUEST,
        StatusCode::UNAUTHORIZED => MSG_UNAUTHORIZED,
        StatusCode::FORBIDDEN => MSG_FORBIDDEN,
        StatusCode::NOT_FOUND => MSG_NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR => MSG_SERVER_ERROR,
        _ => MSG_NETWORK_ERROR,
    }
}

/// Text shown when a request times out
pub fn timeout_message(timeout: Duration) -> String {
    format!(
        "request timed out, please retry later (current timeout: {}ms)",
        timeout.as_millis()
    )
}

/// Normalizes responses and reports failures
#[derive(Clone)]
pub struct Interceptor {
    notifier: Arc<dyn Notifier>,
    timeout: Duration,
}

impl std::fmt::Debug for Interceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interceptor")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Interceptor {
    /// `timeout` is the configured default, quoted in timeout notifications
    pub fn new(notifier: Arc<dyn Notifier>, timeout: Duration) -> Self {
        Self { notifier, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Request hook
    pub fn on_request(&self, request: ApiRequest) -> ApiRequest {
        tracing::trace!(method = %request.method, path = %request.path, "Request intercepted");
        request
    }

    /// Response hook for 2xx responses
    pub fn on_response(&self, response: RawResponse) -> ClientResult<Outcome> {
        if response.response_type == ResponseType::Blob {
            return Ok(Outcome::Raw(response));
        }

        let body = response.json();
        if let Value::Object(map) = &body
            && map.get("success") == Some(&Value::Bool(false))
        {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                .to_string();
            tracing::warn!(status = %response.status, message = %message, "Request rejected by server");
            self.notifier.report(&message);
            return Err(ClientError::Rejected { message });
        }

        Ok(Outcome::Body(body))
    }

    /// Error hook for transport failures and non-2xx responses
    pub fn on_error(&self, error: TransportError) -> ClientError {
        let kind = classify(&error);
        tracing::warn!(kind = ?kind, code = ?error.code, error = %error, "Request failed");
        self.notifier.report(&self.failure_text(kind, &error));
        ClientError::Transport(error)
    }

    /// Notification text for a classified failure
    pub fn failure_text(&self, kind: FailureKind, error: &TransportError) -> String {
        match kind {
            FailureKind::Timeout => timeout_message(self.timeout),
            FailureKind::Status(status) => error
                .server_message()
                .unwrap_or_else(|| status_fallback(status))
                .to_string(),
            FailureKind::Connectivity => MSG_CONNECTION_FAILED.to_string(),
            FailureKind::Configuration => MSG_CONFIG_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::CollectingNotifier;
    use serde_json::json;

    fn setup() -> (Arc<CollectingNotifier>, Interceptor) {
        let notifier = Arc::new(CollectingNotifier::new());
        let interceptor = Interceptor::new(notifier.clone(), Duration::from_millis(60_000));
        (notifier, interceptor)
    }

    fn status_error(status: StatusCode, body: Value) -> TransportError {
        TransportError::from_status(RawResponse::json_body(status, &body))
    }

    #[test]
    fn test_request_hook_is_identity() {
        let (notifier, interceptor) = setup();
        let request = ApiRequest::get("/api/region/tree").query("level", 2);
        assert_eq!(interceptor.on_request(request.clone()), request);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_logical_failure_rejects_with_message() {
        let (notifier, interceptor) = setup();
        let response = RawResponse::json_body(
            StatusCode::OK,
            &json!({ "success": false, "message": "name already exists" }),
        );

        let err = interceptor.on_response(response).unwrap_err();
        assert!(matches!(&err, ClientError::Rejected { message } if message == "name already exists"));
        assert_eq!(notifier.messages(), vec!["name already exists"]);
    }

    #[test]
    fn test_logical_failure_without_message_uses_fallback() {
        let (notifier, interceptor) = setup();
        for body in [
            json!({ "success": false }),
            json!({ "success": false, "message": "" }),
            json!({ "success": false, "message": null }),
        ] {
            let err = interceptor
                .on_response(RawResponse::json_body(StatusCode::OK, &body))
                .unwrap_err();
            assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);
        }
        assert_eq!(notifier.len(), 3);
        assert!(notifier.messages().iter().all(|m| m == DEFAULT_FAILURE_MESSAGE));
    }

    #[test]
    fn test_success_returns_body_unchanged() {
        let (notifier, interceptor) = setup();
        for body in [
            json!({ "data": [1, 2, 3] }),
            json!({ "success": true, "message": "ok", "data": { "id": 1 } }),
            json!({ "success": "false" }),
            json!({ "success": null }),
            json!([{ "success": false }]),
            json!("plain"),
        ] {
            let outcome = interceptor
                .on_response(RawResponse::json_body(StatusCode::OK, &body))
                .unwrap();
            assert_eq!(outcome, Outcome::Body(body));
        }
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_empty_body_is_null() {
        let (notifier, interceptor) = setup();
        let outcome = interceptor
            .on_response(RawResponse::new(StatusCode::NO_CONTENT, ""))
            .unwrap();
        assert_eq!(outcome, Outcome::Body(Value::Null));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_blob_passes_through() {
        let (notifier, interceptor) = setup();
        let response = RawResponse::json_body(
            StatusCode::OK,
            &json!({ "success": false, "message": "ignored" }),
        )
        .with_response_type(ResponseType::Blob);

        let outcome = interceptor.on_response(response.clone()).unwrap();
        assert_eq!(outcome, Outcome::Raw(response));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_classification_precedence() {
        // timeout wins over an attached response
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, json!({}))
            .with_code(crate::error::TIMEOUT_CODE);
        assert_eq!(classify(&err), FailureKind::Timeout);

        let err = status_error(StatusCode::NOT_FOUND, json!({}));
        assert_eq!(classify(&err), FailureKind::Status(StatusCode::NOT_FOUND));

        let err = TransportError::no_response("connection refused");
        assert_eq!(classify(&err), FailureKind::Connectivity);

        let err = TransportError::config("relative URL without a base");
        assert_eq!(classify(&err), FailureKind::Configuration);

        let err = TransportError::config("builder timeout misconfigured");
        assert_eq!(classify(&err), FailureKind::Timeout);
    }

    #[test]
    fn test_timeout_notification_quotes_configured_timeout() {
        let notifier = Arc::new(CollectingNotifier::new());
        let interceptor = Interceptor::new(notifier.clone(), Duration::from_millis(15_000));
        let original = TransportError::timeout("operation timed out");

        let err = interceptor.on_error(original.clone());
        assert!(matches!(&err, ClientError::Transport(e) if e.message == original.message));
        assert!(err.is_timeout());

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("15000"));
        assert_eq!(messages[0], timeout_message(Duration::from_millis(15_000)));
    }

    #[test]
    fn test_timeout_matched_by_message() {
        let (notifier, interceptor) = setup();
        interceptor.on_error(TransportError::no_response("timeout of 60000ms exceeded"));
        assert!(notifier.messages()[0].contains("60000ms"));
    }

    #[test]
    fn test_status_404_fallback_and_server_message() {
        let (notifier, interceptor) = setup();

        let err = interceptor.on_error(status_error(StatusCode::NOT_FOUND, Value::Null));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        let err = interceptor.on_error(status_error(StatusCode::NOT_FOUND, json!({ "message": "X" })));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        assert_eq!(notifier.messages(), vec![MSG_NOT_FOUND, "X"]);
    }

    #[test]
    fn test_status_fallbacks() {
        let (notifier, interceptor) = setup();
        let cases = [
            (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST),
            (StatusCode::UNAUTHORIZED, MSG_UNAUTHORIZED),
            (StatusCode::FORBIDDEN, MSG_FORBIDDEN),
            (StatusCode::NOT_FOUND, MSG_NOT_FOUND),
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR),
            (StatusCode::BAD_GATEWAY, MSG_NETWORK_ERROR),
            (StatusCode::CONFLICT, MSG_NETWORK_ERROR),
        ];
        for (status, _) in cases {
            interceptor.on_error(status_error(status, json!({ "error": "ignored" })));
        }
        let expected: Vec<&str> = cases.iter().map(|(_, text)| *text).collect();
        assert_eq!(notifier.messages(), expected);
    }

    #[test]
    fn test_server_message_wins_for_any_status() {
        let (notifier, interceptor) = setup();
        interceptor.on_error(status_error(
            StatusCode::BAD_REQUEST,
            json!({ "message": "surveyId is required" }),
        ));
        interceptor.on_error(status_error(
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "message": "maintenance" }),
        ));
        assert_eq!(notifier.messages(), vec!["surveyId is required", "maintenance"]);
    }

    #[test]
    fn test_connectivity_and_configuration() {
        let (notifier, interceptor) = setup();
        let err = interceptor.on_error(TransportError::no_response("connection refused"));
        assert_eq!(err.to_string(), "connection refused");
        let err = interceptor.on_error(TransportError::config("builder error"));
        assert_eq!(err.to_string(), "builder error");
        assert_eq!(notifier.messages(), vec![MSG_CONNECTION_FAILED, MSG_CONFIG_ERROR]);
    }

    #[test]
    fn test_repeated_calls_are_not_deduplicated() {
        let (notifier, interceptor) = setup();
        let ok = RawResponse::json_body(StatusCode::OK, &json!({ "data": { "x": 1 } }));
        let first = interceptor.on_response(ok.clone()).unwrap();
        let second = interceptor.on_response(ok).unwrap();
        assert_eq!(first, second);
        assert!(notifier.is_empty());

        let failing = RawResponse::json_body(
            StatusCode::OK,
            &json!({ "success": false, "message": "weights must sum to 1" }),
        );
        assert!(interceptor.on_response(failing.clone()).is_err());
        assert!(interceptor.on_response(failing).is_err());
        assert_eq!(notifier.len(), 2);

        let err = TransportError::no_response("reset by peer");
        interceptor.on_error(err.clone());
        interceptor.on_error(err);
        assert_eq!(notifier.len(), 4);
    }
}

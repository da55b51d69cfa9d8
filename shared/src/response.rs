//! API envelope types
//!
//! Every JSON endpoint of the evaluation service answers with the same loose
//! envelope:
//! ```json
//! {
//!     "code": 200,
//!     "success": true,
//!     "message": "ok",
//!     "data": { ... },
//!     "timestamp": 1700000000000
//! }
//! ```
//! All fields are optional. A missing `success` means success.

use serde::{Deserialize, Serialize};

/// Fallback text when a failed envelope carries no message
pub const DEFAULT_FAILURE_MESSAGE: &str = "request failed";

/// Unified response envelope of the evaluation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Business status flag; `None` is treated as success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response payload, shape defined by each endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Numeric result code echoed by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    /// Server time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl<T> Envelope<T> {
    /// Create a successful envelope
    pub fn ok(data: T) -> Self {
        Self {
            success: Some(true),
            message: None,
            data: Some(data),
            code: Some(200),
            timestamp: None,
        }
    }

    /// Create a failed envelope
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            message: Some(message.into()),
            data: None,
            code: Some(500),
            timestamp: None,
        }
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// True only when `success` is explicitly `false`
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// Message for display, or the generic fallback
    pub fn message_or_default(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_FAILURE_MESSAGE,
        }
    }

    /// Take the payload out of the envelope
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Transform the payload, keeping the envelope metadata
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            code: self.code,
            timestamp: self.timestamp,
        }
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            success: None,
            message: None,
            data: None,
            code: None,
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_missing_success_is_not_failure() {
        let env: Envelope<Vec<i32>> = serde_json::from_value(json!({ "data": [1, 2, 3] })).unwrap();
        assert!(!env.is_failure());
        assert_eq!(env.into_data(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_explicit_false_is_failure() {
        let env: Envelope<Value> =
            serde_json::from_value(json!({ "success": false, "message": "name already exists" }))
                .unwrap();
        assert!(env.is_failure());
        assert_eq!(env.message_or_default(), "name already exists");
        assert!(env.data.is_none());
    }

    #[test]
    fn test_empty_message_uses_fallback() {
        let env: Envelope<Value> = Envelope::failure("");
        assert_eq!(env.message_or_default(), DEFAULT_FAILURE_MESSAGE);
        let env: Envelope<Value> = Envelope::default();
        assert_eq!(env.message_or_default(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_server_result_shape() {
        let env: Envelope<Value> = serde_json::from_value(json!({
            "code": 200,
            "message": "操作成功",
            "data": null,
            "success": true,
            "timestamp": 1700000000000i64
        }))
        .unwrap();
        assert_eq!(env.code, Some(200));
        assert_eq!(env.success, Some(true));
        assert!(env.data.is_none());
        assert_eq!(env.timestamp, Some(1_700_000_000_000));
    }

    #[test]
    fn test_ok_skips_empty_fields() {
        let value = serde_json::to_value(Envelope::ok(7)).unwrap();
        assert_eq!(value, json!({ "success": true, "data": 7, "code": 200 }));
    }

    #[test]
    fn test_map_keeps_metadata() {
        let env = Envelope::ok(2).with_message("done").map(|n| n * 10);
        assert_eq!(env.data, Some(20));
        assert_eq!(env.message.as_deref(), Some("done"));
    }
}

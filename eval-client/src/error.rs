//! Client error types

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::request::RawResponse;

/// Machine code the transport attaches to a timed-out request
pub const TIMEOUT_CODE: &str = "ECONNABORTED";

/// Response that came back with a non-2xx status
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: StatusCode,
    /// Parsed body (JSON when possible, otherwise the text)
    pub body: Value,
}

/// Failure reported by the transport.
///
/// Carries the same information a caller needs to branch on: an optional
/// machine code, a message, the error response if one arrived, and whether
/// the request ever left the client.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    /// Machine-readable code, e.g. [`TIMEOUT_CODE`]
    pub code: Option<String>,
    /// Human-readable description from the transport
    pub message: String,
    /// Present when the server answered with an error status
    pub response: Option<ErrorResponse>,
    /// False when the request could not even be built or sent
    pub request_sent: bool,
}

impl TransportError {
    /// Request timed out
    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            code: Some(TIMEOUT_CODE.to_string()),
            message: message.into(),
            response: None,
            request_sent: true,
        }
    }

    /// Server answered with a non-2xx status
    pub fn from_status(response: RawResponse) -> Self {
        let status = response.status;
        Self {
            code: None,
            message: format!("Request failed with status code {}", status.as_u16()),
            response: Some(ErrorResponse {
                status,
                body: response.json(),
            }),
            request_sent: true,
        }
    }

    /// Request went out but nothing came back
    pub fn no_response(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            response: None,
            request_sent: true,
        }
    }

    /// Request could not be built
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            response: None,
            request_sent: false,
        }
    }

    /// Set the machine code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the status of a response whose body could not be read
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.response = Some(ErrorResponse {
            status,
            body: Value::Null,
        });
        self
    }

    /// Structured timeout code, or "timeout" anywhere in the message
    pub fn is_timeout(&self) -> bool {
        self.code.as_deref() == Some(TIMEOUT_CODE)
            || self.message.to_ascii_lowercase().contains("timeout")
    }

    /// HTTP status of the error response, if any
    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_ref().map(|r| r.status)
    }

    /// Non-empty `message` field of the error response body
    pub fn server_message(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.body.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let (timed_out, builder) = (err.is_timeout(), err.is_builder());
        // the URL carries user input and must not reach the timeout text match
        let message = err.without_url().to_string();
        if timed_out {
            Self::timeout(message)
        } else if builder {
            Self::config(message)
        } else {
            Self::no_response(message)
        }
    }
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server reported a business failure (`success: false`)
    #[error("{message}")]
    Rejected { message: String },

    /// Transport-level failure, passed through unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Outcome did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Body did not match the requested type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of the underlying error response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Machine code of the underlying transport error
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Transport(err) => err.code.as_deref(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

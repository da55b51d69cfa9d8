//! Eval Client - HTTP client for the community capacity evaluation service
//!
//! Typed endpoint wrappers over a single [`ApiClient`]. Every call passes
//! through the [`Interceptor`], which turns the service's
//! `{success, message, data}` envelope and transport failures into one
//! predictable result and reports each failure once through a [`Notifier`].

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod logger;
pub mod notify;
pub mod request;
pub mod routes;
pub mod transport;
pub mod verify;

pub use api::ApiEnvelope;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorResponse, TransportError};
pub use http::ApiClient;
pub use interceptor::{FailureKind, Interceptor, Outcome};
pub use notify::{CollectingNotifier, Notifier, TracingNotifier};
pub use request::{ApiRequest, FilePart, RawResponse, RequestBody, ResponseType};
pub use transport::{ReqwestTransport, Transport};

// Re-export shared types for convenience
pub use shared::Envelope;
pub use shared::models;

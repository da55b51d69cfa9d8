//! Shared types for the evaluation client
//!
//! Response envelope and request/response models of the evaluation service.

pub mod models;
pub mod response;

// Re-exports
pub use response::{DEFAULT_FAILURE_MESSAGE, Envelope};
pub use serde::{Deserialize, Serialize};

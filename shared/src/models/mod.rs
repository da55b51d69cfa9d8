//! Data models
//!
//! Request and response shapes of the evaluation service that the client
//! reads or builds. All IDs are `i64` (server `Long`). JSON uses camelCase.

pub mod algorithm;
pub mod community;
pub mod evaluation;
pub mod execution;
pub mod thematic_map;

// Re-exports
pub use algorithm::*;
pub use community::*;
pub use evaluation::*;
pub use execution::*;
pub use thematic_map::*;

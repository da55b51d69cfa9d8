//! Manual check of the algorithm update flow against a running service.
//!
//! Usage: `verify-update [BASE_URL]`. The base URL falls back to
//! `VERIFY_BASE_URL`, then `http://localhost:8083`.

use std::sync::Arc;

use eval_client::logger::init_logger_with_level;
use eval_client::verify::{VerifyOutcome, verify_update};
use eval_client::{ApiClient, ClientConfig, TracingNotifier};

const DEFAULT_VERIFY_URL: &str = "http://localhost:8083";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger_with_level(Some("info"), false);

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VERIFY_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_VERIFY_URL.to_string());
    let config = ClientConfig::from_env().with_base_url(base_url);
    tracing::info!(base_url = %config.base_url, timeout_ms = %config.timeout_ms(), "Verifying algorithm update flow");

    let client = ApiClient::new(config, Arc::new(TracingNotifier))?;
    match verify_update(&client.algorithm_management()).await? {
        VerifyOutcome::NoAlgorithms => {
            tracing::warn!("No algorithms available, nothing to verify");
        }
        VerifyOutcome::DetailFailed {
            algorithm_id,
            message,
        } => {
            anyhow::bail!("detail of algorithm {algorithm_id} failed: {message}");
        }
        VerifyOutcome::UpdateRejected {
            algorithm_id,
            message,
        } => {
            anyhow::bail!("update of algorithm {algorithm_id} rejected: {message}");
        }
        VerifyOutcome::Updated {
            algorithm_id,
            config_name,
            response,
        } => {
            tracing::info!(
                algorithm_id,
                name = ?config_name,
                response = %serde_json::to_string(&response)?,
                "Update round trip succeeded"
            );
        }
    }

    Ok(())
}

//! End-to-end check of the algorithm update flow
//!
//! Lists algorithms, loads the first one's detail and writes it back
//! unchanged. A healthy backend accepts the round trip.

use serde_json::Value;
use shared::models::AlgorithmPayload;

use crate::api::{AlgorithmManagementApi, ApiEnvelope};
use crate::error::{ClientError, ClientResult};
use crate::transport::Transport;

/// How the verification run ended
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyOutcome {
    /// The list was empty or carried no data
    NoAlgorithms,
    /// The server rejected the detail request
    DetailFailed { algorithm_id: i64, message: String },
    /// The server rejected the update
    UpdateRejected { algorithm_id: i64, message: String },
    /// The update was sent and accepted
    Updated {
        algorithm_id: i64,
        config_name: Option<String>,
        response: ApiEnvelope<Value>,
    },
}

/// Run list → detail → update against the first algorithm
pub async fn verify_update<T: Transport>(
    api: &AlgorithmManagementApi<'_, T>,
) -> ClientResult<VerifyOutcome> {
    let list = api.list().await?;
    let Some(algorithm) = list.into_data().and_then(|items| items.into_iter().next()) else {
        tracing::info!("No algorithms returned by the list endpoint");
        return Ok(VerifyOutcome::NoAlgorithms);
    };
    let algorithm_id = algorithm.id;
    tracing::info!(algorithm_id, name = ?algorithm.config_name, "Using algorithm");

    let detail = match api.detail(algorithm_id).await {
        Ok(envelope) => envelope.into_data(),
        Err(ClientError::Rejected { message }) => {
            return Ok(VerifyOutcome::DetailFailed {
                algorithm_id,
                message,
            });
        }
        Err(err) => return Err(err),
    };
    let Some(detail) = detail else {
        return Ok(VerifyOutcome::DetailFailed {
            algorithm_id,
            message: "detail response carried no data".into(),
        });
    };

    let payload = AlgorithmPayload::update_from_detail(&detail);
    tracing::debug!(steps = payload.steps.len(), formulas = payload.formulas.len(), "Sending update");
    let response = match api.update(&payload).await {
        Ok(envelope) => envelope,
        Err(ClientError::Rejected { message }) => {
            tracing::warn!(algorithm_id, message = %message, "Update rejected");
            return Ok(VerifyOutcome::UpdateRejected {
                algorithm_id,
                message,
            });
        }
        Err(err) => return Err(err),
    };
    tracing::info!(algorithm_id, message = ?response.message, "Update accepted");

    Ok(VerifyOutcome::Updated {
        algorithm_id,
        config_name: payload.config_name,
        response,
    })
}

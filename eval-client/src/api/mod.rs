//! Endpoint wrappers
//!
//! One group per area of the evaluation service. Each group borrows the
//! client, shapes path/query/body and delegates; none of them add behavior
//! of their own.
//!
//! ```no_run
//! use std::sync::Arc;
//! use eval_client::{ApiClient, ClientConfig, TracingNotifier};
//!
//! # async fn example() -> Result<(), eval_client::ClientError> {
//! let client = ApiClient::new(ClientConfig::from_env(), Arc::new(TracingNotifier))?;
//! let tree = client.region().tree().await?;
//! # Ok(())
//! # }
//! ```

mod algorithm_config;
mod algorithm_execution;
mod algorithm_management;
mod community_capacity;
mod evaluation;
mod indicator_weight;
mod model_management;
mod region;
mod step_execution;
mod survey_data;
mod system;
mod thematic_map;
mod weight_config;

pub use algorithm_config::AlgorithmConfigApi;
pub use algorithm_execution::AlgorithmExecutionApi;
pub use algorithm_management::AlgorithmManagementApi;
pub use community_capacity::CommunityCapacityApi;
pub use evaluation::EvaluationApi;
pub use indicator_weight::IndicatorWeightApi;
pub use model_management::ModelManagementApi;
pub use region::RegionApi;
pub use step_execution::StepExecutionApi;
pub use survey_data::SurveyDataApi;
pub use system::SystemApi;
pub use thematic_map::ThematicMapApi;
pub use weight_config::WeightConfigApi;

use serde_json::Value;
use shared::Envelope;

use crate::http::ApiClient;
use crate::transport::Transport;

/// Envelope with an untyped payload, for endpoints whose data shape the
/// client does not interpret
pub type ApiEnvelope<V = Value> = Envelope<V>;

impl<T: Transport> ApiClient<T> {
    pub fn system(&self) -> SystemApi<'_, T> {
        SystemApi::new(self)
    }

    pub fn survey_data(&self) -> SurveyDataApi<'_, T> {
        SurveyDataApi::new(self)
    }

    pub fn weight_config(&self) -> WeightConfigApi<'_, T> {
        WeightConfigApi::new(self)
    }

    pub fn indicator_weight(&self) -> IndicatorWeightApi<'_, T> {
        IndicatorWeightApi::new(self)
    }

    pub fn region(&self) -> RegionApi<'_, T> {
        RegionApi::new(self)
    }

    pub fn evaluation(&self) -> EvaluationApi<'_, T> {
        EvaluationApi::new(self)
    }

    pub fn algorithm_execution(&self) -> AlgorithmExecutionApi<'_, T> {
        AlgorithmExecutionApi::new(self)
    }

    pub fn algorithm_config(&self) -> AlgorithmConfigApi<'_, T> {
        AlgorithmConfigApi::new(self)
    }

    pub fn algorithm_management(&self) -> AlgorithmManagementApi<'_, T> {
        AlgorithmManagementApi::new(self)
    }

    pub fn thematic_map(&self) -> ThematicMapApi<'_, T> {
        ThematicMapApi::new(self)
    }

    pub fn step_execution(&self) -> StepExecutionApi<'_, T> {
        StepExecutionApi::new(self)
    }

    pub fn community_capacity(&self) -> CommunityCapacityApi<'_, T> {
        CommunityCapacityApi::new(self)
    }

    pub fn model_management(&self) -> ModelManagementApi<'_, T> {
        ModelManagementApi::new(self)
    }
}

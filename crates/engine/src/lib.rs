//! `shelfwise-engine`
//!
//! **Responsibility:** the public estimation entry point.
//!
//! Pipeline per item: oracle (one attempt, time-bounded) → on any failure the
//! heuristic rule table → shelf-life cap and restock clamp → dated result
//! tagged with its source. Valid input always yields a result; the only
//! rejected calls are invalid inputs.

pub mod batch;
pub mod config;
pub mod orchestrator;

pub use batch::{BatchConfig, BatchEntry};
pub use config::EngineConfig;
pub use orchestrator::Estimator;

pub use shelfwise_core::{
    EstimationError, EstimationInput, EstimationOutcome, EstimationRequest, EstimationResponse,
    EstimationResult, HorizonPair, ItemId, Source,
};
pub use shelfwise_oracle::{ExternalEstimator, OracleConfig, OracleOutcome, UnavailableReason};

//! `shelfwise-core` — estimation data model building blocks.
//!
//! This crate contains **pure** value types and calendar math (no I/O, no oracle,
//! no rule data). Higher crates compose these into the estimation pipeline.

pub mod dates;
pub mod error;
pub mod estimation;
pub mod horizon;
pub mod id;

pub use dates::{MAX_SHELF_LIFE_DAYS, ProjectedDates, add_days, project};
pub use error::{EstimationError, EstimationOutcome};
pub use estimation::{
    EstimationInput, EstimationRequest, EstimationResponse, EstimationResult, Source,
};
pub use horizon::HorizonPair;
pub use id::ItemId;

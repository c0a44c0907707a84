//! Batch estimation: one task per line item, bounded fan-out.
//!
//! Results are collected in completion order; each carries the `ItemId` it was
//! submitted with, which is the only association that matters. Dropping the
//! returned future aborts every outstanding task (and its oracle call); results
//! already produced are independent and safe to discard.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::{Id, JoinSet};
use tracing::{error, info};

use shelfwise_core::{
    EstimationInput, EstimationOutcome, EstimationRequest, EstimationResult, ItemId,
};
use shelfwise_oracle::ExternalEstimator;

use crate::orchestrator::Estimator;

pub const ENV_MAX_IN_FLIGHT: &str = "SHELFWISE_BATCH_MAX_IN_FLIGHT";

/// One line item's outcome.
pub type BatchEntry = (ItemId, EstimationOutcome<EstimationResult>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Maximum concurrent estimations (and therefore oracle calls). At least 1.
    pub max_in_flight: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_in_flight: 16 }
    }
}

impl BatchConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_in_flight = lookup(ENV_MAX_IN_FLIGHT)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(Self::default().max_in_flight);
        Self::default().with_max_in_flight(max_in_flight)
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }
}

impl<O: ExternalEstimator + Clone> Estimator<O> {
    /// Estimate many items concurrently, at most `max_in_flight` at a time
    /// (see [`Estimator::with_batch`]).
    ///
    /// Invalid requests are answered immediately with `InvalidInput` and never
    /// reach the oracle. Every submitted item gets exactly one entry back.
    pub async fn estimate_batch(
        &self,
        items: impl IntoIterator<Item = (ItemId, EstimationRequest)>,
    ) -> Vec<BatchEntry> {
        let config = &self.batch;
        let permits = Arc::new(Semaphore::new(config.max_in_flight.max(1)));
        let mut tasks: JoinSet<(ItemId, EstimationResult)> = JoinSet::new();
        let mut pending: HashMap<Id, (ItemId, EstimationInput)> = HashMap::new();
        let mut out: Vec<BatchEntry> = Vec::new();

        for (id, request) in items {
            let input = match request.into_input() {
                Ok(input) => input,
                Err(e) => {
                    out.push((id, Err(e)));
                    continue;
                }
            };

            let estimator = self.clone();
            let permits = permits.clone();
            let task_input = input.clone();
            let handle = tasks.spawn(async move {
                // The semaphore is never closed, so acquire only fails if it were.
                let _permit = permits.acquire_owned().await;
                (id, estimator.estimate(&task_input).await)
            });
            pending.insert(handle.id(), (id, input));
        }

        let rejected = out.len();
        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((task_id, (id, result))) => {
                    pending.remove(&task_id);
                    out.push((id, Ok(result)));
                }
                Err(e) => {
                    // A task that died still owes its item an answer.
                    if let Some((id, input)) = pending.remove(&e.id()) {
                        error!(
                            item_id = %id,
                            error = %e,
                            "estimation task failed; using heuristics"
                        );
                        out.push((id, Ok(self.estimate_heuristic(&input))));
                    }
                }
            }
        }

        info!(
            items = out.len(),
            rejected,
            max_in_flight = config.max_in_flight,
            "batch estimation complete"
        );
        out
    }
}

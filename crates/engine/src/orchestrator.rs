use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use shelfwise_core::{
    EstimationInput, EstimationOutcome, EstimationRequest, EstimationResponse, EstimationResult,
    HorizonPair, Source, project,
};
use shelfwise_oracle::config::DEFAULT_TIMEOUT;
use shelfwise_oracle::{ExternalEstimator, OracleOutcome, UnavailableReason};
use shelfwise_rules::RuleTable;

use crate::batch::BatchConfig;
use crate::config::EngineConfig;

/// Estimation orchestrator.
///
/// Holds no mutable state: the oracle handle and a reference to the static
/// rule table. Clones are cheap when `O` is (e.g. an `Arc`), and concurrent
/// calls need no coordination.
#[derive(Debug, Clone)]
pub struct Estimator<O = Arc<dyn ExternalEstimator>> {
    oracle: O,
    rules: &'static RuleTable,
    deadline: Duration,
    pub(crate) batch: BatchConfig,
}

impl Estimator {
    /// Wire an estimator from configuration (oracle client or heuristics-only,
    /// oracle deadline, batch fan-out limit).
    pub fn from_config(config: &EngineConfig) -> Self {
        Estimator::configured(shelfwise_oracle::connect(&config.oracle), config)
    }

    pub fn from_env() -> Self {
        Self::from_config(&EngineConfig::from_env())
    }
}

impl<O: ExternalEstimator> Estimator<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            rules: RuleTable::builtin(),
            deadline: DEFAULT_TIMEOUT,
            batch: BatchConfig::default(),
        }
    }

    /// Apply `config`'s deadline and batch settings to an already-built oracle.
    pub fn configured(oracle: O, config: &EngineConfig) -> Self {
        Self::new(oracle)
            .with_deadline(config.oracle.timeout)
            .with_batch(config.batch.clone())
    }

    pub fn with_rules(mut self, rules: &'static RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Upper bound on one oracle attempt, enforced here regardless of how the
    /// oracle implementation bounds itself.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Fan-out settings used by [`Estimator::estimate_batch`].
    pub fn with_batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }


    /// Estimate expiration and restock dates for one item.
    ///
    /// Never fails: an oracle outage only changes `source` to `heuristic`.
    #[instrument(
        skip_all,
        fields(
            item = %input.name(),
            category = %input.category(),
            source = tracing::field::Empty
        )
    )]
    pub async fn estimate(&self, input: &EstimationInput) -> EstimationResult {
        let (horizon, source) = match self.ask_oracle(input).await {
            OracleOutcome::Ok(horizon) => (horizon, Source::External),
            OracleOutcome::Unavailable(reason) => {
                log_unavailable(&reason);
                (self.heuristic_horizon(input), Source::Heuristic)
            }
        };

        tracing::Span::current().record("source", source.as_str());
        finish(input, horizon, source)
    }

    /// Validate a wire request, estimate it, and render the wire response.
    ///
    /// Invalid input (blank name, unparseable date) is the only rejection.
    pub async fn estimate_request(
        &self,
        request: EstimationRequest,
    ) -> EstimationOutcome<EstimationResponse> {
        let input = request.into_input()?;
        Ok(self.estimate(&input).await.into())
    }

    /// The fallback path alone (no oracle involved). Pure and deterministic.
    pub fn estimate_heuristic(&self, input: &EstimationInput) -> EstimationResult {
        finish(input, self.heuristic_horizon(input), Source::Heuristic)
    }

    async fn ask_oracle(&self, input: &EstimationInput) -> OracleOutcome {
        match tokio::time::timeout(self.deadline, self.oracle.try_external(input)).await {
            Ok(outcome) => outcome,
            Err(_) => OracleOutcome::Unavailable(UnavailableReason::Timeout),
        }
    }

    fn heuristic_horizon(&self, input: &EstimationInput) -> HorizonPair {
        let hit = self.rules.resolve_detailed(input.name(), input.category());
        debug!(rule = ?hit.kind, horizon = %hit.horizon, "heuristic horizon");
        hit.horizon
    }
}

fn log_unavailable(reason: &UnavailableReason) {
    match reason {
        // Expected steady state without an oracle; not worth a warning per item.
        UnavailableReason::NotConfigured => debug!(%reason, "falling back to heuristics"),
        _ => warn!(%reason, "oracle unavailable; falling back to heuristics"),
    }
}

fn finish(input: &EstimationInput, horizon: HorizonPair, source: Source) -> EstimationResult {
    let dates = project(input.purchased_at(), horizon);
    EstimationResult {
        estimated_expiration_at: dates.expiration,
        estimated_restock_at: dates.restock,
        source,
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use shelfwise_core::{EstimationInput, HorizonPair};

use crate::client::HttpOracleClient;
use crate::config::OracleConfig;
use crate::error::UnavailableReason;

/// Result of a single oracle attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleOutcome {
    Ok(HorizonPair),
    Unavailable(UnavailableReason),
}

/// Port for an external horizon predictor.
///
/// Implementations make exactly one attempt, never retry, and must return
/// within their own time bound. Failures are reported as
/// [`OracleOutcome::Unavailable`], never raised.
#[async_trait]
pub trait ExternalEstimator: Send + Sync + 'static {
    async fn try_external(&self, input: &EstimationInput) -> OracleOutcome;
}

#[async_trait]
impl<T: ExternalEstimator + ?Sized> ExternalEstimator for Arc<T> {
    async fn try_external(&self, input: &EstimationInput) -> OracleOutcome {
        (**self).try_external(input).await
    }
}

/// Stand-in used when no oracle is configured.
#[derive(Debug, Default, Copy, Clone)]
pub struct DisabledOracle;

#[async_trait]
impl ExternalEstimator for DisabledOracle {
    async fn try_external(&self, _input: &EstimationInput) -> OracleOutcome {
        OracleOutcome::Unavailable(UnavailableReason::NotConfigured)
    }
}

/// Build the estimator described by `config`.
///
/// An unconfigured or unusable endpoint degrades to [`DisabledOracle`]; the
/// heuristic path then serves every request.
pub fn connect(config: &OracleConfig) -> Arc<dyn ExternalEstimator> {
    if !config.is_configured() {
        info!("no oracle endpoint configured; using heuristics only");
        return Arc::new(DisabledOracle);
    }

    match HttpOracleClient::new(config) {
        Ok(client) => {
            info!(
                endpoint = %client.endpoint(),
                timeout_ms = config.timeout.as_millis() as u64,
                "oracle client ready"
            );
            Arc::new(client)
        }
        Err(e) => {
            warn!(error = %e, "oracle client unavailable; using heuristics only");
            Arc::new(DisabledOracle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input() -> EstimationInput {
        EstimationInput::new("Milk", "Dairy", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn disabled_oracle_is_always_unavailable() {
        assert_eq!(
            DisabledOracle.try_external(&input()).await,
            OracleOutcome::Unavailable(UnavailableReason::NotConfigured)
        );
    }

    #[tokio::test]
    async fn unconfigured_connect_yields_disabled_oracle() {
        let oracle = connect(&OracleConfig::default());
        assert_eq!(
            oracle.try_external(&input()).await,
            OracleOutcome::Unavailable(UnavailableReason::NotConfigured)
        );
    }

    #[tokio::test]
    async fn invalid_endpoint_degrades_to_disabled_oracle() {
        let oracle = connect(&OracleConfig::default().with_endpoint("not a url"));
        assert_eq!(
            oracle.try_external(&input()).await,
            OracleOutcome::Unavailable(UnavailableReason::NotConfigured)
        );
    }
}

//! HTTP client for the remote estimation oracle.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use shelfwise_core::{EstimationInput, HorizonPair};

use crate::config::OracleConfig;
use crate::error::{OracleError, UnavailableReason};
use crate::estimator::{ExternalEstimator, OracleOutcome};
use crate::wire::{OracleRequest, parse_horizon};

/// POSTs the item to the oracle endpoint and maps the reply into a horizon.
///
/// One attempt per call, bounded by `timeout` end to end.
#[derive(Clone)]
pub struct HttpOracleClient {
    http: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
    timeout: Duration,
}

impl core::fmt::Debug for HttpOracleClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HttpOracleClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("authenticated", &self.token.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpOracleClient {
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| OracleError::Client(e.to_string()))?;

        Self::with_http(config, http)
    }

    /// Use a caller-built `reqwest::Client` (proxy, TLS, pooling settings).
    ///
    /// `config.timeout` still bounds every call.
    pub fn with_http(config: &OracleConfig, http: reqwest::Client) -> Result<Self, OracleError> {
        let raw = config.endpoint.as_deref().ok_or(OracleError::NotConfigured)?;
        let endpoint = Url::parse(raw)
            .map_err(|e| OracleError::InvalidEndpoint(raw.to_string(), e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            token: config.token.clone(),
            timeout: config.timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn call(&self, input: &EstimationInput) -> Result<HorizonPair, UnavailableReason> {
        let mut req = self
            .http
            .post(self.endpoint.clone())
            .json(&OracleRequest::from(input));

        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(transport_reason)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UnavailableReason::Status(status.as_u16()));
        }

        let body: Value = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                UnavailableReason::Timeout
            } else {
                UnavailableReason::Malformed(e.to_string())
            }
        })?;

        parse_horizon(&body)
    }
}

fn transport_reason(e: reqwest::Error) -> UnavailableReason {
    if e.is_timeout() {
        UnavailableReason::Timeout
    } else {
        UnavailableReason::Network(e.to_string())
    }
}

#[async_trait]
impl ExternalEstimator for HttpOracleClient {
    async fn try_external(&self, input: &EstimationInput) -> OracleOutcome {
        // reqwest's own timeout covers the request; this also bounds anything
        // it doesn't (e.g. a body that trickles in).
        let outcome = match tokio::time::timeout(self.timeout, self.call(input)).await {
            Ok(Ok(horizon)) => OracleOutcome::Ok(horizon),
            Ok(Err(reason)) => OracleOutcome::Unavailable(reason),
            Err(_) => OracleOutcome::Unavailable(UnavailableReason::Timeout),
        };
        debug!(item = %input.name(), outcome = ?outcome, "oracle call finished");
        outcome
    }
}

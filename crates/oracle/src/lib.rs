//! `shelfwise-oracle`
//!
//! **Responsibility:** the failure boundary around the remote estimation oracle.
//!
//! Every way the oracle can fail (not configured, timeout, network error,
//! bad status, malformed payload) is folded into [`OracleOutcome::Unavailable`].
//! Nothing here returns an error to the estimation path; callers branch on a
//! closed outcome type instead.

pub mod client;
pub mod config;
pub mod error;
pub mod estimator;
pub mod wire;

pub use client::HttpOracleClient;
pub use config::OracleConfig;
pub use error::{OracleError, UnavailableReason};
pub use estimator::{DisabledOracle, ExternalEstimator, OracleOutcome, connect};

use thiserror::Error;

/// Why an oracle call did not produce a usable horizon.
///
/// Always recovered by the caller (heuristic fallback); only ever logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    #[error("oracle is not configured")]
    NotConfigured,

    #[error("oracle call timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("oracle responded with status {0}")]
    Status(u16),

    #[error("malformed oracle payload: {0}")]
    Malformed(String),
}

/// Failure to construct an oracle client.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle endpoint is not configured")]
    NotConfigured,

    #[error("invalid oracle endpoint {0:?}: {1}")]
    InvalidEndpoint(String, String),

    #[error("failed to build http client: {0}")]
    Client(String),
}

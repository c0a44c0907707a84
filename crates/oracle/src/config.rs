//! Oracle configuration (environment-driven).

use std::time::Duration;

use tracing::warn;

pub const ENV_URL: &str = "SHELFWISE_ORACLE_URL";
pub const ENV_TIMEOUT_MS: &str = "SHELFWISE_ORACLE_TIMEOUT_MS";
pub const ENV_TOKEN: &str = "SHELFWISE_ORACLE_TOKEN";

/// Upper bound on a single oracle call, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

/// Where and how to reach the oracle.
///
/// No endpoint means "not configured": every estimate takes the heuristic path.
#[derive(Clone)]
pub struct OracleConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
    pub token: Option<String>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

impl core::fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OracleConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl OracleConfig {
    /// Read `SHELFWISE_ORACLE_URL`, `SHELFWISE_ORACLE_TIMEOUT_MS` and
    /// `SHELFWISE_ORACLE_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (env, file, test map).
    ///
    /// Blank values count as unset; an unparseable timeout keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout = match get(ENV_TIMEOUT_MS) {
            None => DEFAULT_TIMEOUT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!(
                        value = %raw,
                        "{ENV_TIMEOUT_MS} is not a positive integer; using default"
                    );
                    DEFAULT_TIMEOUT
                }
            },
        };

        Self {
            endpoint: get(ENV_URL),
            timeout,
            token: get(ENV_TOKEN),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_is_unconfigured_with_default_timeout() {
        let cfg = OracleConfig::from_lookup(lookup(&[]));
        assert!(!cfg.is_configured());
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
        assert!(cfg.token.is_none());
    }

    #[test]
    fn reads_all_keys() {
        let cfg = OracleConfig::from_lookup(lookup(&[
            (ENV_URL, "https://oracle.internal/estimate"),
            (ENV_TIMEOUT_MS, "750"),
            (ENV_TOKEN, "s3cret"),
        ]));
        assert_eq!(cfg.endpoint.as_deref(), Some("https://oracle.internal/estimate"));
        assert_eq!(cfg.timeout, Duration::from_millis(750));
        assert_eq!(cfg.token.as_deref(), Some("s3cret"));
    }

    #[test]
    fn blank_url_means_not_configured() {
        let cfg = OracleConfig::from_lookup(lookup(&[(ENV_URL, "   ")]));
        assert!(!cfg.is_configured());
    }

    #[test]
    fn bad_timeout_keeps_default() {
        for raw in ["soon", "0", "-5"] {
            let cfg = OracleConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, raw)]));
            assert_eq!(cfg.timeout, DEFAULT_TIMEOUT, "input {raw:?}");
        }
    }

    #[test]
    fn debug_output_redacts_token() {
        let cfg = OracleConfig::default().with_token("s3cret");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}

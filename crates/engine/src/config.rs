//! Engine configuration (environment-driven).

use shelfwise_oracle::OracleConfig;

use crate::batch::BatchConfig;

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub oracle: OracleConfig,
    pub batch: BatchConfig,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            oracle: OracleConfig::from_lookup(&lookup),
            batch: BatchConfig::from_lookup(&lookup),
        }
    }

    pub fn with_oracle(mut self, oracle: OracleConfig) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn with_batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }
}

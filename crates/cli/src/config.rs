use std::path::PathBuf;

use serde::Deserialize;

use engine::DEFAULT_RECOMMENDATION_LIMIT;

/// Prefix shared by every configuration variable
pub const ENV_PREFIX: &str = "VENUE_SCOUT_";

/// Settings loaded from `VENUE_SCOUT_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// JSON catalog to load instead of the built-in seed
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Number of suggestions when `--limit` is not given
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Simulated auth round-trip in milliseconds
    #[serde(default)]
    pub auth_latency_ms: u64,
}

fn default_recommendation_limit() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            recommendation_limit: default_recommendation_limit(),
            auth_latency_ms: 0,
        }
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX)
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

//! Configuration types for poly-scalper

use crate::market::GAMMA_API_URL;
use crate::orderbook::CLOB_API_URL;
use crate::scoring::ScoringWeights;
use serde::Deserialize;

/// Root configuration structure
///
/// Every section has full defaults, so the binary runs without a config file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Upstream API endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_gamma_url")]
    pub gamma_url: String,
    #[serde(default = "default_clob_url")]
    pub clob_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_gamma_url() -> String {
    GAMMA_API_URL.to_string()
}
fn default_clob_url() -> String {
    CLOB_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            gamma_url: default_gamma_url(),
            clob_url: default_clob_url(),
            timeout_secs: 10,
        }
    }
}

/// Ranking pass configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Result count when the CLI doesn't override it
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Watch-mode polling interval
    #[serde(default = "default_refresh_secs")]
    pub refresh_interval_secs: u64,
}

fn default_limit() -> usize {
    20
}
fn default_refresh_secs() -> u64 {
    60
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            refresh_interval_secs: 60,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.api.gamma_url, GAMMA_API_URL);
        assert_eq!(config.api.clob_url, CLOB_API_URL);
        assert_eq!(config.ranking.default_limit, 20);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.weights.spread, 0.25);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [api]
            gamma_url = "https://gamma.test"
            clob_url = "https://clob.test"
            timeout_secs = 5

            [ranking]
            default_limit = 10
            refresh_interval_secs = 30

            [weights]
            spread = 0.30
            churn = 0.20

            [telemetry]
            log_level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.gamma_url, "https://gamma.test");
        assert_eq!(config.ranking.default_limit, 10);
        assert_eq!(config.weights.spread, 0.30);
        // Omitted weights keep their defaults
        assert_eq!(config.weights.reversion, 0.20);
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str("[ranking]\ndefault_limit = 5\n").unwrap();
        assert_eq!(config.ranking.default_limit, 5);
        assert_eq!(config.ranking.refresh_interval_secs, 60);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }
}

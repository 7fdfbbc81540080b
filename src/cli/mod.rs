//! CLI interface for poly-scalper
//!
//! Provides subcommands for:
//! - `rank`: rank markets by scalping tradability
//! - `top`: fill-likelihood view of the busiest markets
//! - `config`: show the effective configuration

mod rank;
mod top;

pub use rank::RankArgs;
pub use top::TopArgs;

use crate::config::Config;
use crate::market::GammaClient;
use crate::market::GammaConfig;
use crate::orderbook::{ClobClient, ClobConfig};
use crate::pipeline::RankingPipeline;
use crate::scoring::ScoringEngine;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "poly-scalper")]
#[command(about = "Scalping-market scanner for Polymarket")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank markets by scalping tradability
    Rank(RankArgs),
    /// Show the busiest markets with fill likelihood
    Top(TopArgs),
    /// Show the effective configuration
    Config,
}

/// Build the live pipeline from configuration
pub(crate) fn build_pipeline(config: &Config) -> RankingPipeline<GammaClient, ClobClient> {
    let timeout = Duration::from_secs(config.api.timeout_secs);

    let gamma = GammaClient::with_config(GammaConfig {
        base_url: config.api.gamma_url.clone(),
        timeout,
    });
    let clob = ClobClient::with_config(ClobConfig {
        base_url: config.api.clob_url.clone(),
        timeout,
    });

    RankingPipeline::with_engine(gamma, clob, ScoringEngine::with_weights(config.weights.clone()))
}

/// Trim a question for one-line table output
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long() {
        let out = truncate("a very long market question indeed", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_build_pipeline_from_defaults() {
        // Constructs clients without touching the network
        let _ = build_pipeline(&Config::default());
    }
}

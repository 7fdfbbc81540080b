//! Rank command implementation

use super::{build_pipeline, truncate};
use crate::config::Config;
use crate::scoring::EvaluationResult;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Number of markets to return (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Re-run on the configured refresh interval until interrupted
    #[arg(long)]
    pub watch: bool,
}

impl RankArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let pipeline = build_pipeline(config);
        let limit = self.limit.unwrap_or(config.ranking.default_limit);

        if !self.watch {
            let results = pipeline.rank_markets(limit).await?;
            print_results(&results, self.json)?;
            return Ok(());
        }

        let mut interval =
            tokio::time::interval(Duration::from_secs(config.ranking.refresh_interval_secs));
        loop {
            interval.tick().await;
            // Each pass is stateless; a failed pass logs and waits for the next tick
            match pipeline.rank_markets(limit).await {
                Ok(results) => print_results(&results, self.json)?,
                Err(e) => tracing::error!(error = %e, "Ranking pass failed"),
            }
        }
    }
}

fn print_results(results: &[EvaluationResult], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No markets available");
        return Ok(());
    }

    println!("{:<10} {:>7}  QUESTION", "ID", "SCORE");
    for result in results {
        match &result.exclusion_reason {
            Some(reason) => println!(
                "{:<10} {:>7}  {} [excluded: {}]",
                result.market_id,
                "-",
                truncate(&result.question, 56),
                reason
            ),
            None => println!(
                "{:<10} {:>7.2}  {}",
                result.market_id,
                result.score,
                truncate(&result.question, 72)
            ),
        }
    }
    Ok(())
}

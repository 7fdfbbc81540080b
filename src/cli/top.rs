//! Top command implementation

use super::{build_pipeline, truncate};
use crate::config::Config;
use crate::pipeline::MarketSummary;
use clap::Args;

#[derive(Args, Debug)]
pub struct TopArgs {
    /// Number of markets to show
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl TopArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let pipeline = build_pipeline(config);
        let summaries = pipeline.top_markets(self.limit).await?;
        print_summaries(&summaries, self.json)?;
        Ok(())
    }
}

fn print_summaries(summaries: &[MarketSummary], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No markets available");
        return Ok(());
    }

    println!(
        "{:<10} {:>7} {:>7} {:>8} {:>6}  QUESTION",
        "ID", "BID", "ASK", "SPREAD", "FILL"
    );
    for summary in summaries {
        println!(
            "{:<10} {:>7} {:>7} {:>8} {:>6}  {}",
            summary.market_id,
            fmt_opt(&summary.best_bid),
            fmt_opt(&summary.best_ask),
            fmt_opt(&summary.spread),
            summary
                .fill_score
                .map(|s| format!("{s:.2}"))
                .unwrap_or_else(|| "-".to_string()),
            truncate(&summary.question, 48)
        );
    }
    Ok(())
}

fn fmt_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

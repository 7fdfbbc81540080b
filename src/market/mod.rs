//! Market universe module
//!
//! Market metadata snapshots and discovery via the Gamma API

mod gamma;

pub use gamma::{GammaClient, GammaConfig, GAMMA_API_URL};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable metadata snapshot for one market
///
/// Fetched once per evaluation cycle and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    /// Market identifier
    pub id: String,
    /// Question text
    pub question: String,
    /// URL slug
    pub slug: String,
    /// Resolution timestamp, when the listing carried a parseable one
    pub end_date: Option<DateTime<Utc>>,
    /// Minimum price increment
    pub tick_size: Decimal,
    /// Whether maker/taker fees apply on this market
    pub fees_enabled: bool,
    /// Listed liquidity figure
    pub liquidity: f64,
    /// 24-hour traded volume
    pub volume_24h: f64,
    /// 7-day traded volume
    pub volume_1wk: f64,
    /// One-week price change as a fraction
    pub one_week_price_change: f64,
    /// Outcome probabilities in [0, 1]
    pub outcome_prices: Vec<f64>,
    /// Outcome labels
    pub outcomes: Vec<String>,
    /// CLOB token id per outcome
    pub clob_token_ids: Vec<String>,
}

impl Market {
    /// Price of the primary (first) outcome, defaulting to 0.5 when absent
    pub fn primary_price(&self) -> f64 {
        self.outcome_prices.first().copied().unwrap_or(0.5)
    }

    /// Token id of the primary outcome
    pub fn primary_token_id(&self) -> Option<&str> {
        self.clob_token_ids.first().map(String::as_str)
    }

    /// Hours until resolution, `None` when no end timestamp is known
    pub fn hours_to_resolution(&self, now: DateTime<Utc>) -> Option<f64> {
        let end = self.end_date?;
        Some((end - now).num_seconds() as f64 / 3600.0)
    }
}

/// Trait for market universe providers
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetch up to `limit` active markets, highest 24h volume first
    async fn fetch_markets(&self, limit: usize) -> anyhow::Result<Vec<Market>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn sample_market() -> Market {
        Market {
            id: "m-1".to_string(),
            question: "Will it rain tomorrow?".to_string(),
            slug: "will-it-rain".to_string(),
            end_date: None,
            tick_size: dec!(0.01),
            fees_enabled: false,
            liquidity: 10_000.0,
            volume_24h: 5_000.0,
            volume_1wk: 35_000.0,
            one_week_price_change: 0.01,
            outcome_prices: vec![0.55, 0.45],
            outcomes: vec!["Yes".to_string(), "No".to_string()],
            clob_token_ids: vec!["tok-yes".to_string(), "tok-no".to_string()],
        }
    }

    #[test]
    fn test_primary_price() {
        let market = sample_market();
        assert_eq!(market.primary_price(), 0.55);
    }

    #[test]
    fn test_primary_price_default() {
        let mut market = sample_market();
        market.outcome_prices.clear();
        assert_eq!(market.primary_price(), 0.5);
    }

    #[test]
    fn test_primary_token_id() {
        let market = sample_market();
        assert_eq!(market.primary_token_id(), Some("tok-yes"));
    }

    #[test]
    fn test_hours_to_resolution() {
        let now = Utc::now();
        let mut market = sample_market();
        market.end_date = Some(now + Duration::hours(72));

        let hours = market.hours_to_resolution(now).unwrap();
        assert!((hours - 72.0).abs() < 0.01);
    }

    #[test]
    fn test_hours_to_resolution_unknown() {
        let market = sample_market();
        assert!(market.hours_to_resolution(Utc::now()).is_none());
    }
}

//! Gamma API client for market discovery
//!
//! Fetches the active market universe from Polymarket's Gamma API, ordered by
//! 24h volume so the scanner sees the busiest markets first. JSON-string
//! encoded fields (outcome prices, labels, token ids) degrade to empty
//! defaults when malformed; a bad field never drops the whole listing.

use super::{Market, MarketSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// Gamma API base URL
pub const GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";

/// Configuration for the Gamma client
#[derive(Debug, Clone)]
pub struct GammaConfig {
    /// Base URL for the Gamma API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self {
            base_url: GAMMA_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for Polymarket's Gamma API
pub struct GammaClient {
    config: GammaConfig,
    client: Client,
}

impl GammaClient {
    /// Create a new Gamma API client with default configuration
    pub fn new() -> Self {
        Self::with_config(GammaConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: GammaConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch active, tradeable markets ordered by 24h volume
    pub async fn fetch_active_markets(&self, limit: usize) -> anyhow::Result<Vec<Market>> {
        let url = format!("{}/markets", self.config.base_url);

        tracing::debug!(url = %url, limit, "Fetching market universe from Gamma API");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("active", "true"),
                ("closed", "false"),
                ("order", "volume24hr"),
                ("ascending", "false"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gamma API error: {} - {}", status, body);
        }

        let gamma_markets: Vec<GammaMarket> = response.json().await?;

        let markets: Vec<Market> = gamma_markets.into_iter().map(convert_market).collect();

        tracing::info!(market_count = markets.len(), "Fetched market universe");

        Ok(markets)
    }
}

#[async_trait]
impl MarketSource for GammaClient {
    async fn fetch_markets(&self, limit: usize) -> anyhow::Result<Vec<Market>> {
        self.fetch_active_markets(limit).await
    }
}

impl Default for GammaClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw market listing from the Gamma API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GammaMarket {
    id: String,
    #[serde(default)]
    question: String,
    #[serde(default)]
    slug: String,
    /// Outcome prices as a JSON-encoded string array
    outcome_prices: Option<String>,
    /// Outcome labels as a JSON-encoded string array
    outcomes: Option<String>,
    /// CLOB token IDs as a JSON-encoded string array
    clob_token_ids: Option<String>,
    end_date: Option<String>,
    order_price_min_tick_size: Option<Decimal>,
    #[serde(default)]
    fees_enabled: bool,
    liquidity_num: Option<f64>,
    #[serde(rename = "volume24hr")]
    volume_24hr: Option<f64>,
    #[serde(rename = "volume1wk")]
    volume_1wk: Option<f64>,
    one_week_price_change: Option<f64>,
}

/// Convert a Gamma listing to our Market snapshot
fn convert_market(gamma: GammaMarket) -> Market {
    let outcome_prices = gamma
        .outcome_prices
        .as_deref()
        .map(parse_price_array)
        .unwrap_or_default();

    let outcomes = gamma
        .outcomes
        .as_deref()
        .map(|s| parse_string_array(s, "outcomes"))
        .unwrap_or_default();

    let clob_token_ids = gamma
        .clob_token_ids
        .as_deref()
        .map(|s| parse_string_array(s, "clobTokenIds"))
        .unwrap_or_default();

    let end_date = gamma
        .end_date
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Market {
        id: gamma.id,
        question: gamma.question,
        slug: gamma.slug,
        end_date,
        tick_size: gamma.order_price_min_tick_size.unwrap_or(dec!(0.01)),
        fees_enabled: gamma.fees_enabled,
        liquidity: gamma.liquidity_num.unwrap_or(0.0),
        volume_24h: gamma.volume_24hr.unwrap_or(0.0),
        volume_1wk: gamma.volume_1wk.unwrap_or(0.0),
        one_week_price_change: gamma.one_week_price_change.unwrap_or(0.0),
        outcome_prices,
        outcomes,
        clob_token_ids,
    }
}

/// Parse a JSON-encoded string array, degrading to empty on malformed input
///
/// Format: "[\"Yes\", \"No\"]"
fn parse_string_array(raw: &str, field: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(field, error = %e, "Malformed JSON-encoded array, using empty");
            vec![]
        }
    }
}

/// Parse a JSON-encoded price array into fractions
///
/// Format: "[\"0.52\", \"0.48\"]"
fn parse_price_array(raw: &str) -> Vec<f64> {
    parse_string_array(raw, "outcomePrices")
        .iter()
        .filter_map(|p| f64::from_str(p).ok())
        .collect()
}

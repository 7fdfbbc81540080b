//! CLOB REST client for order book snapshots
//!
//! Fetches a single L2 snapshot per token from Polymarket's CLOB API. There
//! is no retry policy: a failed fetch is a terminal "unavailable" result for
//! that token within the current ranking pass.

use super::{BookSource, OrderBookSnapshot, PriceLevel};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// CLOB API base URL
pub const CLOB_API_URL: &str = "https://clob.polymarket.com";

/// Order book fetch errors
#[derive(Debug, Error)]
pub enum ClobError {
    /// Transport-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success HTTP status
    #[error("CLOB API returned {0}")]
    BadStatus(reqwest::StatusCode),
}

/// Configuration for the CLOB client
#[derive(Debug, Clone)]
pub struct ClobConfig {
    /// Base URL for the CLOB API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ClobConfig {
    fn default() -> Self {
        Self {
            base_url: CLOB_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for Polymarket's CLOB order book endpoint
pub struct ClobClient {
    config: ClobConfig,
    client: Client,
}

impl ClobClient {
    /// Create a new CLOB client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClobConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClobConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch the current order book snapshot for a token
    pub async fn fetch_book(&self, token_id: &str) -> Result<OrderBookSnapshot, ClobError> {
        let url = format!("{}/book", self.config.base_url);

        tracing::debug!(url = %url, token_id = %token_id, "Fetching order book");

        let response = self
            .client
            .get(&url)
            .query(&[("token_id", token_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClobError::BadStatus(response.status()));
        }

        let raw: RawBook = response.json().await?;
        let book = raw_book_to_snapshot(token_id, raw);

        tracing::debug!(
            token_id = %book.token_id,
            bid_count = book.bids.len(),
            ask_count = book.asks.len(),
            "Parsed order book snapshot"
        );

        Ok(book)
    }
}

#[async_trait]
impl BookSource for ClobClient {
    async fn fetch_book(&self, token_id: &str) -> anyhow::Result<OrderBookSnapshot> {
        Ok(ClobClient::fetch_book(self, token_id).await?)
    }
}

impl Default for ClobClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw book response; prices and sizes arrive as decimal strings
#[derive(Debug, Deserialize)]
struct RawBook {
    #[serde(default)]
    bids: Vec<RawLevel>,
    #[serde(default)]
    asks: Vec<RawLevel>,
}

#[derive(Debug, Deserialize)]
struct RawLevel {
    price: String,
    size: String,
}

/// Convert raw string levels, dropping unparseable entries
fn raw_book_to_snapshot(token_id: &str, raw: RawBook) -> OrderBookSnapshot {
    OrderBookSnapshot {
        token_id: token_id.to_string(),
        bids: parse_levels(raw.bids),
        asks: parse_levels(raw.asks),
        fetched_at: Utc::now(),
    }
}

fn parse_levels(levels: Vec<RawLevel>) -> Vec<PriceLevel> {
    levels
        .into_iter()
        .filter_map(|level| {
            let price = Decimal::from_str(&level.price).ok()?;
            let size = Decimal::from_str(&level.size).ok()?;
            Some(PriceLevel { price, size })
        })
        .collect()
}

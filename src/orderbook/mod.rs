//! Order book module
//!
//! Snapshot types, the depth/spread analyzer, and the CLOB REST client.
//! All sorting and depth math lives in [`BookAnalyzer`]; callers hand over
//! raw snapshots and never re-derive it themselves.

mod analyzer;
mod book;
mod client;

pub use analyzer::{BookAnalyzer, BookSummary, DepthProfile};
pub use book::OrderBookSnapshot;
pub use client::{ClobClient, ClobConfig, ClobError, CLOB_API_URL};

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price level in the order book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price at this level
    pub price: Decimal,
    /// Total size available
    pub size: Decimal,
}

/// Trait for order book snapshot providers
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Fetch the current snapshot for one token
    async fn fetch_book(&self, token_id: &str) -> anyhow::Result<OrderBookSnapshot>;
}

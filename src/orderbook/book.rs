//! Order book snapshot type

use super::PriceLevel;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time L2 order book for a token
///
/// Levels are stored as received; ordering and duplicate-price aggregation
/// are the analyzer's job. Crossed books (best ask below best bid) are kept
/// as-is and surface as a negative spread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Token identifier
    pub token_id: String,
    /// Bid levels
    pub bids: Vec<PriceLevel>,
    /// Ask levels
    pub asks: Vec<PriceLevel>,
    /// Retrieval timestamp
    pub fetched_at: DateTime<Utc>,
}

impl OrderBookSnapshot {
    /// Create a new empty snapshot
    pub fn new(token_id: impl Into<String>) -> Self {
        Self {
            token_id: token_id.into(),
            bids: vec![],
            asks: vec![],
            fetched_at: Utc::now(),
        }
    }

    /// Highest bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().map(|l| l.price).max()
    }

    /// Lowest ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().map(|l| l.price).min()
    }

    /// Mid price, when both sides exist
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        }
    }

    /// Best ask minus best bid; negative for crossed books
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// True when either side has no levels
    pub fn is_one_sided(&self) -> bool {
        self.bids.is_empty() || self.asks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn level(price: Decimal, size: Decimal) -> PriceLevel {
        PriceLevel { price, size }
    }

    #[test]
    fn test_snapshot_new() {
        let book = OrderBookSnapshot::new("test-token");
        assert_eq!(book.token_id, "test-token");
        assert!(book.bids.is_empty());
        assert!(book.asks.is_empty());
        assert!(book.is_one_sided());
    }

    #[test]
    fn test_best_bid_is_max_regardless_of_order() {
        let mut book = OrderBookSnapshot::new("test");
        assert!(book.best_bid().is_none());

        // Unsorted input
        book.bids = vec![level(dec!(0.54), dec!(100)), level(dec!(0.55), dec!(100))];
        assert_eq!(book.best_bid(), Some(dec!(0.55)));
    }

    #[test]
    fn test_best_ask_is_min_regardless_of_order() {
        let mut book = OrderBookSnapshot::new("test");
        assert!(book.best_ask().is_none());

        book.asks = vec![level(dec!(0.57), dec!(100)), level(dec!(0.56), dec!(100))];
        assert_eq!(book.best_ask(), Some(dec!(0.56)));
    }

    #[test]
    fn test_mid_price_and_spread() {
        let mut book = OrderBookSnapshot::new("test");
        book.bids = vec![level(dec!(0.50), dec!(100))];
        book.asks = vec![level(dec!(0.52), dec!(100))];

        assert_eq!(book.mid_price(), Some(dec!(0.51)));
        assert_eq!(book.spread(), Some(dec!(0.02)));
        assert!(!book.is_one_sided());
    }

    #[test]
    fn test_mid_price_unavailable_one_sided() {
        let mut book = OrderBookSnapshot::new("test");
        book.asks = vec![level(dec!(0.56), dec!(100))];
        assert!(book.mid_price().is_none());
        assert!(book.spread().is_none());
        assert!(book.is_one_sided());
    }

    #[test]
    fn test_crossed_book_negative_spread() {
        let mut book = OrderBookSnapshot::new("test");
        book.bids = vec![level(dec!(0.55), dec!(100))];
        book.asks = vec![level(dec!(0.53), dec!(100))];
        assert_eq!(book.spread(), Some(dec!(-0.02)));
    }
}

//! Depth and spread analysis
//!
//! Normalizes a raw snapshot into best bid/ask, spread, and size-weighted
//! depth at configurable tick-distance bands. Duplicate prices on a side are
//! size-aggregated before any depth is computed, since source data may carry
//! multiple entries at one price.

use super::{OrderBookSnapshot, PriceLevel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default tick-distance bands
pub const DEFAULT_BANDS: [u32; 3] = [1, 3, 5];

/// Aggregate size on each side within N ticks of the respective best price
#[derive(Debug, Clone, Serialize)]
struct DepthBand {
    ticks: u32,
    bid: Option<Decimal>,
    ask: Option<Decimal>,
}

/// Banded depth derived from a single snapshot
///
/// `None` means the side had no levels, which is distinct from a side with
/// zero aggregate size.
#[derive(Debug, Clone, Serialize)]
pub struct DepthProfile {
    /// Aggregate size at the best bid price (ties at top count fully)
    pub bid_top: Option<Decimal>,
    /// Aggregate size at the best ask price
    pub ask_top: Option<Decimal>,
    bands: Vec<DepthBand>,
}

impl DepthProfile {
    fn empty() -> Self {
        Self {
            bid_top: None,
            ask_top: None,
            bands: vec![],
        }
    }

    /// Bid-side depth within `ticks` of the best bid
    pub fn bid_within(&self, ticks: u32) -> Option<Decimal> {
        self.bands.iter().find(|b| b.ticks == ticks)?.bid
    }

    /// Ask-side depth within `ticks` of the best ask
    pub fn ask_within(&self, ticks: u32) -> Option<Decimal> {
        self.bands.iter().find(|b| b.ticks == ticks)?.ask
    }
}

/// Derived best-of-book facts plus the depth profile
#[derive(Debug, Clone, Serialize)]
pub struct BookSummary {
    /// Highest bid price
    pub best_bid: Option<Decimal>,
    /// Lowest ask price
    pub best_ask: Option<Decimal>,
    /// Best ask minus best bid; negative for crossed books
    pub spread: Option<Decimal>,
    /// Banded depth
    pub depth: DepthProfile,
}

impl BookSummary {
    /// Summary for a market with no order book data
    pub fn unavailable() -> Self {
        Self {
            best_bid: None,
            best_ask: None,
            spread: None,
            depth: DepthProfile::empty(),
        }
    }

    /// Spread expressed in tick units
    pub fn spread_in_ticks(&self, tick_size: Decimal) -> Option<f64> {
        if tick_size <= Decimal::ZERO {
            return None;
        }
        (self.spread? / tick_size).to_f64()
    }
}

/// Order book analyzer
///
/// Recomputes the profile per evaluation; nothing is cached across snapshots.
#[derive(Debug, Clone)]
pub struct BookAnalyzer {
    bands: Vec<u32>,
}

impl BookAnalyzer {
    /// Create an analyzer with the default 1/3/5-tick bands
    pub fn new() -> Self {
        Self {
            bands: DEFAULT_BANDS.to_vec(),
        }
    }

    /// Create an analyzer with custom tick-distance bands
    pub fn with_bands(bands: Vec<u32>) -> Self {
        Self { bands }
    }

    /// Summarize a snapshot relative to the market's tick size
    pub fn summarize(&self, book: &OrderBookSnapshot, tick_size: Decimal) -> BookSummary {
        let bids = aggregate_levels(&book.bids);
        let asks = aggregate_levels(&book.asks);

        let best_bid = bids.keys().next_back().copied();
        let best_ask = asks.keys().next().copied();

        let spread = match (best_bid, best_ask) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        };

        let bands = self
            .bands
            .iter()
            .map(|&ticks| {
                let distance = tick_size * Decimal::from(ticks);
                DepthBand {
                    ticks,
                    bid: best_bid.map(|best| bids.range(best - distance..).map(|(_, s)| *s).sum()),
                    ask: best_ask.map(|best| asks.range(..=best + distance).map(|(_, s)| *s).sum()),
                }
            })
            .collect();

        BookSummary {
            best_bid,
            best_ask,
            spread,
            depth: DepthProfile {
                bid_top: best_bid.and_then(|p| bids.get(&p).copied()),
                ask_top: best_ask.and_then(|p| asks.get(&p).copied()),
                bands,
            },
        }
    }
}

impl Default for BookAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum sizes per price, dropping nothing
fn aggregate_levels(levels: &[PriceLevel]) -> BTreeMap<Decimal, Decimal> {
    let mut by_price = BTreeMap::new();
    for level in levels {
        *by_price.entry(level.price).or_insert(Decimal::ZERO) += level.size;
    }
    by_price
}

//! Hard-exclusion classifier
//!
//! Evaluates a market's question text and metadata against the keyword
//! taxonomies and several numeric heuristics. Checks run in a fixed order and
//! the first hit wins, so the reported reason is deterministic; every check is
//! a hard gate.

use super::penalty::PenaltyCalculator;
use super::taxonomy::{self, JUMP_RISK_KEYWORDS, STRUCTURAL_DECAY_KEYWORDS};
use crate::market::Market;
use crate::orderbook::BookSummary;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Outcome of hard exclusion for one market
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Market proceeds to scoring
    Eligible,
    /// Market is dropped with a human-readable reason
    Excluded { reason: String },
}

impl Verdict {
    fn excluded(reason: impl Into<String>) -> Self {
        Self::Excluded {
            reason: reason.into(),
        }
    }

    /// Exclusion reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Eligible => None,
            Self::Excluded { reason } => Some(reason),
        }
    }
}

/// Thresholds for the numeric hard gates
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Maximum spread in tick units
    pub max_spread_ticks: f64,
    /// Lowest acceptable primary outcome price
    pub price_floor: f64,
    /// Highest acceptable primary outcome price
    pub price_ceiling: f64,
    /// Minimum hours until resolution
    pub min_runway_hours: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_spread_ticks: 5.0,
            price_floor: 0.08,
            price_ceiling: 0.92,
            min_runway_hours: 48.0,
        }
    }
}

/// First-match-wins exclusion ladder
#[derive(Debug, Clone, Default)]
pub struct MarketClassifier {
    config: ClassifierConfig,
    penalties: PenaltyCalculator,
}

impl MarketClassifier {
    /// Create a classifier with default thresholds
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with custom thresholds
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            penalties: PenaltyCalculator::new(),
        }
    }

    /// Run the nine-step exclusion ladder
    pub fn classify(&self, market: &Market, summary: &BookSummary, now: DateTime<Utc>) -> Verdict {
        // 1. Fee-bearing markets make spread capture unprofitable
        if market.fees_enabled {
            return Verdict::excluded("fees enabled");
        }

        // 2. Spread gate. Crossed books show up as a negative tick count and
        // fail the same way an over-wide spread does.
        if let Some(ticks) = summary.spread_in_ticks(market.tick_size) {
            if ticks > self.config.max_spread_ticks || ticks < 0.0 {
                return Verdict::excluded("spread too wide");
            }
        }

        let question = market.question.to_lowercase();

        // 3. Jump-risk keywords
        if let Some(term) = taxonomy::find_match(&question, JUMP_RISK_KEYWORDS) {
            return Verdict::excluded(format!("jump-risk keyword \"{}\"", term.trim()));
        }

        // 4. Structural-decay keywords
        if let Some(term) = taxonomy::find_match(&question, STRUCTURAL_DECAY_KEYWORDS) {
            return Verdict::excluded(format!("structural-decay keyword \"{}\"", term.trim()));
        }

        // 5. Price edge
        let price = market.primary_price();
        if price < self.config.price_floor || price > self.config.price_ceiling {
            return Verdict::excluded("price at edge");
        }

        // 6. Resolution runway. An unknown end date passes through.
        if let Some(hours) = market.hours_to_resolution(now) {
            if hours < self.config.min_runway_hours {
                return Verdict::excluded("insufficient runway");
            }
        }

        // 7. Top-of-book depth on both sides
        if !has_positive_depth(summary.depth.bid_top) || !has_positive_depth(summary.depth.ask_top)
        {
            return Verdict::excluded("one-sided or empty book");
        }

        // 8. Drift multiplier reaching exactly zero
        if self.penalties.drift(price, market.one_week_price_change) == 0.0 {
            return Verdict::excluded("directional drift toward edge");
        }

        // 9. Volatility multiplier reaching exactly zero
        if self
            .penalties
            .jump_volatility(&market.question, market.one_week_price_change)
            == 0.0
        {
            return Verdict::excluded("high weekly volatility");
        }

        Verdict::Eligible
    }
}

fn has_positive_depth(depth: Option<Decimal>) -> bool {
    matches!(depth, Some(d) if d > Decimal::ZERO)
}

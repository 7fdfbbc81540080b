//! Composite scoring engine
//!
//! For an eligible market: five weighted component scores, each on a 0-100
//! scale, summed and then multiplied by the event-resolution and weekly
//! volatility penalties. The drift multiplier enters only through the
//! reversion component (and separately gates hard exclusion at exactly zero);
//! both applications are intentional.

use super::classifier::{MarketClassifier, Verdict};
use super::penalty::PenaltyCalculator;
use super::{ComponentScores, EvaluationResult};
use crate::market::Market;
use crate::orderbook::{BookAnalyzer, BookSummary, OrderBookSnapshot};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

/// Target share of 7-day volume traded per day
const EVEN_DAILY_TURNOVER: f64 = 1.0 / 7.0;
/// 24h share of the 7-day total above which a news spike is assumed
const SPIKE_RATIO: f64 = 0.3;

/// Component weights for the composite score
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_spread_weight")]
    pub spread: f64,
    #[serde(default = "default_churn_weight")]
    pub churn: f64,
    #[serde(default = "default_reversion_weight")]
    pub reversion: f64,
    #[serde(default = "default_depth_weight")]
    pub depth: f64,
    #[serde(default = "default_time_weight")]
    pub time: f64,
}

fn default_spread_weight() -> f64 {
    0.25
}
fn default_churn_weight() -> f64 {
    0.25
}
fn default_reversion_weight() -> f64 {
    0.20
}
fn default_depth_weight() -> f64 {
    0.15
}
fn default_time_weight() -> f64 {
    0.10
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            spread: 0.25,
            churn: 0.25,
            reversion: 0.20,
            depth: 0.15,
            time: 0.10,
        }
    }
}

/// Orchestrates analyzer, classifier, and penalties for one market at a time
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
    analyzer: BookAnalyzer,
    classifier: MarketClassifier,
    penalties: PenaltyCalculator,
}

impl ScoringEngine {
    /// Create an engine with default weights and thresholds
    pub fn new() -> Self {
        Self::with_weights(ScoringWeights::default())
    }

    /// Create an engine with custom component weights
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            analyzer: BookAnalyzer::new(),
            classifier: MarketClassifier::new(),
            penalties: PenaltyCalculator::new(),
        }
    }

    /// Evaluate one market against its order book snapshot
    ///
    /// A missing book is evaluated as unavailable data, which routes the
    /// market to the one-sided/empty-book exclusion.
    pub fn evaluate(
        &self,
        market: &Market,
        book: Option<&OrderBookSnapshot>,
        now: DateTime<Utc>,
    ) -> EvaluationResult {
        let summary = book
            .map(|b| self.analyzer.summarize(b, market.tick_size))
            .unwrap_or_else(BookSummary::unavailable);

        match self.classifier.classify(market, &summary, now) {
            Verdict::Excluded { reason } => {
                tracing::debug!(
                    market_id = %market.id,
                    reason = %reason,
                    "Market hard-excluded"
                );
                EvaluationResult {
                    market_id: market.id.clone(),
                    question: market.question.clone(),
                    score: 0.0,
                    exclusion_reason: Some(reason),
                    components: None,
                }
            }
            Verdict::Eligible => self.score_eligible(market, &summary, now),
        }
    }

    fn score_eligible(
        &self,
        market: &Market,
        summary: &BookSummary,
        now: DateTime<Utc>,
    ) -> EvaluationResult {
        let spread_ticks = summary.spread_in_ticks(market.tick_size).unwrap_or(0.0);
        let price = market.primary_price();

        let mid = match (summary.best_bid, summary.best_ask) {
            (Some(bid), Some(ask)) => ((bid + ask) / rust_decimal::Decimal::TWO)
                .to_f64()
                .unwrap_or(price),
            _ => price,
        };

        let drift_mult = self.penalties.drift(price, market.one_week_price_change);

        let components = ComponentScores {
            spread: spread_score(spread_ticks),
            churn: churn_score(market.volume_24h, market.volume_1wk),
            reversion: reversion_score(mid, drift_mult),
            depth: depth_score(summary),
            time: time_score(market.hours_to_resolution(now)),
        };

        let composite = self.weights.spread * components.spread
            + self.weights.churn * components.churn
            + self.weights.reversion * components.reversion
            + self.weights.depth * components.depth
            + self.weights.time * components.time;

        let event_mult = self.penalties.event_resolution(&market.question);
        let vol_mult = self
            .penalties
            .jump_volatility(&market.question, market.one_week_price_change);

        let score = round2((composite * event_mult * vol_mult).clamp(0.0, 100.0));

        tracing::debug!(
            market_id = %market.id,
            score,
            spread = components.spread,
            churn = components.churn,
            reversion = components.reversion,
            depth = components.depth,
            time = components.time,
            event_mult,
            vol_mult,
            "Scored eligible market"
        );

        EvaluationResult {
            market_id: market.id.clone(),
            question: market.question.clone(),
            score,
            exclusion_reason: None,
            components: Some(components),
        }
    }
}

/// Step function of spread in tick units
fn spread_score(spread_ticks: f64) -> f64 {
    if spread_ticks <= 1.2 {
        100.0
    } else if spread_ticks <= 2.0 {
        80.0
    } else if spread_ticks <= 3.0 {
        50.0
    } else {
        20.0
    }
}

/// Volume churn vs. even daily turnover of the weekly total
fn churn_score(volume_24h: f64, volume_1wk: f64) -> f64 {
    let ratio = if volume_1wk > 0.0 {
        volume_24h / volume_1wk
    } else {
        0.0
    };

    if ratio > SPIKE_RATIO {
        // News-spike signature: most of the week's volume landed today
        (100.0 - (ratio - EVEN_DAILY_TURNOVER) * 150.0).max(20.0)
    } else {
        let base = ((volume_24h + 1.0).log10() * 20.0).min(100.0);
        let consistency = (1.0 - 4.0 * (ratio - EVEN_DAILY_TURNOVER).abs()).clamp(0.5, 1.3);
        base * consistency
    }
}

/// Distance of the mid price from 0.5, scaled by the drift multiplier
fn reversion_score(mid: f64, drift_mult: f64) -> f64 {
    (100.0 - 180.0 * (mid - 0.5).abs()).max(0.0) * drift_mult
}

/// Depth quality: magnitude, symmetry, and layering beyond top-of-book
fn depth_score(summary: &BookSummary) -> f64 {
    let bid_1 = decimal_or_zero(summary.depth.bid_within(1));
    let ask_1 = decimal_or_zero(summary.depth.ask_within(1));
    let bid_5 = decimal_or_zero(summary.depth.bid_within(5));
    let ask_5 = decimal_or_zero(summary.depth.ask_within(5));

    let total_5 = bid_5 + ask_5;
    // Already excluded upstream; kept as a zero-division guard
    if total_5 <= 0.0 || bid_1 <= 0.0 || ask_1 <= 0.0 {
        return 0.0;
    }

    let base = ((total_5 + 1.0).log10() * 30.0).min(100.0);
    let symmetry = 1.0 - (bid_5 - ask_5).abs() / total_5;
    let beyond_top = (bid_5 - bid_1) + (ask_5 - ask_1);
    let layer_bonus = (1.0 + (beyond_top + 2.0).log10() * 0.1).min(1.3);

    base * symmetry * layer_bonus
}

/// Step function of hours to resolution; the 1-8 week band is the sweet spot
fn time_score(hours: Option<f64>) -> f64 {
    match hours {
        Some(h) if h < 72.0 => 40.0,
        Some(h) if h < 168.0 => 70.0,
        Some(h) if h < 1440.0 => 100.0,
        Some(h) if h < 4320.0 => 80.0,
        _ => 60.0,
    }
}

fn decimal_or_zero(value: Option<rust_decimal::Decimal>) -> f64 {
    value.and_then(|d| d.to_f64()).unwrap_or(0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

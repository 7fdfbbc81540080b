//! Market evaluation module
//!
//! Hard-exclusion classifier, soft penalty multipliers, and the weighted
//! composite scoring engine that turns a market snapshot plus order book
//! into a 0-100 tradability score.

mod classifier;
mod engine;
mod penalty;
pub mod taxonomy;

pub use classifier::{ClassifierConfig, MarketClassifier, Verdict};
pub use engine::{ScoringEngine, ScoringWeights};
pub use penalty::PenaltyCalculator;

use serde::Serialize;

/// Intermediate component scores, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScores {
    /// Spread tightness (weight 0.25)
    pub spread: f64,
    /// Volume churn vs. even daily turnover (weight 0.25)
    pub churn: f64,
    /// Mean-reversion potential, drift-adjusted (weight 0.20)
    pub reversion: f64,
    /// Depth quality and symmetry (weight 0.15)
    pub depth: f64,
    /// Time-to-resolution safety (weight 0.10)
    pub time: f64,
}

/// Per-market evaluation output
///
/// An excluded market carries a reason and score 0; an eligible one carries
/// its composite score and component breakdown. Created fresh per ranking
/// pass, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Market identifier
    pub market_id: String,
    /// Question text, for display
    pub question: String,
    /// Composite tradability score, 0-100, two decimals
    pub score: f64,
    /// Hard-exclusion reason, mutually exclusive with a meaningful score
    pub exclusion_reason: Option<String>,
    /// Component breakdown for eligible markets
    pub components: Option<ComponentScores>,
}

impl EvaluationResult {
    /// True when the market was hard-excluded
    pub fn is_excluded(&self) -> bool {
        self.exclusion_reason.is_some()
    }
}

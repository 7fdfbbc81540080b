//! Soft penalty multipliers
//!
//! Three independent multiplier functions for markets that survive hard
//! exclusion but carry residual risk. Each is monotonic in its input and
//! bounded; they combine by multiplication so a single severe factor can
//! dominate the composite.

use super::taxonomy::{self, DECISIVE_EVENT_TERMS, JUMP_RISK_KEYWORDS, MONTHS};

/// Multiplier for countdown-style resolution phrasing ("by/before <month>")
const COUNTDOWN_MULTIPLIER: f64 = 0.3;
/// Multiplier for single-decisive-event phrasing ("will X announce/rule/...")
const DECISIVE_EVENT_MULTIPLIER: f64 = 0.5;

/// Edge bands and drift thresholds for the drift multiplier
const EDGE_LOW: f64 = 0.15;
const EDGE_HIGH: f64 = 0.85;
const DRIFT_THRESHOLD: f64 = 0.05;
const STABILITY_THRESHOLD: f64 = 0.03;
const STABILITY_BONUS: f64 = 1.2;

/// Computes the event-resolution, jump-risk volatility, and drift multipliers
#[derive(Debug, Clone, Default)]
pub struct PenaltyCalculator;

impl PenaltyCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Event-resolution timing multiplier: 0.3, 0.5, or 1.0
    ///
    /// Countdown phrasing takes priority over single-event phrasing.
    pub fn event_resolution(&self, question: &str) -> f64 {
        let q = question.to_lowercase();

        if has_countdown_phrasing(&q) {
            return COUNTDOWN_MULTIPLIER;
        }
        if q.contains("will ") && taxonomy::find_match(&q, DECISIVE_EVENT_TERMS).is_some() {
            return DECISIVE_EVENT_MULTIPLIER;
        }
        1.0
    }

    /// Weekly-volatility multiplier in [0.0, 1.0]
    ///
    /// A jump-risk keyword match zeroes the multiplier outright (full
    /// exclusion); otherwise the |one-week change| thresholds apply.
    pub fn jump_volatility(&self, question: &str, weekly_change: f64) -> f64 {
        let q = question.to_lowercase();
        if taxonomy::find_match(&q, JUMP_RISK_KEYWORDS).is_some() {
            return 0.0;
        }

        let magnitude = weekly_change.abs();
        if magnitude > 0.30 {
            0.2
        } else if magnitude > 0.20 {
            0.5
        } else if magnitude > 0.10 {
            0.8
        } else {
            1.0
        }
    }

    /// Price-drift multiplier: 0.0, 0.5, 1.0, or 1.2
    ///
    /// Zero means the price is drifting into an edge (decaying long-shot or
    /// converging certainty); 0.5 means it sits in an edge band without the
    /// matching drift direction; 1.2 is a stability bonus for flat weeks.
    pub fn drift(&self, price: f64, weekly_change: f64) -> f64 {
        if price < EDGE_LOW && weekly_change < -DRIFT_THRESHOLD {
            return 0.0; // decaying long-shot
        }
        if price > EDGE_HIGH && weekly_change > DRIFT_THRESHOLD {
            return 0.0; // converging certainty
        }
        if price < EDGE_LOW || price > EDGE_HIGH {
            return 0.5;
        }
        if weekly_change.abs() < STABILITY_THRESHOLD {
            return STABILITY_BONUS;
        }
        1.0
    }
}

/// Countdown phrasing: "by <month>", "before <month>", "by the end of",
/// or a "by <year>" deadline
fn has_countdown_phrasing(question_lower: &str) -> bool {
    if question_lower.contains("by the end of") || question_lower.contains("deadline") {
        return true;
    }
    for month in MONTHS {
        if question_lower.contains(&format!("by {month}"))
            || question_lower.contains(&format!("before {month}"))
        {
            return true;
        }
    }
    question_lower.contains("by 20") || question_lower.contains("before 20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_phrasing() {
        let calc = PenaltyCalculator::new();
        assert_eq!(calc.event_resolution("Will X happen by March 31?"), 0.3);
        assert_eq!(calc.event_resolution("Resolved before December?"), 0.3);
        assert_eq!(calc.event_resolution("Done by the end of the year?"), 0.3);
    }

    #[test]
    fn test_decisive_event_phrasing() {
        let calc = PenaltyCalculator::new();
        assert_eq!(
            calc.event_resolution("Will the company announce a buyback?"),
            0.5
        );
        assert_eq!(calc.event_resolution("Will the board vote to merge?"), 0.5);
    }

    #[test]
    fn test_countdown_takes_priority_over_decisive() {
        let calc = PenaltyCalculator::new();
        assert_eq!(
            calc.event_resolution("Will the company announce earnings by July?"),
            0.3
        );
    }

    #[test]
    fn test_event_resolution_neutral() {
        let calc = PenaltyCalculator::new();
        assert_eq!(calc.event_resolution("Will it rain in London tomorrow?"), 1.0);
    }

    #[test]
    fn test_jump_volatility_thresholds() {
        let calc = PenaltyCalculator::new();
        let q = "Will it rain tomorrow?";
        assert_eq!(calc.jump_volatility(q, 0.35), 0.2);
        assert_eq!(calc.jump_volatility(q, -0.35), 0.2);
        assert_eq!(calc.jump_volatility(q, 0.25), 0.5);
        assert_eq!(calc.jump_volatility(q, 0.15), 0.8);
        assert_eq!(calc.jump_volatility(q, 0.05), 1.0);
        assert_eq!(calc.jump_volatility(q, 0.0), 1.0);
    }

    #[test]
    fn test_jump_volatility_keyword_zeroes() {
        let calc = PenaltyCalculator::new();
        assert_eq!(
            calc.jump_volatility("Will the election be contested?", 0.01),
            0.0
        );
    }

    #[test]
    fn test_drift_decaying_long_shot() {
        let calc = PenaltyCalculator::new();
        assert_eq!(calc.drift(0.10, -0.08), 0.0);
    }

    #[test]
    fn test_drift_converging_certainty() {
        let calc = PenaltyCalculator::new();
        assert_eq!(calc.drift(0.90, 0.08), 0.0);
    }

    #[test]
    fn test_drift_edge_band_without_drift() {
        let calc = PenaltyCalculator::new();
        assert_eq!(calc.drift(0.10, 0.02), 0.5);
        assert_eq!(calc.drift(0.90, -0.02), 0.5);
    }

    #[test]
    fn test_drift_stability_bonus() {
        let calc = PenaltyCalculator::new();
        assert_eq!(calc.drift(0.50, 0.01), 1.2);
        assert_eq!(calc.drift(0.50, -0.029), 1.2);
    }

    #[test]
    fn test_drift_neutral() {
        let calc = PenaltyCalculator::new();
        assert_eq!(calc.drift(0.50, 0.06), 1.0);
        assert_eq!(calc.drift(0.40, -0.04), 1.0);
    }
}

//! Static keyword taxonomies
//!
//! Two ordered lowercase substring lists drive the hard-exclusion keyword
//! gates: jump-risk terms (question is exposed to discontinuous news repricing)
//! and structural-decay terms (probability trends toward 0/1 by construction,
//! e.g. long-shot championship odds). Compiled in once, read-only at
//! evaluation time. Matching is case-insensitive substring containment; terms
//! carry deliberate spacing where a bare stem would over-match ("fed " avoids
//! "federation", "war " avoids "award").

/// Terms indicating exposure to sudden event-driven repricing
pub const JUMP_RISK_KEYWORDS: &[&str] = &[
    // Geopolitical
    "war ",
    "warfare",
    "invasion",
    "invade",
    "missile",
    "airstrike",
    "nuclear",
    "ceasefire",
    "truce",
    "sanction",
    "military",
    "troops",
    "hostage",
    "terror",
    "coup",
    "nato",
    "ukraine",
    "russia",
    "israel",
    "gaza",
    "iran",
    "taiwan",
    "north korea",
    "blockade",
    "annex",
    // Monetary / macro
    "fed ",
    "federal reserve",
    "fomc",
    "rate cut",
    "rate hike",
    "interest rate",
    "inflation",
    "cpi",
    "jobs report",
    "nonfarm",
    "payroll",
    "gdp",
    "recession",
    "tariff",
    "trade war",
    "trade deal",
    "stimulus",
    "debt ceiling",
    "shutdown",
    "default",
    "treasury yield",
    "central bank",
    // Legal
    "indict",
    "convict",
    "acquit",
    "verdict",
    "sentencing",
    "supreme court",
    "lawsuit",
    "charges",
    "arrested",
    "impeach",
    "pardon",
    "subpoena",
    "plea deal",
    // Electoral / political
    "election",
    "primary",
    "nominee",
    "nomination",
    "candidate",
    "ballot",
    "polls",
    "president",
    "senate",
    "congress",
    "governor",
    "cabinet",
    "resign",
    "veto",
];

/// Terms indicating a market that decays toward 0 or 1 over its lifetime
pub const STRUCTURAL_DECAY_KEYWORDS: &[&str] = &[
    "championship",
    "champions league",
    "super bowl",
    "world cup",
    "world series",
    "stanley cup",
    "finals",
    "playoffs",
    "mvp",
    "award",
    "oscar",
    "grammy",
    "emmy",
    "nobel",
    "heisman",
    "ballon d'or",
    "hall of fame",
    "rookie of the year",
    "person of the year",
    "medal",
    "olympic",
    "relegated",
    "draft pick",
    "all-time",
    "all time",
    "record high",
    "record low",
    "in history",
    "of all time",
    " ever ",
    " ever?",
    "first ever",
    "lifetime",
    "career",
    "retire",
];

/// Month names for countdown-phrasing detection
pub const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Verb stems that mark a single decisive resolution event
pub const DECISIVE_EVENT_TERMS: &[&str] = &[
    "announce",
    "rule on",
    "ruling",
    "verdict",
    "vote on",
    "vote to",
    "decide",
    "decision",
    "sign the",
    "approve",
    "confirm",
    "unveil",
    "testify",
    "release",
];

/// Return the first term contained in the (lowercased) question, if any
pub fn find_match(question_lower: &str, terms: &[&'static str]) -> Option<&'static str> {
    terms
        .iter()
        .find(|term| question_lower.contains(**term))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fed_matches_with_trailing_space() {
        let q = "will the fed cut rates in march?".to_string();
        assert_eq!(find_match(&q, JUMP_RISK_KEYWORDS), Some("fed "));
    }

    #[test]
    fn test_fed_stem_does_not_overmatch() {
        let q = "will the federation win the cup?".to_string();
        // "fed " must not fire inside "federation"
        assert_ne!(find_match(&q, JUMP_RISK_KEYWORDS), Some("fed "));
    }

    #[test]
    fn test_award_does_not_trip_war() {
        let q = "will she win the award this year?".to_string();
        assert_eq!(find_match(&q, JUMP_RISK_KEYWORDS), None);
        assert_eq!(find_match(&q, STRUCTURAL_DECAY_KEYWORDS), Some("award"));
    }

    #[test]
    fn test_championship_is_structural() {
        let q = "will team x win the championship?".to_string();
        assert_eq!(find_match(&q, JUMP_RISK_KEYWORDS), None);
        assert_eq!(
            find_match(&q, STRUCTURAL_DECAY_KEYWORDS),
            Some("championship")
        );
    }

    #[test]
    fn test_first_match_wins_order() {
        // Contains both "ukraine" and "ceasefire"; list order decides
        let q = "will a ceasefire hold in ukraine?".to_string();
        assert_eq!(find_match(&q, JUMP_RISK_KEYWORDS), Some("ceasefire"));
    }

    #[test]
    fn test_no_match() {
        let q = "will it rain in london tomorrow?".to_string();
        assert_eq!(find_match(&q, JUMP_RISK_KEYWORDS), None);
        assert_eq!(find_match(&q, STRUCTURAL_DECAY_KEYWORDS), None);
    }

    #[test]
    fn test_taxonomy_sizes() {
        assert!(JUMP_RISK_KEYWORDS.len() >= 65);
        assert!(STRUCTURAL_DECAY_KEYWORDS.len() >= 30);
    }
}

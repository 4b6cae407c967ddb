//! Safety scoring adapters

use rand::Rng;

use crate::ports::SafetyScorer;

/// Recipients the heuristic treats as trusted merchants
const KNOWN_SAFE_ACCOUNTS: [&str; 3] = ["amazon@upi", "swiggy@paytm", "google@pay"];

/// Banded heuristic scorer
///
/// Known merchants score 95-100, UPI-style handles 85-94, raw account
/// numbers 70-84. The value inside the band is randomized.
#[derive(Debug, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SafetyScorer for HeuristicScorer {
    fn score(&self, recipient_account: &str) -> u8 {
        let account = recipient_account.to_lowercase();
        let mut rng = rand::thread_rng();

        if KNOWN_SAFE_ACCOUNTS.iter().any(|safe| account.contains(safe)) {
            rng.gen_range(95..=100)
        } else if account.contains('@') {
            rng.gen_range(85..95)
        } else {
            rng.gen_range(70..85)
        }
    }
}

/// Scorer returning a fixed value, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer(pub u8);

impl SafetyScorer for FixedScorer {
    fn score(&self, _recipient_account: &str) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_merchants_score_in_top_band() {
        let scorer = HeuristicScorer::new();
        for _ in 0..50 {
            let score = scorer.score("amazon@upi");
            assert!((95..=100).contains(&score), "score {} out of band", score);
        }
    }

    #[test]
    fn test_upi_handles_score_in_middle_band() {
        let scorer = HeuristicScorer::new();
        for _ in 0..50 {
            let score = scorer.score("someone@okaxis");
            assert!((85..95).contains(&score), "score {} out of band", score);
        }
    }

    #[test]
    fn test_raw_accounts_score_in_low_band() {
        let scorer = HeuristicScorer::new();
        for _ in 0..50 {
            let score = scorer.score("000123456789");
            assert!((70..85).contains(&score), "score {} out of band", score);
        }
    }

    #[test]
    fn test_merchant_match_is_case_insensitive() {
        let scorer = HeuristicScorer::new();
        let score = scorer.score("AMAZON@UPI");
        assert!((95..=100).contains(&score));
    }

    #[test]
    fn test_fixed_scorer() {
        assert_eq!(FixedScorer(42).score("anything"), 42);
    }
}

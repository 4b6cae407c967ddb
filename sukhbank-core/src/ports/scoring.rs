//! Scoring port - fabricated fraud-risk assessment

/// Safety scoring for transfer recipients
///
/// Produces a 0-100 score for a recipient account. The score is a policy
/// stub, not derived from any real signal; keeping it behind a trait lets
/// tests supply deterministic values.
pub trait SafetyScorer {
    fn score(&self, recipient_account: &str) -> u8;
}

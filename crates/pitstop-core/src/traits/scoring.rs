use crate::models::ScoringInput;

/// One independent relevance sub-score.
///
/// Implementations must be pure and return a value in [0, 1].
pub trait IScoringStrategy: Send + Sync {
    fn score(&self, input: &ScoringInput<'_>) -> f64;
}

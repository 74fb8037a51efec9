use pitstop_core::models::{Message, ScoringInput};
use pitstop_core::text::jaccard;
use pitstop_core::traits::IScoringStrategy;

/// Highest Jaccard overlap between the message and any history message.
pub fn calculate(message: &Message, history: &[Message]) -> f64 {
    history
        .iter()
        .map(|h| jaccard(&message.keywords, &h.keywords))
        .fold(0.0, f64::max)
}

/// Default semantic strategy: plain keyword-set overlap. Swap in an
/// embedding-backed strategy through `RelevanceScorer::with_strategy`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalOverlap;

impl IScoringStrategy for LexicalOverlap {
    fn score(&self, input: &ScoringInput<'_>) -> f64 {
        calculate(input.message, input.history)
    }
}

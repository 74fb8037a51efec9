use pitstop_core::models::{Message, ScoringInput};
use pitstop_core::traits::IScoringStrategy;

use super::last_related;

/// Exponential decay: `e^(-λ · turns_ago)`.
///
/// Strictly decreasing in `turns_ago` for any positive λ.
pub fn decay(turns_ago: usize, lambda: f64) -> f64 {
    (-lambda * turns_ago as f64).exp()
}

/// Recency of the last related message; `turns_ago` is 0 when it is the
/// newest history entry. 0.0 when nothing in history is related.
pub fn calculate(message: &Message, history: &[Message], lambda: f64) -> f64 {
    match last_related(message, history) {
        Some(idx) => decay(history.len() - 1 - idx, lambda),
        None => 0.0,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecencyDecay {
    pub lambda: f64,
}

impl RecencyDecay {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }
}

impl IScoringStrategy for RecencyDecay {
    fn score(&self, input: &ScoringInput<'_>) -> f64 {
        calculate(input.message, input.history, self.lambda)
    }
}

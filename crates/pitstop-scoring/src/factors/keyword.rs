use pitstop_core::models::{Message, ScoringInput};
use pitstop_core::traits::IScoringStrategy;

/// Share of the message's keywords seen in the last `lookback` history
/// messages: `|M ∩ H| / |M|`.
///
/// Range: 0.0 – 1.0. A message without keywords scores 0.
pub fn calculate(message: &Message, history: &[Message], lookback: usize) -> f64 {
    if message.keywords.is_empty() {
        return 0.0;
    }
    let start = history.len().saturating_sub(lookback);
    let recent = &history[start..];
    let overlap = message
        .keywords
        .iter()
        .filter(|k| recent.iter().any(|h| h.has_keyword(k)))
        .count();
    overlap as f64 / message.keywords.len() as f64
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordOverlap {
    pub lookback: usize,
}

impl KeywordOverlap {
    pub fn new(lookback: usize) -> Self {
        Self { lookback }
    }
}

impl IScoringStrategy for KeywordOverlap {
    fn score(&self, input: &ScoringInput<'_>) -> f64 {
        calculate(input.message, input.history, self.lookback)
    }
}

//! Regex-based intent classification.

mod patterns;

use pitstop_core::traits::IIntentClassifier;

pub use patterns::{IntentPattern, INTENT_PATTERNS};

/// Labels a message by the intent whose patterns match it most often.
///
/// Ties go to the label declared first in [`INTENT_PATTERNS`]. Patterns
/// that failed to compile simply never match.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternIntentClassifier;

impl PatternIntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Match count per label, in declaration order.
    pub fn match_counts(&self, text: &str) -> Vec<(&'static str, usize)> {
        INTENT_PATTERNS
            .iter()
            .map(|pattern| (pattern.label, pattern.count_matches(text)))
            .collect()
    }
}

impl IIntentClassifier for PatternIntentClassifier {
    fn classify(&self, text: &str) -> Option<String> {
        let mut best: Option<(&'static str, usize)> = None;
        for (label, count) in self.match_counts(text) {
            if count == 0 {
                continue;
            }
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label.to_string())
    }
}

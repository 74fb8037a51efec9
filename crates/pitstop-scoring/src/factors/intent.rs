use std::sync::Arc;

use pitstop_core::models::{Message, ScoringInput};
use pitstop_core::traits::{IIntentClassifier, IScoringStrategy};

use super::best_match;

/// 1.0 when the message and its best-matching history message carry the
/// same intent label, else 0.0.
pub fn calculate(classifier: &dyn IIntentClassifier, message: &Message, history: &[Message]) -> f64 {
    let Some(idx) = best_match(message, history) else {
        return 0.0;
    };
    match (classifier.classify(&message.text), classifier.classify(&history[idx].text)) {
        (Some(a), Some(b)) if a == b => 1.0,
        _ => 0.0,
    }
}

#[derive(Clone)]
pub struct IntentAgreement {
    classifier: Arc<dyn IIntentClassifier>,
}

impl IntentAgreement {
    pub fn new(classifier: Arc<dyn IIntentClassifier>) -> Self {
        Self { classifier }
    }
}

impl IScoringStrategy for IntentAgreement {
    fn score(&self, input: &ScoringInput<'_>) -> f64 {
        calculate(self.classifier.as_ref(), input.message, input.history)
    }
}

//! RelevanceScorer — weighted sum of pluggable strategies.
//!
//! ```text
//! composite = Σ weightᵢ × strategyᵢ(message, history)
//! ```
//!
//! The sum is not renormalized; it is clamped to [0.0, 1.0].

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use pitstop_core::config::{defaults, ScoringConfig};
use pitstop_core::models::{factors, Degradation, Message, ScoreResult, ScoringInput, SubScore};
use pitstop_core::traits::{IIntentClassifier, IScoringStrategy};

use crate::factors::{IntentAgreement, KeywordOverlap, LexicalOverlap, RecencyDecay, TopicContinuity};

/// A named strategy and the weight its value contributes with.
pub struct WeightedStrategy {
    pub name: String,
    pub weight: f64,
    pub strategy: Box<dyn IScoringStrategy>,
}

impl std::fmt::Debug for WeightedStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedStrategy")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Placeholder intent strategy used until a classifier is injected.
struct NoIntent;

impl IScoringStrategy for NoIntent {
    fn score(&self, _input: &ScoringInput<'_>) -> f64 {
        0.0
    }
}

/// Scores a message against recent history. Stateless apart from a
/// once-only warning flag, so it can be shared freely across threads.
#[derive(Debug)]
pub struct RelevanceScorer {
    strategies: Vec<WeightedStrategy>,
    intent_missing: bool,
    warned: AtomicBool,
}

impl RelevanceScorer {
    /// The five built-in strategies with weights from `config`, with the
    /// topic decay spanning the default history window.
    ///
    /// Without a classifier the intent sub-score is always 0 and results
    /// are marked degraded. The missing classifier is logged at warn level
    /// on the first degraded call of each scorer and at debug level after
    /// that.
    pub fn new(config: &ScoringConfig) -> Self {
        Self::for_window(config, defaults::DEFAULT_HISTORY_WINDOW)
    }

    /// [`RelevanceScorer::new`] with the topic decay spanning `window`
    /// messages. Pass the session store's window so a related message at
    /// the oldest retained position scores 0.
    pub fn for_window(config: &ScoringConfig, window: usize) -> Self {
        let weights = config.weights;
        if !weights.is_normalized() {
            debug!(sum = weights.sum(), "scoring weights do not sum to 1.0");
        }
        let strategies = vec![
            entry(factors::KEYWORD, weights.keyword, KeywordOverlap::new(config.keyword_lookback)),
            entry(factors::TOPIC, weights.topic, TopicContinuity::new(window)),
            entry(factors::TEMPORAL, weights.temporal, RecencyDecay::new(config.temporal_lambda)),
            entry(factors::SEMANTIC, weights.semantic, LexicalOverlap),
            entry(factors::INTENT, weights.intent, NoIntent),
        ];
        Self {
            strategies,
            intent_missing: true,
            warned: AtomicBool::new(false),
        }
    }

    /// Enable the intent sub-score.
    pub fn with_classifier(self, classifier: Arc<dyn IIntentClassifier>) -> Self {
        let weight = self.weight_of(factors::INTENT).unwrap_or(0.0);
        self.with_strategy(factors::INTENT, weight, IntentAgreement::new(classifier))
    }

    /// Replace the strategy registered under `name`, or append a new one.
    pub fn with_strategy(
        mut self,
        name: &str,
        weight: f64,
        strategy: impl IScoringStrategy + 'static,
    ) -> Self {
        let replacement = WeightedStrategy {
            name: name.to_string(),
            weight,
            strategy: Box::new(strategy),
        };
        match self.strategies.iter_mut().find(|s| s.name == name) {
            Some(existing) => *existing = replacement,
            None => self.strategies.push(replacement),
        }
        if name == factors::INTENT {
            self.intent_missing = false;
        }
        self
    }

    pub fn strategies(&self) -> &[WeightedStrategy] {
        &self.strategies
    }

    pub fn weight_of(&self, name: &str) -> Option<f64> {
        self.strategies.iter().find(|s| s.name == name).map(|s| s.weight)
    }

    /// Score `message` against `history` (most recent last).
    ///
    /// A message without keywords or an empty history yields composite 0
    /// with every factor listed at 0.
    pub fn score(&self, message: &Message, history: &[Message]) -> ScoreResult {
        let degraded = self.degradations();
        let trivial = message.is_malformed() || history.is_empty();
        let input = ScoringInput::new(message, history);

        let mut breakdown = BTreeMap::new();
        let mut composite = 0.0;
        for entry in &self.strategies {
            let value = if trivial {
                0.0
            } else {
                entry.strategy.score(&input).clamp(0.0, 1.0)
            };
            let sub = SubScore {
                value,
                weight: entry.weight,
            };
            composite += sub.contribution();
            breakdown.insert(entry.name.clone(), sub);
        }

        let composite = composite.clamp(0.0, 1.0);
        debug!(
            composite,
            history_len = history.len(),
            keywords = message.keywords.len(),
            degraded = !degraded.is_empty(),
            "message scored"
        );
        ScoreResult {
            composite,
            breakdown,
            degraded,
        }
    }

    fn degradations(&self) -> Vec<Degradation> {
        if !self.intent_missing {
            return Vec::new();
        }
        if !self.warned.swap(true, Ordering::Relaxed) {
            warn!("no intent classifier configured, intent sub-score fixed at 0");
        } else {
            debug!("intent sub-score degraded");
        }
        vec![Degradation::IntentClassifierMissing]
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

fn entry(name: &str, weight: f64, strategy: impl IScoringStrategy + 'static) -> WeightedStrategy {
    WeightedStrategy {
        name: name.to_string(),
        weight,
        strategy: Box::new(strategy),
    }
}

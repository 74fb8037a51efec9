use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights applied to the five relevance sub-scores.
///
/// Expected to sum to 1.0 but never renormalized: the composite is the raw
/// weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub topic: f64,
    pub temporal: f64,
    pub semantic: f64,
    pub intent: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.keyword + self.topic + self.temporal + self.semantic + self.intent
    }

    /// Whether the weights sum to 1.0 (within float tolerance).
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-9
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: defaults::DEFAULT_KEYWORD_WEIGHT,
            topic: defaults::DEFAULT_TOPIC_WEIGHT,
            temporal: defaults::DEFAULT_TEMPORAL_WEIGHT,
            semantic: defaults::DEFAULT_SEMANTIC_WEIGHT,
            intent: defaults::DEFAULT_INTENT_WEIGHT,
        }
    }
}

/// Relevance scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// How many trailing history messages feed the keyword sub-score.
    pub keyword_lookback: usize,
    /// Decay rate λ of the temporal sub-score, per turn.
    pub temporal_lambda: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            keyword_lookback: defaults::DEFAULT_KEYWORD_LOOKBACK,
            temporal_lambda: defaults::DEFAULT_TEMPORAL_LAMBDA,
        }
    }
}

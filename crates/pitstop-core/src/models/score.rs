use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Message;

/// Names of the built-in sub-scores.
pub mod factors {
    pub const KEYWORD: &str = "keyword";
    pub const TOPIC: &str = "topic";
    pub const TEMPORAL: &str = "temporal";
    pub const SEMANTIC: &str = "semantic";
    pub const INTENT: &str = "intent";
}

/// Read-only view handed to each scoring strategy.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub message: &'a Message,
    /// Prior messages, most recent last.
    pub history: &'a [Message],
}

impl<'a> ScoringInput<'a> {
    pub fn new(message: &'a Message, history: &'a [Message]) -> Self {
        Self { message, history }
    }
}

/// A single sub-score and the weight it was applied with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    /// Raw value in [0, 1].
    pub value: f64,
    pub weight: f64,
}

impl SubScore {
    pub fn contribution(&self) -> f64 {
        self.value * self.weight
    }
}

/// A sub-score computed in a lower-quality mode because an optional
/// collaborator was absent. Not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    /// No intent classifier injected; the intent sub-score is 0.
    IntentClassifierMissing,
}

/// Outcome of scoring a message against recent history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Composite relevance in [0, 1].
    pub composite: f64,
    pub breakdown: BTreeMap<String, SubScore>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<Degradation>,
}

impl ScoreResult {
    /// A result carrying only a composite value, with an empty breakdown.
    pub fn from_composite(composite: f64) -> Self {
        Self {
            composite,
            ..Self::default()
        }
    }

    pub fn factor(&self, name: &str) -> Option<&SubScore> {
        self.breakdown.get(name)
    }

    /// Raw value of a sub-score, 0.0 when absent.
    pub fn value_of(&self, name: &str) -> f64 {
        self.factor(name).map(|s| s.value).unwrap_or(0.0)
    }

    /// Whether prior context is still worth carrying forward.
    pub fn maintains_context(&self, threshold: f64) -> bool {
        self.composite >= threshold
    }

    /// [`ScoreResult::maintains_context`] at the default threshold.
    pub fn keeps_context(&self) -> bool {
        self.maintains_context(crate::config::defaults::DEFAULT_MAINTAIN_CONTEXT_THRESHOLD)
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

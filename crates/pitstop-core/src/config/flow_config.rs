use serde::{Deserialize, Serialize};

use super::defaults;

/// Conversation flow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Composite scores below this reset the conversation to problem description.
    pub low_relevance_threshold: f64,
    /// Keywords a problem statement needs before it counts as diagnosable.
    pub min_detail_keywords: usize,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            low_relevance_threshold: defaults::DEFAULT_LOW_RELEVANCE_THRESHOLD,
            min_detail_keywords: defaults::DEFAULT_MIN_DETAIL_KEYWORDS,
        }
    }
}

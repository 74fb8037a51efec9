//! Default values for every configuration field.

// Session store
pub const DEFAULT_HISTORY_WINDOW: usize = 20;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60 * 60;

// Relevance scoring
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.30;
pub const DEFAULT_TOPIC_WEIGHT: f64 = 0.25;
pub const DEFAULT_TEMPORAL_WEIGHT: f64 = 0.20;
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.15;
pub const DEFAULT_INTENT_WEIGHT: f64 = 0.10;
pub const DEFAULT_KEYWORD_LOOKBACK: usize = 5;
/// Temporal relevance halves every 4 turns.
pub const DEFAULT_TEMPORAL_LAMBDA: f64 = std::f64::consts::LN_2 / 4.0;

// Conversation flow
pub const DEFAULT_LOW_RELEVANCE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_MIN_DETAIL_KEYWORDS: usize = 2;

// Context maintenance
pub const DEFAULT_MAINTAIN_CONTEXT_THRESHOLD: f64 = 0.6;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";

//! # pitstop-scoring
//!
//! Rates how relevant a new message is to recent history.
//!
//! The composite score is a weighted sum of independent strategies
//! (keyword, topic, temporal, semantic, intent), each in [0, 1]. Any
//! strategy can be swapped for a custom `IScoringStrategy`.

pub mod factors;
pub mod intent;
pub mod lexicon;
pub mod scorer;
pub mod topic;

pub use intent::PatternIntentClassifier;
pub use scorer::{RelevanceScorer, WeightedStrategy};
pub use topic::detect_topic;

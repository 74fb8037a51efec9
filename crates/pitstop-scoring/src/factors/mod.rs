//! The five built-in relevance factors.
//!
//! Each factor exposes a `calculate` function and a strategy type that
//! wraps it behind `IScoringStrategy`. All values are in [0, 1].

pub mod intent;
pub mod keyword;
pub mod semantic;
pub mod temporal;
pub mod topic;

use pitstop_core::models::Message;
use pitstop_core::text::jaccard;

pub use intent::IntentAgreement;
pub use keyword::KeywordOverlap;
pub use semantic::LexicalOverlap;
pub use temporal::RecencyDecay;
pub use topic::TopicContinuity;

/// Index of the most recent history message sharing a keyword with `message`.
pub(crate) fn last_related(message: &Message, history: &[Message]) -> Option<usize> {
    history.iter().rposition(|h| message.shares_keywords(h))
}

/// Index of the history message with the highest keyword overlap.
///
/// Ties go to the most recent; with no overlap at all, the last message.
pub(crate) fn best_match(message: &Message, history: &[Message]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in history.iter().enumerate() {
        let overlap = jaccard(&message.keywords, &candidate.keywords);
        if best.map_or(true, |(_, best_overlap)| overlap >= best_overlap) {
            best = Some((idx, overlap));
        }
    }
    best.map(|(idx, _)| idx)
}

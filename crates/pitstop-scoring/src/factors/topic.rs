use pitstop_core::models::{Message, Role, ScoringInput};
use pitstop_core::traits::IScoringStrategy;

use super::last_related;
use crate::lexicon::dominant_keyword;

/// Topic continuity.
///
/// 1.0 when the message mentions the dominant keyword of the latest
/// assistant turn. Otherwise decays linearly with the distance `d` to the
/// most recent related message: `max(0, 1 - d / window)`, 0 with none.
pub fn calculate(message: &Message, history: &[Message], window: usize) -> f64 {
    if message.keywords.is_empty() || history.is_empty() {
        return 0.0;
    }

    let anchor = history
        .iter()
        .rev()
        .find(|h| h.role == Role::Assistant && !h.keywords.is_empty());
    if let Some(dominant) = anchor.and_then(|a| dominant_keyword(&a.keywords)) {
        if message.has_keyword(dominant) {
            return 1.0;
        }
    }

    match last_related(message, history) {
        Some(idx) => {
            let distance = (history.len() - idx) as f64;
            (1.0 - distance / window.max(1) as f64).max(0.0)
        }
        None => 0.0,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TopicContinuity {
    pub window: usize,
}

impl TopicContinuity {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl IScoringStrategy for TopicContinuity {
    fn score(&self, input: &ScoringInput<'_>) -> f64 {
        calculate(input.message, input.history, self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentioning_the_assistant_topic_scores_full() {
        let history = vec![
            Message::user("motor susah dihidupkan"),
            Message::assistant("kemungkinan aki lemah, cek kampas rem juga"),
            Message::user("oke"),
        ];
        let message = Message::user("aki sudah diganti");
        assert_eq!(calculate(&message, &history, 20), 1.0);
    }

    #[test]
    fn related_message_decays_with_distance() {
        let history = vec![
            Message::user("motor susah dihidupkan"),
            Message::user("tadi pagi"),
        ];
        let message = Message::user("motor honda beat");
        // related message at distance 2
        assert!((calculate(&message, &history, 20) - 0.9).abs() < 1e-9);
        assert_eq!(calculate(&message, &history, 2), 0.0);
    }

    #[test]
    fn unrelated_message_scores_zero() {
        let history = vec![Message::assistant("cek aki")];
        assert_eq!(calculate(&Message::user("jadwal besok"), &history, 20), 0.0);
    }
}

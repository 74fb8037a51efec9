use proptest::prelude::*;

use pitstop_core::config::defaults::DEFAULT_TEMPORAL_LAMBDA;
use pitstop_core::models::Message;
use pitstop_scoring::factors::{keyword, temporal};
use pitstop_scoring::RelevanceScorer;

const VOCAB: &[&str] = &[
    "rem", "blong", "oli", "mesin", "aki", "busi", "motor", "honda", "kampas", "jadwal", "biaya",
    "bocor", "mogok", "halo",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn composite_stays_in_unit_interval(
        message in text_strategy(),
        turns in prop::collection::vec(text_strategy(), 0..12),
    ) {
        let scorer = RelevanceScorer::default();
        let history: Vec<Message> = turns.iter().map(|t| Message::user(t.as_str())).collect();
        let result = scorer.score(&Message::user(message), &history);
        prop_assert!((0.0..=1.0).contains(&result.composite));
        for sub in result.breakdown.values() {
            prop_assert!((0.0..=1.0).contains(&sub.value));
        }
    }

    #[test]
    fn keyword_score_grows_with_overlap(
        words in prop::collection::hash_set(prop::sample::select(VOCAB), 2..8),
        split in 0usize..8,
    ) {
        let words: Vec<&str> = words.into_iter().collect();
        let message = Message::user(words.join(" "));
        let k = split.min(words.len() - 1);
        let fewer = vec![Message::user(words[..k].join(" "))];
        let more = vec![Message::user(words[..k + 1].join(" "))];
        prop_assert!(
            keyword::calculate(&message, &more, 5) > keyword::calculate(&message, &fewer, 5)
        );
    }

    #[test]
    fn temporal_decay_strictly_decreases(turns in 0usize..200) {
        prop_assert!(
            temporal::decay(turns + 1, DEFAULT_TEMPORAL_LAMBDA)
                < temporal::decay(turns, DEFAULT_TEMPORAL_LAMBDA)
        );
    }
}

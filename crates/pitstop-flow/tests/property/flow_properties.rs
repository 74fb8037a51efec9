use proptest::prelude::*;

use pitstop_core::models::{ConversationState, Message, ScoreResult};
use pitstop_flow::FlowEngine;

const VOCAB: &[&str] = &[
    "rem", "blong", "oli", "halo", "terima", "kasih", "berapa", "jadwal", "mesin", "motor", "aki",
    "kapan", "mati",
];

fn state_strategy() -> impl Strategy<Value = ConversationState> {
    prop::sample::select(ConversationState::ALL.to_vec())
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..5).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn next_state_is_pure(
        state in state_strategy(),
        text in text_strategy(),
        composite in 0.0f64..=1.0,
    ) {
        let flow = FlowEngine::default();
        let message = Message::user(text);
        let score = ScoreResult::from_composite(composite);
        let first = flow.next_state(state, &message, &score);
        for _ in 0..3 {
            prop_assert_eq!(flow.next_state(state, &message, &score), first);
        }
        prop_assert_eq!(FlowEngine::default().next_state(state, &message, &score), first);
    }

    #[test]
    fn markers_win_regardless_of_score(state in state_strategy(), composite in 0.0f64..=1.0) {
        let flow = FlowEngine::default();
        let score = ScoreResult::from_composite(composite);
        prop_assert_eq!(
            flow.next_state(state, &Message::user("terima kasih"), &score),
            ConversationState::Closing
        );
    }
}

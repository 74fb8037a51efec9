use pitstop_core::models::Role;
use pitstop_session::SessionStore;
use proptest::prelude::*;

proptest! {
    #[test]
    fn window_holds_exactly_the_most_recent_messages(
        window in 1usize..30,
        count in 0usize..80,
    ) {
        let store = SessionStore::new(window);
        store.get_or_create("s").unwrap();
        for i in 0..count {
            store.add_message("s", Role::User, &format!("m{i}")).unwrap();
        }

        let history = store.recent_history("s", window).unwrap();
        prop_assert!(history.len() <= window);
        prop_assert_eq!(history.len(), count.min(window));

        let expected: Vec<String> = (count.saturating_sub(window)..count)
            .map(|i| format!("m{i}"))
            .collect();
        let actual: Vec<String> = history.into_iter().map(|m| m.text).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn recent_history_never_exceeds_k(k in 0usize..40, count in 0usize..40) {
        let store = SessionStore::new(20);
        store.get_or_create("s").unwrap();
        for i in 0..count {
            store.add_message("s", Role::Assistant, &format!("r{i}")).unwrap();
        }
        let history = store.recent_history("s", k).unwrap();
        prop_assert!(history.len() <= k.min(20));
    }
}

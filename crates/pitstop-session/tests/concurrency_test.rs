use std::sync::Arc;
use std::thread;

use chrono::{Duration, Utc};
use pitstop_core::models::{ConversationState, Role};
use pitstop_session::SessionStore;

#[test]
fn concurrent_writes_to_distinct_sessions_no_corruption() {
    let store = Arc::new(SessionStore::new(1_000));
    let mut handles = vec![];

    for i in 0..4 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            let sid = format!("sess{i}");
            for j in 0..100 {
                store
                    .add_message(&sid, Role::User, &format!("pesan {i} {j}"))
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..4 {
        let history = store.recent_history(&format!("sess{i}"), 1_000).unwrap();
        assert_eq!(history.len(), 100, "session {i} lost messages");
    }
}

#[test]
fn concurrent_writes_to_same_session_are_not_lost() {
    let store = Arc::new(SessionStore::new(1_000));
    store.get_or_create("shared").unwrap();
    let mut handles = vec![];

    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for j in 0..50 {
                store
                    .add_message("shared", Role::User, &format!("t{i} m{j}"))
                    .unwrap();
                store
                    .set_state("shared", ConversationState::Diagnosis)
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let session = store.snapshot("shared").unwrap();
    assert_eq!(session.messages.len(), 400);
    assert_eq!(session.state, ConversationState::Diagnosis);
    // Every thread's messages are present in its own order.
    for i in 0..8 {
        let prefix = format!("t{i} ");
        let mine: Vec<&str> = session
            .messages
            .iter()
            .filter(|m| m.text.starts_with(&prefix))
            .map(|m| m.text.as_str())
            .collect();
        let expected: Vec<String> = (0..50).map(|j| format!("t{i} m{j}")).collect();
        assert_eq!(mine, expected);
    }
}

#[test]
fn cleanup_concurrent_with_traffic_never_loses_live_writes() {
    let store = Arc::new(SessionStore::new(50));
    let writer_store = Arc::clone(&store);
    let writer = thread::spawn(move || {
        for j in 0..200 {
            let result = writer_store.add_message("hot", Role::User, &format!("m{j}"));
            if let Err(e) = result {
                // The sweep may purge between calls; re-create and carry on.
                assert!(e.is_session_expired());
                writer_store.get_or_create("hot").unwrap();
            }
        }
    });

    let sweeper_store = Arc::clone(&store);
    let sweeper = thread::spawn(move || {
        let mut removed = 0;
        for _ in 0..200 {
            removed += sweeper_store.cleanup_at(Duration::zero(), Utc::now() + Duration::hours(1));
        }
        removed
    });

    writer.join().unwrap();
    sweeper.join().unwrap();

    // Whatever survived is internally consistent.
    if let Ok(session) = store.snapshot("hot") {
        assert!(session.messages.len() <= 50);
        assert!(session.last_active_at >= session.created_at);
    }
}

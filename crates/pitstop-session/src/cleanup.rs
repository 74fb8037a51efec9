//! Expiry sweep: removes sessions idle past the TTL.
//!
//! Idempotent. Sessions whose lock is held by a writer are skipped and
//! picked up by a later sweep, so a session is never removed mid-mutation.

use std::sync::{Arc, TryLockError};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::store::{SessionHandle, SessionStore};

pub(crate) fn sweep_expired(store: &SessionStore, ttl: chrono::Duration, now: DateTime<Utc>) -> usize {
    // Snapshot handles first: removing while iterating would deadlock on
    // the shard lock held by the iterator.
    let candidates: Vec<(String, SessionHandle)> = store
        .sessions
        .iter()
        .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
        .collect();

    let mut removed = 0;
    for (session_id, handle) in candidates {
        let mut slot = match handle.try_lock() {
            Ok(slot) => slot,
            Err(TryLockError::WouldBlock) => {
                debug!(session_id = %session_id, "session busy, skipping expiry check");
                continue;
            }
            Err(TryLockError::Poisoned(_)) => {
                warn!(session_id = %session_id, "session lock poisoned, skipping expiry check");
                continue;
            }
        };
        if slot.evicted || !slot.session.is_expired(ttl, now) {
            continue;
        }
        // Only remove the exact handle we checked; a restore may have
        // replaced it in the meantime.
        let still_mapped = store
            .sessions
            .remove_if(&session_id, |_, current| Arc::ptr_eq(current, &handle))
            .is_some();
        if still_mapped {
            slot.evicted = true;
            store.tombstones.insert(session_id.clone(), now);
            removed += 1;
            debug!(
                session_id = %session_id,
                idle_secs = slot.session.idle_duration(now).num_seconds(),
                "expired session removed"
            );
        }
    }

    store
        .tombstones
        .retain(|session_id, purged_at| now - *purged_at <= ttl && !store.sessions.contains_key(session_id));

    if removed > 0 {
        info!(removed, remaining = store.sessions.len(), "session cleanup complete");
    }
    removed
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pitstop_core::models::Role;

    use super::*;

    #[test]
    fn busy_sessions_are_not_evicted() {
        let store = SessionStore::new(20);
        store.add_message("busy", Role::User, "rem blong").unwrap();
        let far_future = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();

        let handle = store
            .sessions
            .get("busy")
            .map(|entry| Arc::clone(entry.value()))
            .unwrap();
        let guard = handle.lock().unwrap();
        assert_eq!(sweep_expired(&store, Duration::hours(1), far_future), 0);
        drop(guard);

        assert_eq!(sweep_expired(&store, Duration::hours(1), far_future), 1);
        assert!(store.is_tombstoned("busy"));
    }

    #[test]
    fn tombstones_survive_repeated_sweeps_within_ttl() {
        let store = SessionStore::new(20);
        let ttl = Duration::hours(1);
        let start = Utc::now();
        store
            .restore(pitstop_core::models::Session::new_at("idle", start - Duration::hours(2)))
            .unwrap();

        assert_eq!(sweep_expired(&store, ttl, start), 1);
        for tick in 1..=5 {
            let now = start + Duration::milliseconds(10 * tick);
            assert_eq!(sweep_expired(&store, ttl, now), 0);
            assert!(store.is_tombstoned("idle"));
        }
    }

    #[test]
    fn tombstones_are_pruned_after_ttl() {
        let store = SessionStore::new(20);
        store.add_message("old", Role::User, "oli bocor").unwrap();
        let ttl = Duration::hours(1);
        let later = Utc::now() + Duration::hours(2);

        assert_eq!(sweep_expired(&store, ttl, later), 1);
        assert!(store.is_tombstoned("old"));

        assert_eq!(sweep_expired(&store, ttl, later + Duration::hours(2)), 0);
        assert!(!store.is_tombstoned("old"));
    }
}

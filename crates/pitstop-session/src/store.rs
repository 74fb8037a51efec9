//! SessionStore — concurrent per-session access via DashMap.
//!
//! The map's shard locks are only held long enough to look up or insert a
//! session handle. All mutation happens under the handle's own mutex, so
//! different sessions never contend and the same session is serialized.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use pitstop_core::config::{defaults, SessionConfig};
use pitstop_core::errors::{PitstopError, PitstopResult, SessionError};
use pitstop_core::models::{ConversationState, Message, Role, Session, VehicleProfile};

use crate::validation::validate_session_id;

/// A session plus the flag the expiry sweep sets when it purges it.
pub(crate) struct SessionSlot {
    pub(crate) session: Session,
    pub(crate) evicted: bool,
}

pub(crate) type SessionHandle = Arc<Mutex<SessionSlot>>;

/// Thread-safe session store.
///
/// Construct once and share behind an `Arc`. Starts empty; dropping it (or
/// calling [`SessionStore::clear`]) discards every session.
pub struct SessionStore {
    pub(crate) sessions: DashMap<String, SessionHandle>,
    /// Ids purged by the expiry sweep, with the time they were purged.
    pub(crate) tombstones: DashMap<String, DateTime<Utc>>,
    window: usize,
}

impl SessionStore {
    /// Create a store retaining at most `window` messages per session.
    pub fn new(window: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            tombstones: DashMap::new(),
            window: window.max(1),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.window)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Return the session for `session_id`, creating an empty one if absent.
    ///
    /// Re-creating an id that the expiry sweep purged is allowed and yields
    /// a fresh session.
    pub fn get_or_create(&self, session_id: &str) -> PitstopResult<Session> {
        validate_session_id(session_id)?;
        loop {
            self.tombstones.remove(session_id);
            let handle = self.handle_or_insert(session_id, Utc::now());
            let slot = lock(&handle, session_id)?;
            // Lost a race with the sweep: the next pass inserts a fresh one.
            if slot.evicted {
                continue;
            }
            return Ok(slot.session.clone());
        }
    }

    /// Tokenize `text` and append it to the session's history.
    pub fn add_message(&self, session_id: &str, role: Role, text: &str) -> PitstopResult<Message> {
        self.append(session_id, Message::new(role, text))
    }

    /// Append an already-built message, creating the session for an unseen
    /// id. Evicts the oldest messages past the window.
    ///
    /// Fails with `SessionExpired` when the sweep purged the session and it
    /// has not been re-created with [`SessionStore::get_or_create`].
    pub fn append(&self, session_id: &str, message: Message) -> PitstopResult<Message> {
        validate_session_id(session_id)?;
        let handle = self.writable_handle(session_id, message.timestamp)?;
        let mut slot = lock(&handle, session_id)?;
        if slot.evicted {
            return Err(expired(session_id));
        }
        let evicted = slot.session.push_message(message.clone(), self.window);
        debug!(
            session_id = %session_id,
            role = %message.role,
            keywords = message.keywords.len(),
            evicted,
            "message appended"
        );
        Ok(message)
    }

    /// The last `k` messages (capped at the window), most recent last.
    pub fn recent_history(&self, session_id: &str, k: usize) -> PitstopResult<Vec<Message>> {
        let k = k.min(self.window);
        self.read(session_id, |session| session.recent(k))
    }

    /// Overwrite the conversation stage. Transition legality is the flow
    /// engine's concern.
    pub fn set_state(&self, session_id: &str, state: ConversationState) -> PitstopResult<()> {
        self.update(session_id, |session| session.state = state)
    }

    pub fn set_topic(&self, session_id: &str, topic: Option<String>) -> PitstopResult<()> {
        self.update(session_id, |session| session.current_topic = topic)
    }

    /// Merge newly reported vehicle details into the session's profile.
    pub fn update_vehicle(&self, session_id: &str, profile: &VehicleProfile) -> PitstopResult<()> {
        self.update(session_id, |session| session.vehicle.merge(profile))
    }

    /// Cloned snapshot of a session.
    pub fn snapshot(&self, session_id: &str) -> PitstopResult<Session> {
        self.read(session_id, Session::clone)
    }

    /// Insert a session loaded from persistence, replacing any live copy.
    pub fn restore(&self, mut session: Session) -> PitstopResult<()> {
        validate_session_id(&session.id)?;
        session.trim_to(self.window);
        let id = session.id.clone();
        self.tombstones.remove(&id);
        let previous = self.sessions.insert(
            id.clone(),
            Arc::new(Mutex::new(SessionSlot {
                session,
                evicted: false,
            })),
        );
        if let Some(previous) = previous {
            lock(&previous, &id)?.evicted = true;
        }
        debug!(session_id = %id, "session restored");
        Ok(())
    }

    /// Insert a loaded session unless the id is already live. Returns
    /// whether it was inserted.
    pub fn restore_if_absent(&self, mut session: Session) -> PitstopResult<bool> {
        validate_session_id(&session.id)?;
        session.trim_to(self.window);
        let id = session.id.clone();
        let mut inserted = false;
        self.sessions.entry(id.clone()).or_insert_with(|| {
            inserted = true;
            Arc::new(Mutex::new(SessionSlot {
                session,
                evicted: false,
            }))
        });
        if inserted {
            self.tombstones.remove(&id);
            debug!(session_id = %id, "session restored");
        }
        Ok(inserted)
    }

    /// Explicitly remove a session. Returns it if it was present.
    pub fn evict(&self, session_id: &str) -> PitstopResult<Option<Session>> {
        let Some((_, handle)) = self.sessions.remove(session_id) else {
            return Ok(None);
        };
        let mut slot = lock(&handle, session_id)?;
        slot.evicted = true;
        debug!(session_id = %session_id, "session evicted");
        Ok(Some(slot.session.clone()))
    }

    /// Drop every session and tombstone.
    pub fn clear(&self) {
        let handles: Vec<SessionHandle> = self
            .sessions
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        self.sessions.clear();
        self.tombstones.clear();
        for handle in handles {
            if let Ok(mut slot) = handle.lock() {
                slot.evicted = true;
            }
        }
    }

    /// Remove every session idle for longer than `ttl`. Returns how many
    /// were removed.
    pub fn cleanup(&self, ttl: chrono::Duration) -> usize {
        self.cleanup_at(ttl, Utc::now())
    }

    /// [`SessionStore::cleanup`] evaluated at an explicit instant.
    pub fn cleanup_at(&self, ttl: chrono::Duration, now: DateTime<Utc>) -> usize {
        crate::cleanup::sweep_expired(self, ttl, now)
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Whether the sweep purged this id and it has not been re-created.
    pub fn is_tombstoned(&self, session_id: &str) -> bool {
        !self.contains(session_id) && self.tombstones.contains_key(session_id)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Ids of all live sessions.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    fn live_handle(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions
            .get(session_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    fn handle_or_insert(&self, session_id: &str, now: DateTime<Utc>) -> SessionHandle {
        if let Some(handle) = self.live_handle(session_id) {
            return handle;
        }
        let entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!(session_id = %session_id, "session created");
                Arc::new(Mutex::new(SessionSlot {
                    session: Session::new_at(session_id, now),
                    evicted: false,
                }))
            });
        Arc::clone(entry.value())
    }

    /// Live handle, or a new session unless the id is tombstoned.
    fn writable_handle(&self, session_id: &str, now: DateTime<Utc>) -> PitstopResult<SessionHandle> {
        if let Some(handle) = self.live_handle(session_id) {
            return Ok(handle);
        }
        if self.tombstones.contains_key(session_id) {
            return Err(expired(session_id));
        }
        Ok(self.handle_or_insert(session_id, now))
    }

    /// Live handle for an existing session.
    fn existing_handle(&self, session_id: &str) -> PitstopResult<SessionHandle> {
        validate_session_id(session_id)?;
        if let Some(handle) = self.live_handle(session_id) {
            return Ok(handle);
        }
        if self.tombstones.contains_key(session_id) {
            return Err(expired(session_id));
        }
        Err(SessionError::SessionNotFound {
            id: session_id.to_string(),
        }
        .into())
    }

    fn read<T>(&self, session_id: &str, f: impl FnOnce(&Session) -> T) -> PitstopResult<T> {
        let handle = self.existing_handle(session_id)?;
        let slot = lock(&handle, session_id)?;
        if slot.evicted {
            return Err(expired(session_id));
        }
        Ok(f(&slot.session))
    }

    fn update(&self, session_id: &str, f: impl FnOnce(&mut Session)) -> PitstopResult<()> {
        let handle = self.existing_handle(session_id)?;
        let mut slot = lock(&handle, session_id)?;
        if slot.evicted {
            return Err(expired(session_id));
        }
        f(&mut slot.session);
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_HISTORY_WINDOW)
    }
}

fn lock<'a>(handle: &'a SessionHandle, session_id: &str) -> PitstopResult<MutexGuard<'a, SessionSlot>> {
    handle.lock().map_err(|_| PitstopError::LockPoisoned {
        id: session_id.to_string(),
    })
}

fn expired(session_id: &str) -> PitstopError {
    SessionError::SessionExpired {
        id: session_id.to_string(),
    }
    .into()
}

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConversationState, Message, VehicleProfile};

/// A bounded, expiring conversation record keyed by an external id.
///
/// `messages` holds at most the store's window, most recent last.
/// `last_active_at` never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub messages: VecDeque<Message>,
    pub current_topic: Option<String>,
    pub state: ConversationState,
    #[serde(default)]
    pub vehicle: VehicleProfile,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    /// Create an empty session in the greeting state.
    pub fn new(id: impl Into<String>) -> Self {
        Self::new_at(id, Utc::now())
    }

    pub fn new_at(id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            messages: VecDeque::new(),
            current_topic: None,
            state: ConversationState::default(),
            vehicle: VehicleProfile::default(),
            created_at: now,
            last_active_at: now,
        }
    }

    /// Append a message, evicting the oldest ones past `window`.
    /// Returns how many messages were evicted.
    pub fn push_message(&mut self, message: Message, window: usize) -> usize {
        self.touch(message.timestamp);
        self.messages.push_back(message);
        self.trim_to(window)
    }

    /// Drop the oldest messages until at most `window` remain.
    pub fn trim_to(&mut self, window: usize) -> usize {
        let window = window.max(1);
        let excess = self.messages.len().saturating_sub(window);
        for _ in 0..excess {
            self.messages.pop_front();
        }
        excess
    }

    /// Mark activity at `now`, never moving `last_active_at` backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_active_at {
            self.last_active_at = now;
        }
    }

    /// The last `k` messages, most recent last.
    pub fn recent(&self, k: usize) -> Vec<Message> {
        let skip = self.messages.len().saturating_sub(k);
        self.messages.iter().skip(skip).cloned().collect()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.back()
    }

    pub fn idle_duration(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.last_active_at
    }

    /// Inactive for strictly longer than `ttl`.
    pub fn is_expired(&self, ttl: chrono::Duration, now: DateTime<Utc>) -> bool {
        self.idle_duration(now) > ttl
    }
}

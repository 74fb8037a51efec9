use serde::{Deserialize, Serialize};

use super::{ConversationState, Message, ScoreResult, VehicleProfile};

/// Enriched context forwarded to the response engine for one user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextBundle {
    pub session_id: String,
    pub previous_state: ConversationState,
    pub state: ConversationState,
    pub score: ScoreResult,
    pub topic: Option<String>,
    pub vehicle: VehicleProfile,
    /// Session history including the new message, most recent last.
    pub history: Vec<Message>,
    /// One-line rendering of vehicle, topic, and the latest turns.
    pub context_line: String,
}

impl ContextBundle {
    pub fn state_changed(&self) -> bool {
        self.previous_state != self.state
    }

    /// The user message this bundle was built for.
    pub fn latest_message(&self) -> Option<&Message> {
        self.history.last()
    }
}

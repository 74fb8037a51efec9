//! Conversation summaries and the one-line context handed to the response
//! engine.

use serde::{Deserialize, Serialize};

use pitstop_core::constants::{CONTEXT_LINE_MESSAGES, CONTEXT_LINE_SNIPPET_CHARS};
use pitstop_core::models::{ConversationState, Role, Session};

/// Coarse progress of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Starting,
    Ongoing,
    Completed,
}

/// Counts and status for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub session_id: String,
    pub status: ConversationStatus,
    pub state: ConversationState,
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub topic: Option<String>,
}

/// Summarize a session. A session in `closing` is completed; one with more
/// than three user turns is ongoing.
pub fn summarize(session: &Session) -> ConversationSummary {
    let user_messages = session
        .messages
        .iter()
        .filter(|m| m.role == Role::User)
        .count();
    let assistant_messages = session.messages.len() - user_messages;

    let status = if session.state == ConversationState::Closing {
        ConversationStatus::Completed
    } else if user_messages > 3 {
        ConversationStatus::Ongoing
    } else {
        ConversationStatus::Starting
    };

    ConversationSummary {
        session_id: session.id.clone(),
        status,
        state: session.state,
        total_messages: session.messages.len(),
        user_messages,
        assistant_messages,
        topic: session.current_topic.clone(),
    }
}

/// Render vehicle, topic, and the last few turns as a single line.
pub fn context_line(session: &Session) -> String {
    let mut parts = Vec::new();

    if !session.vehicle.is_empty() {
        parts.push(format!("vehicle: {}", session.vehicle.describe()));
    }
    if let Some(topic) = &session.current_topic {
        parts.push(format!("topic: {topic}"));
    }

    let recent = session.recent(CONTEXT_LINE_MESSAGES);
    if !recent.is_empty() {
        let turns: Vec<String> = recent
            .iter()
            .map(|m| format!("{}: {}", m.role, snippet(&m.text)))
            .collect();
        parts.push(format!("history: {}", turns.join(" / ")));
    }

    if parts.is_empty() {
        "new conversation".to_string()
    } else {
        parts.join(" | ")
    }
}

fn snippet(text: &str) -> String {
    if text.chars().count() <= CONTEXT_LINE_SNIPPET_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(CONTEXT_LINE_SNIPPET_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use pitstop_core::models::Message;

    use super::*;

    fn session_with(turns: &[(Role, &str)]) -> Session {
        let mut session = Session::new("s1");
        for (role, text) in turns {
            session.push_message(Message::new(*role, *text), 20);
        }
        session
    }

    #[test]
    fn empty_session_is_starting() {
        let session = Session::new("s1");
        let summary = summarize(&session);
        assert_eq!(summary.status, ConversationStatus::Starting);
        assert_eq!(summary.total_messages, 0);
        assert_eq!(context_line(&session), "new conversation");
    }

    #[test]
    fn counts_roles_and_detects_ongoing() {
        let session = session_with(&[
            (Role::User, "motor mogok"),
            (Role::Assistant, "cek busi"),
            (Role::User, "sudah dicek"),
            (Role::User, "masih mogok"),
            (Role::User, "aki baru"),
        ]);
        let summary = summarize(&session);
        assert_eq!(summary.user_messages, 4);
        assert_eq!(summary.assistant_messages, 1);
        assert_eq!(summary.status, ConversationStatus::Ongoing);
    }

    #[test]
    fn closing_state_is_completed() {
        let mut session = session_with(&[(Role::User, "terima kasih")]);
        session.state = ConversationState::Closing;
        assert_eq!(summarize(&session).status, ConversationStatus::Completed);
    }

    #[test]
    fn context_line_truncates_long_turns() {
        let long = "a".repeat(80);
        let mut session = session_with(&[(Role::User, long.as_str())]);
        session.current_topic = Some("rem".into());
        let line = context_line(&session);
        assert!(line.starts_with("topic: rem | history: user: "));
        assert!(line.ends_with(&format!("{}...", "a".repeat(50))));
    }
}

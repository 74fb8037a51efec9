//! Structured log events for the per-message pipeline.

use pitstop_core::models::{ConversationState, ScoreResult};

pub fn message_processed(
    session_id: &str,
    from: ConversationState,
    to: ConversationState,
    score: &ScoreResult,
) {
    tracing::info!(
        event = "message_processed",
        session_id = %session_id,
        from = %from,
        to = %to,
        composite = score.composite,
        keeps_context = score.keeps_context(),
        "message processed"
    );
}

pub fn session_restarted(session_id: &str, reason: &str) {
    tracing::info!(
        event = "session_restarted",
        session_id = %session_id,
        reason = %reason,
        "session started fresh"
    );
}

pub fn session_loaded(session_id: &str, messages: usize) {
    tracing::debug!(
        event = "session_loaded",
        session_id = %session_id,
        messages,
        "session loaded from persistence"
    );
}

/// Persistence is best-effort; the in-memory session stays authoritative.
pub fn persistence_failed(session_id: &str, operation: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "persistence_failed",
        session_id = %session_id,
        operation = %operation,
        error = %error,
        "persistence call failed"
    );
}

pub fn session_ended(session_id: &str, messages: usize) {
    tracing::info!(
        event = "session_ended",
        session_id = %session_id,
        messages,
        "session ended"
    );
}

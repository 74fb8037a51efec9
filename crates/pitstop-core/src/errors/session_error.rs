/// Session store errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid session id: {reason}")]
    InvalidSessionId { reason: String },

    #[error("session {id} expired and was removed; re-create it with get_or_create")]
    SessionExpired { id: String },

    #[error("session {id} not found")]
    SessionNotFound { id: String },
}

mod persistence_error;
mod session_error;

pub use persistence_error::PersistenceError;
pub use session_error::SessionError;

/// Top-level error for every fallible Pitstop operation.
#[derive(Debug, thiserror::Error)]
pub enum PitstopError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("session lock poisoned for {id}")]
    LockPoisoned { id: String },

    #[error("unknown conversation state: {value}")]
    UnknownState { value: String },

    #[error("response engine failed: {reason}")]
    ResponseEngine { reason: String },
}

impl PitstopError {
    /// True when the caller should re-create the session via `get_or_create`.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Session(SessionError::SessionExpired { .. }))
    }

    pub fn is_session_not_found(&self) -> bool {
        matches!(self, Self::Session(SessionError::SessionNotFound { .. }))
    }
}

pub type PitstopResult<T> = Result<T, PitstopError>;

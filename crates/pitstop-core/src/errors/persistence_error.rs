/// Save/load errors raised by session persistence backends.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },
}

//! # pitstop-session
//!
//! The session store: the only shared mutable resource in Pitstop.
//!
//! - [`SessionStore`]: per-session locking over a `DashMap`, windowed
//!   history, expiry sweeps with tombstones.
//! - [`sweeper`]: periodic background cleanup on a tokio interval.
//! - [`persistence`]: save/load backends (in-memory, JSON files).
//! - [`summary`]: conversation summaries and prompt context lines.

pub mod persistence;
pub mod summary;
pub mod sweeper;

mod cleanup;
mod store;
mod validation;

pub use persistence::{JsonFilePersistence, MemoryPersistence};
pub use store::SessionStore;
pub use summary::{context_line, summarize, ConversationStatus, ConversationSummary};
pub use sweeper::{spawn_sweeper, spawn_sweeper_from_config, SweeperHandle};
pub use validation::validate_session_id;

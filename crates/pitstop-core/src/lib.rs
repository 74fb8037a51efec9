//! # pitstop-core
//!
//! Foundation crate for the Pitstop conversation context system.
//! Defines the session/message data model, collaborator traits, errors,
//! config, and the keyword tokenizer. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PitstopConfig;
pub use errors::{PitstopError, PitstopResult};
pub use models::{
    ContextBundle, ConversationState, Degradation, Message, Role, ScoreResult, Session, SubScore,
    VehicleProfile,
};

//! # pitstop-engine
//!
//! Reference orchestrator. For each user message it loads the session,
//! scores the message against recent history, advances the conversation
//! stage, records the turn, and hands back a [`ContextBundle`] for the
//! response engine.
//!
//! [`ContextBundle`]: pitstop_core::models::ContextBundle

pub mod engine;
pub mod tracing_setup;
pub mod vehicle;

pub use engine::{ContextEngine, Exchange};
pub use vehicle::extract_vehicle;

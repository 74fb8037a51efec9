//! # pitstop-flow
//!
//! Decides the next conversation stage from the current stage, the incoming
//! message, and its relevance score. Transitions are an ordered rule table;
//! the first matching rule wins and no match leaves the stage unchanged.

pub mod engine;
pub mod markers;
pub mod rules;

pub use engine::FlowEngine;
pub use rules::{Rule, RuleContext};

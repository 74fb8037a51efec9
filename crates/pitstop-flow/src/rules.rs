//! The default transition table.

use pitstop_core::config::FlowConfig;
use pitstop_core::models::{ConversationState, Message, ScoreResult};

use crate::markers;

/// Everything a rule may look at. Built once per `next_state` call.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub current: ConversationState,
    pub message: &'a Message,
    pub score: &'a ScoreResult,
    pub config: &'a FlowConfig,
    /// Label from the intent classifier, if one is configured.
    pub intent: Option<&'a str>,
}

impl RuleContext<'_> {
    pub fn keyword_count(&self) -> usize {
        self.message.keywords.len()
    }

    pub fn is_low_relevance(&self) -> bool {
        self.score.composite < self.config.low_relevance_threshold
    }

    pub fn wants_cost(&self) -> bool {
        markers::has_any(markers::COST_TRIGGERS, &self.message.keywords)
            || self.intent == Some(markers::COST_INTENT)
    }

    pub fn wants_booking(&self) -> bool {
        markers::has_any(markers::SCHEDULING_TRIGGERS, &self.message.keywords)
            || self.intent == Some(markers::BOOKING_INTENT)
    }

    /// A follow-up request that only makes sense against the active
    /// diagnosis: cost or booking from diagnosis, booking from an estimate.
    pub fn has_follow_up_trigger(&self) -> bool {
        match self.current {
            ConversationState::Diagnosis => self.wants_cost() || self.wants_booking(),
            ConversationState::CostEstimation => self.wants_booking(),
            _ => false,
        }
    }

    fn is_describing_problem(&self) -> bool {
        matches!(
            self.current,
            ConversationState::ProblemDescription | ConversationState::Clarification
        )
    }
}

/// A predicate and the stage it leads to.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub target: ConversationState,
}

impl Rule {
    pub const fn new(
        name: &'static str,
        applies: fn(&RuleContext<'_>) -> bool,
        target: ConversationState,
    ) -> Self {
        Self {
            name,
            applies,
            target,
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Default rules, highest priority first.
pub fn default_rules() -> Vec<Rule> {
    use ConversationState::*;

    vec![
        Rule::new("closing_marker", |ctx| markers::has_closing(&ctx.message.keywords), Closing),
        Rule::new("greeting_marker", |ctx| markers::has_greeting(&ctx.message.keywords), Greeting),
        Rule::new(
            "restart_after_closing",
            |ctx| ctx.current == Closing && ctx.is_low_relevance(),
            Greeting,
        ),
        Rule::new(
            "low_relevance_reset",
            |ctx| ctx.current != Greeting && ctx.is_low_relevance() && !ctx.has_follow_up_trigger(),
            ProblemDescription,
        ),
        Rule::new(
            "problem_stated",
            |ctx| ctx.current == Greeting && ctx.keyword_count() > 0,
            ProblemDescription,
        ),
        Rule::new(
            "needs_clarification",
            |ctx| ctx.is_describing_problem() && ctx.keyword_count() < ctx.config.min_detail_keywords,
            Clarification,
        ),
        Rule::new(
            "enough_detail",
            |ctx| ctx.is_describing_problem() && ctx.keyword_count() >= ctx.config.min_detail_keywords,
            Diagnosis,
        ),
        Rule::new(
            "cost_requested",
            |ctx| ctx.current == Diagnosis && ctx.wants_cost(),
            CostEstimation,
        ),
        Rule::new(
            "booking_requested",
            |ctx| matches!(ctx.current, Diagnosis | CostEstimation) && ctx.wants_booking(),
            Booking,
        ),
    ]
}

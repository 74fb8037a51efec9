use serde::{Deserialize, Serialize};

use crate::errors::PitstopError;

/// Stage of the structured diagnostic conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Greeting,
    ProblemDescription,
    Clarification,
    Diagnosis,
    CostEstimation,
    Booking,
    Closing,
}

impl ConversationState {
    pub const ALL: [ConversationState; 7] = [
        Self::Greeting,
        Self::ProblemDescription,
        Self::Clarification,
        Self::Diagnosis,
        Self::CostEstimation,
        Self::Booking,
        Self::Closing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::ProblemDescription => "problem_description",
            Self::Clarification => "clarification",
            Self::Diagnosis => "diagnosis",
            Self::CostEstimation => "cost_estimation",
            Self::Booking => "booking",
            Self::Closing => "closing",
        }
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConversationState {
    type Err = PitstopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| PitstopError::UnknownState {
                value: s.to_string(),
            })
    }
}

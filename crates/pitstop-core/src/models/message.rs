use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::text;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversational turn. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    /// Normalized tokens of `text`, deduplicated, in first-occurrence order.
    pub keywords: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Tokenize `text` and stamp the message with the current time.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self::at(role, text, Utc::now())
    }

    /// Tokenize `text` with an explicit timestamp.
    pub fn at(role: Role, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        let text = text.into();
        let keywords = text::extract_keywords(&text);
        Self {
            role,
            text,
            keywords,
            timestamp,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    /// No keywords survived tokenization.
    pub fn is_malformed(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Whether the two messages have at least one keyword in common.
    pub fn shares_keywords(&self, other: &Message) -> bool {
        self.keywords.iter().any(|k| other.has_keyword(k))
    }
}

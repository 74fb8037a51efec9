use std::sync::Arc;

use tracing::trace;

use pitstop_core::config::FlowConfig;
use pitstop_core::models::{ConversationState, Message, ScoreResult};
use pitstop_core::traits::IIntentClassifier;

use crate::rules::{default_rules, Rule, RuleContext};

/// Conversation stage machine.
///
/// `next_state` is pure: the same stage, message and score always give the
/// same result. The engine holds no per-session data.
pub struct FlowEngine {
    rules: Vec<Rule>,
    config: FlowConfig,
    classifier: Option<Arc<dyn IIntentClassifier>>,
}

impl FlowEngine {
    pub fn new(config: &FlowConfig) -> Self {
        Self {
            rules: default_rules(),
            config: config.clone(),
            classifier: None,
        }
    }

    /// Let intent labels `cost` and `booking` act as triggers alongside the
    /// keyword sets.
    pub fn with_classifier(mut self, classifier: Arc<dyn IIntentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Append a rule. It is consulted after every existing rule and before
    /// the unchanged-stage fallback.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn next_state(
        &self,
        current: ConversationState,
        message: &Message,
        score: &ScoreResult,
    ) -> ConversationState {
        let (_, next) = self.evaluate(current, message, score);
        next
    }

    /// The next stage and the name of the rule that produced it, `None`
    /// when no rule matched.
    pub fn evaluate(
        &self,
        current: ConversationState,
        message: &Message,
        score: &ScoreResult,
    ) -> (Option<&'static str>, ConversationState) {
        let intent = self
            .classifier
            .as_ref()
            .and_then(|c| c.classify(&message.text));
        let ctx = RuleContext {
            current,
            message,
            score,
            config: &self.config,
            intent: intent.as_deref(),
        };

        for rule in &self.rules {
            if (rule.applies)(&ctx) {
                trace!(rule = rule.name, from = %current, to = %rule.target, "flow rule matched");
                return (Some(rule.name), rule.target);
            }
        }
        (None, current)
    }
}

impl Default for FlowEngine {
    fn default() -> Self {
        Self::new(&FlowConfig::default())
    }
}

impl std::fmt::Debug for FlowEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowEngine")
            .field("rules", &self.rules.iter().map(|r| r.name).collect::<Vec<_>>())
            .field("config", &self.config)
            .field("classifier", &self.classifier.is_some())
            .finish()
    }
}

//! ContextEngine — wires store, scorer and flow together per message.

use std::sync::Arc;

use chrono::Utc;
use tracing::info_span;
use uuid::Uuid;

use pitstop_core::config::PitstopConfig;
use pitstop_core::errors::PitstopResult;
use pitstop_core::models::{ContextBundle, ConversationState, Message, Session};
use pitstop_core::traits::{IIntentClassifier, IResponseEngine, ISessionPersistence};
use pitstop_flow::FlowEngine;
use pitstop_scoring::{detect_topic, RelevanceScorer};
use pitstop_session::{
    context_line, spawn_sweeper_from_config, summarize, validate_session_id, ConversationSummary,
    SessionStore, SweeperHandle,
};

use crate::tracing_setup::{events, names};
use crate::vehicle::extract_vehicle;

/// A processed user message together with the recorded assistant reply.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub bundle: ContextBundle,
    pub reply: Message,
}

/// Per-message orchestrator.
///
/// Share behind an `Arc`; every method takes `&self`. Persistence is
/// best-effort: failures are logged and the in-memory session stays
/// authoritative.
pub struct ContextEngine {
    store: Arc<SessionStore>,
    scorer: RelevanceScorer,
    flow: FlowEngine,
    persistence: Option<Arc<dyn ISessionPersistence>>,
    config: PitstopConfig,
}

impl ContextEngine {
    /// Build every component from `config`. The topic sub-score decays
    /// across the session window.
    pub fn new(config: PitstopConfig) -> Self {
        let store = SessionStore::from_config(&config.session);
        Self {
            scorer: RelevanceScorer::for_window(&config.scoring, store.window()),
            store: Arc::new(store),
            flow: FlowEngine::new(&config.flow),
            persistence: None,
            config,
        }
    }

    /// Use an existing store, e.g. one shared with a sweeper.
    pub fn with_store(mut self, store: Arc<SessionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_persistence(mut self, persistence: Arc<dyn ISessionPersistence>) -> Self {
        self.persistence = Some(persistence);
        self
    }

    /// Feed the classifier to both the intent sub-score and the flow triggers.
    pub fn with_classifier(mut self, classifier: Arc<dyn IIntentClassifier>) -> Self {
        self.scorer = self.scorer.with_classifier(Arc::clone(&classifier));
        self.flow = self.flow.with_classifier(classifier);
        self
    }

    pub fn with_scorer(mut self, scorer: RelevanceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_flow(mut self, flow: FlowEngine) -> Self {
        self.flow = flow;
        self
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn config(&self) -> &PitstopConfig {
        &self.config
    }

    /// A fresh random session id.
    pub fn new_session_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Run one user message through scoring and the stage machine, record
    /// it, and return the context for the response engine.
    ///
    /// Each store call is atomic, but scoring reads a snapshot taken before
    /// the append. Callers must deliver one message at a time per session;
    /// concurrent calls for different sessions are fine.
    pub fn process_message(&self, session_id: &str, text: &str) -> PitstopResult<ContextBundle> {
        let span = info_span!(names::PROCESS, session_id = %session_id);
        let _entered = span.enter();

        let session = self.current_session(session_id)?;
        let previous_state = session.state;
        let history = session.recent(self.store.window());
        let message = Message::user(text);

        let score = self.scorer.score(&message, &history);
        let state = self.flow.next_state(previous_state, &message, &score);

        self.append(session_id, message.clone())?;
        self.store.set_state(session_id, state)?;
        self.update_topic(session_id, &message, previous_state, state)?;
        let vehicle = extract_vehicle(&message.text);
        if !vehicle.is_empty() {
            self.store.update_vehicle(session_id, &vehicle)?;
        }

        let snapshot = self.store.snapshot(session_id)?;
        self.persist(&snapshot);
        events::message_processed(session_id, previous_state, state, &score);

        Ok(ContextBundle {
            session_id: session_id.to_string(),
            previous_state,
            state,
            score,
            topic: snapshot.current_topic.clone(),
            vehicle: snapshot.vehicle.clone(),
            history: snapshot.messages.iter().cloned().collect(),
            context_line: context_line(&snapshot),
        })
    }

    /// [`ContextEngine::process_message`], then generate a reply and record
    /// it as the assistant's turn.
    pub fn respond(
        &self,
        session_id: &str,
        text: &str,
        engine: &dyn IResponseEngine,
    ) -> PitstopResult<Exchange> {
        let bundle = self.process_message(session_id, text)?;

        let span = info_span!(names::RESPOND, session_id = %session_id);
        let _entered = span.enter();
        let reply_text = engine.generate(&bundle)?;
        let reply = self.record_assistant_reply(session_id, &reply_text)?;
        Ok(Exchange { bundle, reply })
    }

    /// Append an assistant turn. Does not score or change the stage.
    pub fn record_assistant_reply(&self, session_id: &str, text: &str) -> PitstopResult<Message> {
        let message = self.append(session_id, Message::assistant(text))?;
        let snapshot = self.store.snapshot(session_id)?;
        self.persist(&snapshot);
        Ok(message)
    }

    /// Save and evict a session. Returns it if it was live.
    pub fn end_session(&self, session_id: &str) -> PitstopResult<Option<Session>> {
        let span = info_span!(names::END_SESSION, session_id = %session_id);
        let _entered = span.enter();

        validate_session_id(session_id)?;
        let ended = self.store.evict(session_id)?;
        if let Some(session) = &ended {
            self.persist(session);
            events::session_ended(session_id, session.messages.len());
        }
        Ok(ended)
    }

    pub fn summary(&self, session_id: &str) -> PitstopResult<ConversationSummary> {
        self.store.snapshot(session_id).map(|s| summarize(&s))
    }

    /// Remove sessions idle past the configured TTL.
    pub fn cleanup_expired(&self) -> usize {
        self.store.cleanup(self.config.session.ttl())
    }

    /// Start the background sweeper for this engine's store. Requires a
    /// tokio runtime.
    pub fn spawn_sweeper(&self) -> SweeperHandle {
        spawn_sweeper_from_config(Arc::clone(&self.store), &self.config.session)
    }

    /// Snapshot of the live session, loading it from persistence or
    /// starting a fresh one when needed.
    fn current_session(&self, session_id: &str) -> PitstopResult<Session> {
        validate_session_id(session_id)?;
        if !self.store.contains(session_id) && !self.store.is_tombstoned(session_id) {
            self.load(session_id)?;
        }
        match self.store.snapshot(session_id) {
            Ok(session) => Ok(session),
            Err(e) if e.is_session_expired() => {
                events::session_restarted(session_id, "expired");
                self.store.get_or_create(session_id)
            }
            Err(e) if e.is_session_not_found() => self.store.get_or_create(session_id),
            Err(e) => Err(e),
        }
    }

    fn load(&self, session_id: &str) -> PitstopResult<()> {
        let Some(persistence) = &self.persistence else {
            return Ok(());
        };
        match persistence.load(session_id) {
            Ok(Some(session)) if session.is_expired(self.config.session.ttl(), Utc::now()) => {
                events::session_restarted(session_id, "persisted copy expired");
            }
            Ok(Some(session)) => {
                let messages = session.messages.len();
                if self.store.restore_if_absent(session)? {
                    events::session_loaded(session_id, messages);
                }
            }
            Ok(None) => {}
            Err(e) => events::persistence_failed(session_id, "load", &e),
        }
        Ok(())
    }

    /// Append, re-creating the session once if the sweep purged it
    /// mid-request.
    fn append(&self, session_id: &str, message: Message) -> PitstopResult<Message> {
        match self.store.append(session_id, message.clone()) {
            Err(e) if e.is_session_expired() => {
                events::session_restarted(session_id, "expired during processing");
                self.store.get_or_create(session_id)?;
                self.store.append(session_id, message)
            }
            other => other,
        }
    }

    /// Track the detected topic; a reset with no recognizable topic clears it.
    fn update_topic(
        &self,
        session_id: &str,
        message: &Message,
        previous: ConversationState,
        state: ConversationState,
    ) -> PitstopResult<()> {
        match detect_topic(&message.keywords) {
            Some(topic) => self.store.set_topic(session_id, Some(topic.to_string())),
            None if is_reset(previous, state) => self.store.set_topic(session_id, None),
            None => Ok(()),
        }
    }

    fn persist(&self, session: &Session) {
        if let Some(persistence) = &self.persistence {
            if let Err(e) = persistence.save(session) {
                events::persistence_failed(&session.id, "save", &e);
            }
        }
    }
}

impl Default for ContextEngine {
    fn default() -> Self {
        Self::new(PitstopConfig::default())
    }
}

fn is_reset(previous: ConversationState, state: ConversationState) -> bool {
    previous != state
        && matches!(
            state,
            ConversationState::Greeting | ConversationState::ProblemDescription
        )
}

use dashmap::DashMap;

use pitstop_core::errors::PitstopResult;
use pitstop_core::models::Session;
use pitstop_core::traits::ISessionPersistence;

/// Process-local persistence, for tests and single-process deployments.
#[derive(Default)]
pub struct MemoryPersistence {
    saved: DashMap<String, Session>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

impl ISessionPersistence for MemoryPersistence {
    fn load(&self, session_id: &str) -> PitstopResult<Option<Session>> {
        Ok(self.saved.get(session_id).map(|r| r.clone()))
    }

    fn save(&self, session: &Session) -> PitstopResult<()> {
        self.saved.insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn delete(&self, session_id: &str) -> PitstopResult<()> {
        self.saved.remove(session_id);
        Ok(())
    }
}

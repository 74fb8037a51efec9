use crate::errors::PitstopResult;
use crate::models::Session;

/// Save/load hooks that let sessions survive process restarts.
pub trait ISessionPersistence: Send + Sync {
    fn load(&self, session_id: &str) -> PitstopResult<Option<Session>>;
    fn save(&self, session: &Session) -> PitstopResult<()>;
    fn delete(&self, session_id: &str) -> PitstopResult<()>;
}

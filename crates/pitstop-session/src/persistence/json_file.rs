//! One pretty-printed JSON document per session.

use std::path::{Path, PathBuf};

use tracing::debug;

use pitstop_core::errors::{PersistenceError, PitstopResult};
use pitstop_core::models::Session;
use pitstop_core::traits::ISessionPersistence;

/// Stores each session as `<dir>/<encoded id>.json`.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// crash never leaves a half-written session behind.
pub struct JsonFilePersistence {
    dir: PathBuf,
}

impl JsonFilePersistence {
    /// Open (creating if needed) a persistence directory.
    pub fn open(dir: impl Into<PathBuf>) -> PitstopResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `session_id`.
    pub fn path_for(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", encode_file_stem(session_id)))
    }
}

impl ISessionPersistence for JsonFilePersistence {
    fn load(&self, session_id: &str) -> PitstopResult<Option<Session>> {
        let path = self.path_for(session_id);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
        let session: Session =
            serde_json::from_str(&content).map_err(|e| PersistenceError::Serialization {
                reason: format!("{}: {e}", path.display()),
            })?;
        if session.id != session_id {
            return Err(PersistenceError::Serialization {
                reason: format!(
                    "{} holds session {}, expected {session_id}",
                    path.display(),
                    session.id
                ),
            }
            .into());
        }
        debug!(session_id = %session_id, messages = session.messages.len(), "session loaded");
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> PitstopResult<()> {
        let path = self.path_for(&session.id);
        let json = serde_json::to_string_pretty(session).map_err(|e| {
            PersistenceError::Serialization {
                reason: e.to_string(),
            }
        })?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_error(&path, e))?;
        debug!(session_id = %session.id, path = %path.display(), "session saved");
        Ok(())
    }

    fn delete(&self, session_id: &str) -> PitstopResult<()> {
        let path = self.path_for(session_id);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e).into()),
        }
    }
}

/// Longest encoded stem used verbatim; leaves room for `.json.tmp` under
/// the common 255-byte file name limit.
const MAX_FILE_STEM: usize = 200;

/// Encoded characters kept in front of the digest of an over-long stem.
const HASHED_STEM_PREFIX: usize = 64;

/// Keep `[A-Za-z0-9_-]`, percent-encode every other byte. `%` itself is
/// encoded, so distinct ids never share a file.
///
/// Stems longer than [`MAX_FILE_STEM`] become `<prefix>~<blake3 hex>`. `~`
/// is always encoded in the short form, so the two forms never collide.
fn encode_file_stem(session_id: &str) -> String {
    let mut stem = String::with_capacity(session_id.len());
    let mut prefix_len = 0;
    for byte in session_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
        if stem.len() <= HASHED_STEM_PREFIX {
            prefix_len = stem.len();
        }
    }
    if stem.len() <= MAX_FILE_STEM {
        return stem;
    }
    stem.truncate(prefix_len);
    let digest = blake3::hash(session_id.as_bytes()).to_hex();
    format!("{stem}~{digest}")
}

fn io_error(path: &Path, e: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

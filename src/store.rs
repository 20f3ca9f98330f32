//! The session persistence collaborator. The engine treats the store as a
//! versioned record keeper: `load` returns the session with its version, and
//! `save` only commits if nobody else wrote in between. The bundled
//! [`MemoryStore`] keeps JSON-encoded sessions in a mutex-guarded map.

use crate::battle::session::BattleSession;
use crate::errors::{BattleError, BattleResult};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Monotonic per-session version used for optimistic concurrency control.
pub type Version = u64;

pub trait SessionStore: Send + Sync {
    /// Create the record for a new session. Fails with `PersistenceConflict`
    /// if the id already exists.
    fn insert(&self, session: &BattleSession) -> BattleResult<Version>;

    fn load(&self, id: Uuid) -> BattleResult<(BattleSession, Version)>;

    /// Commit an updated session if `expected` still matches the stored
    /// version; otherwise `PersistenceConflict`.
    fn save(
        &self,
        id: Uuid,
        session: &BattleSession,
        expected: Version,
    ) -> BattleResult<Version>;
}

/// In-memory store. Sessions round-trip through JSON so the store behaves
/// like the external record stores it stands in for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<Uuid, (String, Version)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn encode(session: &BattleSession) -> BattleResult<String> {
        serde_json::to_string(session)
            .map_err(|err| BattleError::CorruptSession(err.to_string()))
    }

    fn decode(raw: &str) -> BattleResult<BattleSession> {
        serde_json::from_str(raw).map_err(|err| BattleError::CorruptSession(err.to_string()))
    }
}

impl SessionStore for MemoryStore {
    fn insert(&self, session: &BattleSession) -> BattleResult<Version> {
        let encoded = Self::encode(session)?;
        let mut sessions = self.sessions.lock().expect("session map poisoned");
        if sessions.contains_key(&session.id) {
            return Err(BattleError::PersistenceConflict);
        }
        sessions.insert(session.id, (encoded, 1));
        Ok(1)
    }

    fn load(&self, id: Uuid) -> BattleResult<(BattleSession, Version)> {
        let sessions = self.sessions.lock().expect("session map poisoned");
        let (raw, version) = sessions
            .get(&id)
            .ok_or(BattleError::SessionNotFound(id))?;
        Ok((Self::decode(raw)?, *version))
    }

    fn save(
        &self,
        id: Uuid,
        session: &BattleSession,
        expected: Version,
    ) -> BattleResult<Version> {
        let encoded = Self::encode(session)?;
        let mut sessions = self.sessions.lock().expect("session map poisoned");
        let entry = sessions
            .get_mut(&id)
            .ok_or(BattleError::SessionNotFound(id))?;
        if entry.1 != expected {
            return Err(BattleError::PersistenceConflict);
        }
        *entry = (encoded, expected + 1);
        Ok(expected + 1)
    }
}

use schema::{MoveId, SpeciesId};
use uuid::Uuid;

/// Convenience alias used throughout the engine.
pub type BattleResult<T> = Result<T, BattleError>;

/// Which reference catalog a failed lookup was against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceKind {
    #[error("species {0}")]
    Species(SpeciesId),
    #[error("move {0}")]
    Move(MoveId),
}

/// The error taxonomy of the battle engine.
///
/// Every variant is returned as a value; the engine never panics on bad input.
/// `PersistenceConflict` is the only variant the service layer retries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BattleError {
    /// The chosen move slot is empty or has no PP left. Recoverable: the
    /// caller may resubmit a corrected slot.
    #[error("move slot {slot} cannot be used")]
    InvalidMove { slot: usize },

    /// The gym leader's active member has no move with PP remaining. The
    /// engine surfaces this instead of guessing a fallback.
    #[error("opponent has no usable move")]
    NoUsableMove,

    /// A move was submitted after the battle reached Victory or Defeat.
    #[error("battle is already over")]
    SessionTerminated,

    /// No session exists under the given id.
    #[error("no battle session {0}")]
    SessionNotFound(Uuid),

    /// A species or move id has no matching catalog row. Fatal for the
    /// session: damage cannot be computed without reference data.
    #[error("missing reference data for {0}")]
    ReferenceDataMissing(ReferenceKind),

    /// The read-modify-write against the session store was invalidated by a
    /// concurrent writer.
    #[error("session was modified concurrently")]
    PersistenceConflict,

    /// A stored session could not be decoded.
    #[error("stored session is corrupted: {0}")]
    CorruptSession(String),

    /// A team failed construction-time validation.
    #[error("invalid team: {0}")]
    InvalidTeam(String),
}

//! The outward-facing battle service: start a battle, submit a move, read a
//! snapshot. Each session's read-modify-write runs under a per-session async
//! mutex, and conflicted saves are retried a bounded number of times before
//! the error surfaces.

use crate::battle::policy::{MovePolicy, ScoringPolicy};
use crate::battle::session::{BattlePhase, BattleSession};
use crate::dex::Pokedex;
use crate::errors::{BattleError, BattleResult};
use crate::store::SessionStore;
use crate::team::Team;
use crate::views::{BattleSessionView, TurnResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// How many times a conflicted save is retried (load, replay, save again)
/// before `PersistenceConflict` is surfaced to the caller.
const SAVE_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// The archived summary of a finished battle (the original writes a
/// `battles` row with the outcome and awards the gym badge on a win).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub session_id: Uuid,
    pub gym_name: String,
    pub outcome: BattleOutcome,
    pub turns: u32,
    /// The gym's badge title if the player won.
    pub badge_earned: Option<String>,
}

pub struct BattleService<S: SessionStore> {
    store: S,
    dex: Arc<Pokedex>,
    policy: Box<dyn MovePolicy + Send + Sync>,
    /// One async mutex per live session; the critical section for the whole
    /// "process one submitted move" operation.
    session_locks: tokio::sync::Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
    records: Mutex<HashMap<Uuid, BattleRecord>>,
}

impl<S: SessionStore> BattleService<S> {
    pub fn new(store: S, dex: Arc<Pokedex>) -> Self {
        Self::with_policy(store, dex, Box::new(ScoringPolicy::new()))
    }

    pub fn with_policy(
        store: S,
        dex: Arc<Pokedex>,
        policy: Box<dyn MovePolicy + Send + Sync>,
    ) -> Self {
        BattleService {
            store,
            dex,
            policy,
            session_locks: tokio::sync::Mutex::new(HashMap::new()),
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Start a new battle between a player team and a gym roster. Both sides
    /// are fully healed before the first turn.
    pub async fn start_battle(
        &self,
        player_team: Team,
        gym_team: Team,
    ) -> BattleResult<BattleSessionView> {
        let id = Uuid::new_v4();
        let session = BattleSession::start(id, player_team, gym_team, &self.dex)?;
        self.store.insert(&session)?;

        log::info!(
            "battle {} started: {} vs {}",
            id,
            session.player_team.name,
            session.gym_team.name
        );
        BattleSessionView::from_session(&session, &self.dex)
    }

    /// Process one submitted move: the player's turn, the gym reply, any
    /// forced switches, and the persisted result. Only persistence conflicts
    /// are retried; computation errors return immediately and nothing is
    /// saved.
    pub async fn submit_move(&self, session_id: Uuid, slot: usize) -> BattleResult<TurnResult> {
        let lock = self.session_lock(session_id).await;
        let _guard = lock.lock().await;

        let mut attempt = 0;
        loop {
            attempt += 1;

            let (mut session, version) = self.store.load(session_id)?;
            let report = session.play_turn(slot, &self.dex, self.policy.as_ref())?;

            match self.store.save(session_id, &session, version) {
                Ok(_) => {
                    log::debug!(
                        "battle {} turn {} resolved, phase {:?}",
                        session_id,
                        report.turn_number,
                        report.phase
                    );
                    if report.phase.is_terminal() {
                        self.archive(&session);
                    }
                    return TurnResult::new(&session, report, &self.dex);
                }
                Err(BattleError::PersistenceConflict) if attempt < SAVE_ATTEMPTS => {
                    log::warn!(
                        "battle {} save conflicted, retrying (attempt {})",
                        session_id,
                        attempt
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Read-only snapshot for display.
    pub async fn get_state(&self, session_id: Uuid) -> BattleResult<BattleSessionView> {
        let (session, _) = self.store.load(session_id)?;
        BattleSessionView::from_session(&session, &self.dex)
    }

    /// The archived summary of a finished battle, if the session reached a
    /// terminal phase through this service.
    pub fn record(&self, session_id: Uuid) -> Option<BattleRecord> {
        self.records
            .lock()
            .expect("record map poisoned")
            .get(&session_id)
            .cloned()
    }

    fn archive(&self, session: &BattleSession) {
        let outcome = match session.phase {
            BattlePhase::Victory => BattleOutcome::Victory,
            BattlePhase::Defeat => BattleOutcome::Defeat,
            BattlePhase::AwaitingMove => return,
        };
        let badge_earned = match outcome {
            BattleOutcome::Victory => session.gym_team.badge_title.clone(),
            BattleOutcome::Defeat => None,
        };

        log::info!(
            "battle {} over after {} turns: {:?}",
            session.id,
            session.turn_number,
            outcome
        );
        self.records.lock().expect("record map poisoned").insert(
            session.id,
            BattleRecord {
                session_id: session.id,
                gym_name: session.gym_team.name.clone(),
                outcome,
                turns: session.turn_number,
                badge_earned,
            },
        );
    }

    async fn session_lock(&self, session_id: Uuid) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.session_locks.lock().await;
        locks
            .entry(session_id)
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}

//! The per-battle state machine. A session owns both sides' mutable state and
//! sequences one whole round per submitted move: the player's turn, the
//! scripted gym reply, and any forced switches in between.

use crate::battle::policy::MovePolicy;
use crate::battle::resolver;
use crate::battle::switching::{self, SwitchOutcome};
use crate::dex::Pokedex;
use crate::errors::{BattleError, BattleResult};
use crate::team::Team;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted phase of a battle session. The intermediate resolution
/// stages (resolving the player's turn, choosing and resolving the gym reply)
/// run to completion inside [`BattleSession::play_turn`] and are never
/// observable between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    AwaitingMove,
    Victory,
    Defeat,
}

impl BattlePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BattlePhase::Victory | BattlePhase::Defeat)
    }
}

/// Everything the engine needs to resume a battle: both teams, the turn
/// counter, and the phase. Owned exclusively by one (player, gym) pairing for
/// the session's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSession {
    pub id: Uuid,
    pub player_team: Team,
    pub gym_team: Team,
    pub turn_number: u32,
    pub phase: BattlePhase,
}

/// What one call to [`BattleSession::play_turn`] did, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub events: Vec<String>,
    pub phase: BattlePhase,
    pub turn_number: u32,
    pub player_active_hp: u16,
    pub gym_active_hp: u16,
}

impl BattleSession {
    /// Start a battle: full heal of every member and move slot on both sides,
    /// lead members sent out, turn counter at zero. Battles always begin from
    /// a clean slate regardless of any earlier battle's outcome.
    pub fn start(id: Uuid, mut player_team: Team, mut gym_team: Team, dex: &Pokedex) -> BattleResult<Self> {
        player_team.restore_all(dex)?;
        gym_team.restore_all(dex)?;

        Ok(BattleSession {
            id,
            player_team,
            gym_team,
            turn_number: 0,
            phase: BattlePhase::AwaitingMove,
        })
    }

    /// Drive one full round from the player's chosen move slot.
    ///
    /// The sequence follows the battle rules exactly: the player's move
    /// resolves first; if the gym's member faints, its roster either sends
    /// out the next healthy member or the battle ends in victory. Otherwise
    /// the policy picks the gym's reply, it resolves against the player's
    /// member, and a player faint forces a switch or ends the battle in
    /// defeat.
    ///
    /// Errors leave `self` in an unspecified intermediate state; callers are
    /// expected to persist only on success (the service discards the
    /// in-memory session on error and reloads on the next submission).
    pub fn play_turn(
        &mut self,
        slot_index: usize,
        dex: &Pokedex,
        policy: &dyn MovePolicy,
    ) -> BattleResult<TurnReport> {
        if self.phase.is_terminal() {
            return Err(BattleError::SessionTerminated);
        }

        let mut events = Vec::new();

        // Player's turn.
        let outcome =
            resolver::apply_move(&mut self.player_team, &mut self.gym_team, slot_index, dex)?;
        events.push(outcome.message);

        if outcome.defender_fainted {
            events.push(format!("{} fainted!", self.gym_team.active_member().name));
            match switching::handle_faint(&mut self.gym_team) {
                SwitchOutcome::RosterExhausted => {
                    self.phase = BattlePhase::Victory;
                    events.push(format!("You defeated {}!", self.gym_team.name));
                }
                SwitchOutcome::NewActive(_) => {
                    events.push(format!(
                        "{} sent out {}!",
                        self.gym_team.name,
                        self.gym_team.active_member().name
                    ));
                }
            }
        }

        // Gym leader's reply, unless the battle just ended.
        if !self.phase.is_terminal() {
            let gym_slot = policy.choose_move(
                self.gym_team.active_member(),
                &self.player_team.active_member().types,
                dex,
            )?;
            let outcome =
                resolver::apply_move(&mut self.gym_team, &mut self.player_team, gym_slot, dex)?;
            events.push(outcome.message);

            if outcome.defender_fainted {
                events.push(format!(
                    "{} fainted!",
                    self.player_team.active_member().name
                ));
                match switching::handle_faint(&mut self.player_team) {
                    SwitchOutcome::RosterExhausted => {
                        self.phase = BattlePhase::Defeat;
                        events.push(format!("{} wins the battle!", self.gym_team.name));
                    }
                    SwitchOutcome::NewActive(_) => {
                        // The replacement is forced; the player does not pick.
                        events.push(format!(
                            "Go, {}!",
                            self.player_team.active_member().name
                        ));
                    }
                }
            }
        }

        self.turn_number += 1;

        Ok(TurnReport {
            events,
            phase: self.phase,
            turn_number: self.turn_number,
            player_active_hp: self.player_team.active_member().current_hp,
            gym_active_hp: self.gym_team.active_member().current_hp,
        })
    }
}

//! Read-only snapshot records handed to the web layer. Plain serializable
//! data; how it reaches a browser is the caller's business.

use crate::battle::session::{BattlePhase, BattleSession, TurnReport};
use crate::dex::Pokedex;
use crate::errors::BattleResult;
use crate::team::{Team, TeamMember, MOVE_SLOTS};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSlotView {
    pub move_name: String,
    pub current_pp: u8,
    pub max_pp: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberView {
    pub name: String,
    pub current_hp: u16,
    pub max_hp: u16,
    pub fainted: bool,
    pub types: Vec<String>,
    pub image_filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideView {
    pub name: String,
    pub active: MemberView,
    pub moves: Vec<Option<MoveSlotView>>,
    pub remaining: usize,
}

/// The display snapshot of a whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSessionView {
    pub session_id: Uuid,
    pub phase: BattlePhase,
    pub turn_number: u32,
    pub player: SideView,
    pub gym: SideView,
}

/// What `submit_move` returns: the ordered battle text of the round plus the
/// refreshed session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub session_id: Uuid,
    pub turn_number: u32,
    pub phase: BattlePhase,
    pub events: Vec<String>,
    pub state: BattleSessionView,
}

impl BattleSessionView {
    pub fn from_session(session: &BattleSession, dex: &Pokedex) -> BattleResult<Self> {
        Ok(BattleSessionView {
            session_id: session.id,
            phase: session.phase,
            turn_number: session.turn_number,
            player: side_view(&session.player_team, dex)?,
            gym: side_view(&session.gym_team, dex)?,
        })
    }
}

impl TurnResult {
    pub fn new(session: &BattleSession, report: TurnReport, dex: &Pokedex) -> BattleResult<Self> {
        Ok(TurnResult {
            session_id: session.id,
            turn_number: report.turn_number,
            phase: report.phase,
            events: report.events,
            state: BattleSessionView::from_session(session, dex)?,
        })
    }
}

fn side_view(team: &Team, dex: &Pokedex) -> BattleResult<SideView> {
    let active = team.active_member();
    Ok(SideView {
        name: team.name.clone(),
        active: member_view(active, dex)?,
        moves: move_views(active, dex)?,
        remaining: team.remaining_count(),
    })
}

fn member_view(member: &TeamMember, dex: &Pokedex) -> BattleResult<MemberView> {
    let species = dex.species(member.species)?;
    Ok(MemberView {
        name: member.name.clone(),
        current_hp: member.current_hp,
        max_hp: member.max_hp,
        fainted: member.is_fainted(),
        types: member.types.iter().map(|t| t.to_string()).collect(),
        image_filename: species.image_filename.clone(),
    })
}

fn move_views(member: &TeamMember, dex: &Pokedex) -> BattleResult<Vec<Option<MoveSlotView>>> {
    let mut views = Vec::with_capacity(MOVE_SLOTS);
    for slot in &member.moves {
        views.push(match slot {
            Some(slot) => {
                let move_data = dex.move_data(slot.move_id)?;
                Some(MoveSlotView {
                    move_name: move_data.name.clone(),
                    current_pp: slot.pp,
                    max_pp: move_data.max_pp,
                })
            }
            None => None,
        });
    }
    Ok(views)
}

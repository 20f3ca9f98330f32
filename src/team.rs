//! Mutable battle-side state: team members with their HP and move-PP, and the
//! ordered team that tracks which member is active. Both the user's team and
//! the gym leader's roster use the same types, tagged by [`TeamSide`].

use crate::dex::Pokedex;
use crate::errors::{BattleError, BattleResult};
use schema::{MoveId, PokemonType, SpeciesId};
use serde::{Deserialize, Serialize};

pub const MAX_TEAM_SIZE: usize = 6;
pub const MOVE_SLOTS: usize = 4;

/// One of a member's four move slots: a catalog reference plus remaining PP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub move_id: MoveId,
    pub pp: u8,
}

/// One creature instance on a team, with its own HP and PP state, distinct
/// from the immutable species it instantiates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub species: SpeciesId,
    pub name: String,
    pub current_hp: u16,
    pub max_hp: u16,
    /// Cached from the species row so damage resolution does not need a
    /// species lookup per turn.
    pub types: Vec<PokemonType>,
    pub moves: [Option<MoveSlot>; MOVE_SLOTS],
}

impl TeamMember {
    /// Build a member from catalog data, at full HP with full PP.
    pub fn new(species: SpeciesId, move_ids: Vec<MoveId>, dex: &Pokedex) -> BattleResult<Self> {
        let species_data = dex.species(species)?;

        let mut moves = [const { None }; MOVE_SLOTS];
        for (i, move_id) in move_ids.into_iter().take(MOVE_SLOTS).enumerate() {
            let move_data = dex.move_data(move_id)?;
            moves[i] = Some(MoveSlot {
                move_id,
                pp: move_data.max_pp,
            });
        }

        Ok(TeamMember {
            species,
            name: species_data.name.clone(),
            current_hp: species_data.base_hp,
            max_hp: species_data.base_hp,
            types: species_data.types.clone(),
            moves,
        })
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage with the HP floor clamped at 0. Returns true if the
    /// member fainted from this hit.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        self.current_hp = self.current_hp.saturating_sub(damage);
        self.is_fainted()
    }

    /// Full heal: HP back to max and every occupied slot back to its move's
    /// max PP.
    pub fn restore(&mut self, dex: &Pokedex) -> BattleResult<()> {
        self.current_hp = self.max_hp;
        for slot in self.moves.iter_mut().flatten() {
            slot.pp = dex.move_data(slot.move_id)?.max_pp;
        }
        Ok(())
    }

    pub fn move_slot(&self, index: usize) -> Option<&MoveSlot> {
        self.moves.get(index).and_then(|slot| slot.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    Player,
    GymLeader,
}

/// An ordered team of 1-6 members with exactly one active member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub side: TeamSide,
    pub name: String,
    members: Vec<TeamMember>,
    active_index: usize,
    /// Gym leaders award a badge when beaten; `None` for player teams.
    pub badge_title: Option<String>,
}

impl Team {
    pub fn player(name: impl Into<String>, members: Vec<TeamMember>) -> BattleResult<Self> {
        Self::new(TeamSide::Player, name.into(), members, None)
    }

    pub fn gym(
        name: impl Into<String>,
        badge_title: impl Into<String>,
        members: Vec<TeamMember>,
    ) -> BattleResult<Self> {
        Self::new(
            TeamSide::GymLeader,
            name.into(),
            members,
            Some(badge_title.into()),
        )
    }

    fn new(
        side: TeamSide,
        name: String,
        members: Vec<TeamMember>,
        badge_title: Option<String>,
    ) -> BattleResult<Self> {
        if members.is_empty() {
            return Err(BattleError::InvalidTeam(format!(
                "team '{}' has no members",
                name
            )));
        }
        if members.len() > MAX_TEAM_SIZE {
            return Err(BattleError::InvalidTeam(format!(
                "team '{}' has {} members, the limit is {}",
                name,
                members.len(),
                MAX_TEAM_SIZE
            )));
        }

        Ok(Team {
            side,
            name,
            members,
            active_index: 0,
            badge_title,
        })
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_member(&self) -> &TeamMember {
        &self.members[self.active_index]
    }

    pub fn active_member_mut(&mut self) -> &mut TeamMember {
        &mut self.members[self.active_index]
    }

    /// First non-fainted member in insertion order, if any.
    pub fn first_usable_index(&self) -> Option<usize> {
        self.members.iter().position(|member| !member.is_fainted())
    }

    pub fn has_usable_member(&self) -> bool {
        self.first_usable_index().is_some()
    }

    pub fn set_active(&mut self, index: usize) {
        debug_assert!(index < self.members.len());
        self.active_index = index;
    }

    pub fn remaining_count(&self) -> usize {
        self.members
            .iter()
            .filter(|member| !member.is_fainted())
            .count()
    }

    /// Full heal of every member and reset of the active slot to the lead
    /// member. Runs before every battle.
    pub fn restore_all(&mut self, dex: &Pokedex) -> BattleResult<()> {
        for member in &mut self.members {
            member.restore(dex)?;
        }
        self.active_index = 0;
        Ok(())
    }
}

//! The turn resolver: applies one chosen move to battle state. PP is spent,
//! damage lands, and a faint is detected, all in one step. Catalog lookups run
//! before any mutation so a reference-data failure leaves state untouched.

use crate::battle::math;
use crate::dex::Pokedex;
use crate::errors::{BattleError, BattleResult};
use crate::team::Team;
use serde::{Deserialize, Serialize};

/// The result of one resolved move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub message: String,
    pub attacker_hp: u16,
    pub defender_hp: u16,
    pub defender_fainted: bool,
}

/// Resolve one move from the attacking team's active member against the
/// defending team's active member.
///
/// Fails with `InvalidMove` if the slot is empty or out of PP, without
/// touching any state.
pub fn apply_move(
    attacker_team: &mut Team,
    defender_team: &mut Team,
    slot_index: usize,
    dex: &Pokedex,
) -> BattleResult<TurnOutcome> {
    let attacker = attacker_team.active_member();
    let defender = defender_team.active_member();

    let slot = attacker
        .move_slot(slot_index)
        .ok_or(BattleError::InvalidMove { slot: slot_index })?;
    if slot.pp == 0 {
        return Err(BattleError::InvalidMove { slot: slot_index });
    }

    let move_data = dex.move_data(slot.move_id)?;
    let multiplier = math::effectiveness(dex.type_chart(), move_data.move_type, &defender.types);
    let damage = math::damage(move_data.power, multiplier);

    let mut message = format!("{} used {}!", attacker.name, move_data.name);
    if let Some(note) = effectiveness_text(multiplier) {
        message.push(' ');
        message.push_str(note);
    }
    if damage > 0 {
        message.push_str(&format!(" {} took {} damage!", defender.name, damage));
    }

    // All lookups succeeded; commit the state changes.
    let attacker = attacker_team.active_member_mut();
    let slot = attacker.moves[slot_index]
        .as_mut()
        .ok_or(BattleError::InvalidMove { slot: slot_index })?;
    slot.pp = slot.pp.saturating_sub(1);
    let attacker_hp = attacker.current_hp;

    let defender = defender_team.active_member_mut();
    let defender_fainted = defender.take_damage(damage);

    Ok(TurnOutcome {
        message,
        attacker_hp,
        defender_hp: defender.current_hp,
        defender_fainted,
    })
}

fn effectiveness_text(multiplier: f32) -> Option<&'static str> {
    if multiplier == 0.0 {
        Some("It had no effect...")
    } else if multiplier >= 2.0 {
        Some("It's super effective!")
    } else if multiplier < 1.0 {
        Some("It's not very effective...")
    } else {
        None
    }
}

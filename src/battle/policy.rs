//! Move selection for the scripted gym-leader side.

use crate::battle::math;
use crate::dex::Pokedex;
use crate::errors::{BattleError, BattleResult};
use crate::team::TeamMember;
use schema::PokemonType;

/// A strategy that picks which move slot the gym leader's active member uses.
/// Kept behind a trait so the service can swap in other behaviors later.
pub trait MovePolicy {
    /// Returns the chosen move slot index (0-3), or `NoUsableMove` if every
    /// occupied slot is out of PP.
    fn choose_move(
        &self,
        attacker: &TeamMember,
        defender_types: &[PokemonType],
        dex: &Pokedex,
    ) -> BattleResult<usize>;
}

/// The scripted gym-leader heuristic: greedily pick the usable move with the
/// highest expected damage, `power * effectiveness` against the defender's
/// current types. Ties go to the lowest slot index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringPolicy;

impl ScoringPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl MovePolicy for ScoringPolicy {
    fn choose_move(
        &self,
        attacker: &TeamMember,
        defender_types: &[PokemonType],
        dex: &Pokedex,
    ) -> BattleResult<usize> {
        let mut best: Option<(usize, f32)> = None;

        for (index, slot) in attacker.moves.iter().enumerate() {
            let Some(slot) = slot else { continue };
            if slot.pp == 0 {
                continue;
            }

            let move_data = dex.move_data(slot.move_id)?;
            let multiplier =
                math::effectiveness(dex.type_chart(), move_data.move_type, defender_types);
            let score = move_data.power as f32 * multiplier;

            // Strictly-greater keeps the first occurrence on ties.
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }

        best.map(|(index, _)| index).ok_or(BattleError::NoUsableMove)
    }
}

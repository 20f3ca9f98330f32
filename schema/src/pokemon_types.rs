use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
}

/// The type-effectiveness matrix: (attacking type, defending type) mapped to a
/// damage multiplier. Pairs that are not present in the matrix resolve to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    multipliers: HashMap<(PokemonType, PokemonType), f32>,
}

impl TypeChart {
    /// An empty chart: every matchup is neutral.
    pub fn new() -> Self {
        TypeChart {
            multipliers: HashMap::new(),
        }
    }

    pub fn set(&mut self, attacking: PokemonType, defending: PokemonType, multiplier: f32) {
        self.multipliers.insert((attacking, defending), multiplier);
    }

    /// Look up the multiplier for a single attacking/defending pair.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective,
    /// 0.0 = No Effect. Absent pairs default to 1.0.
    pub fn multiplier(&self, attacking: PokemonType, defending: PokemonType) -> f32 {
        self.multipliers
            .get(&(attacking, defending))
            .copied()
            .unwrap_or(1.0)
    }

    pub fn is_immune(&self, attacking: PokemonType, defending: PokemonType) -> bool {
        self.multiplier(attacking, defending) == 0.0
    }

    /// The original 15-type chart, with only the non-neutral matchups stored.
    pub fn gen1() -> Self {
        use PokemonType::*;

        let mut chart = TypeChart::new();
        let entries: &[(PokemonType, PokemonType, f32)] = &[
            // Normal
            (Normal, Ghost, 0.0),
            (Normal, Rock, 0.5),
            // Fire
            (Fire, Fire, 0.5),
            (Fire, Water, 0.5),
            (Fire, Rock, 0.5),
            (Fire, Dragon, 0.5),
            (Fire, Grass, 2.0),
            (Fire, Ice, 2.0),
            (Fire, Bug, 2.0),
            // Water
            (Water, Water, 0.5),
            (Water, Grass, 0.5),
            (Water, Dragon, 0.5),
            (Water, Fire, 2.0),
            (Water, Ground, 2.0),
            (Water, Rock, 2.0),
            // Electric
            (Electric, Electric, 0.5),
            (Electric, Grass, 0.5),
            (Electric, Dragon, 0.5),
            (Electric, Ground, 0.0),
            (Electric, Water, 2.0),
            (Electric, Flying, 2.0),
            // Grass
            (Grass, Fire, 0.5),
            (Grass, Grass, 0.5),
            (Grass, Poison, 0.5),
            (Grass, Flying, 0.5),
            (Grass, Bug, 0.5),
            (Grass, Dragon, 0.5),
            (Grass, Water, 2.0),
            (Grass, Ground, 2.0),
            (Grass, Rock, 2.0),
            // Ice
            (Ice, Fire, 0.5),
            (Ice, Water, 0.5),
            (Ice, Ice, 0.5),
            (Ice, Grass, 2.0),
            (Ice, Ground, 2.0),
            (Ice, Flying, 2.0),
            (Ice, Dragon, 2.0),
            // Fighting
            (Fighting, Poison, 0.5),
            (Fighting, Flying, 0.5),
            (Fighting, Psychic, 0.5),
            (Fighting, Bug, 0.5),
            (Fighting, Ghost, 0.0),
            (Fighting, Normal, 2.0),
            (Fighting, Ice, 2.0),
            (Fighting, Rock, 2.0),
            // Poison
            (Poison, Poison, 0.5),
            (Poison, Ground, 0.5),
            (Poison, Rock, 0.5),
            (Poison, Ghost, 0.5),
            (Poison, Grass, 2.0),
            // Ground
            (Ground, Grass, 0.5),
            (Ground, Bug, 0.5),
            (Ground, Flying, 0.0),
            (Ground, Fire, 2.0),
            (Ground, Electric, 2.0),
            (Ground, Poison, 2.0),
            (Ground, Rock, 2.0),
            // Flying
            (Flying, Electric, 0.5),
            (Flying, Rock, 0.5),
            (Flying, Grass, 2.0),
            (Flying, Fighting, 2.0),
            (Flying, Bug, 2.0),
            // Psychic
            (Psychic, Psychic, 0.5),
            (Psychic, Fighting, 2.0),
            (Psychic, Poison, 2.0),
            // Bug
            (Bug, Fire, 0.5),
            (Bug, Fighting, 0.5),
            (Bug, Poison, 0.5),
            (Bug, Flying, 0.5),
            (Bug, Ghost, 0.5),
            (Bug, Grass, 2.0),
            (Bug, Psychic, 2.0),
            // Rock
            (Rock, Fighting, 0.5),
            (Rock, Ground, 0.5),
            (Rock, Fire, 2.0),
            (Rock, Ice, 2.0),
            (Rock, Flying, 2.0),
            (Rock, Bug, 2.0),
            // Ghost
            (Ghost, Normal, 0.0),
            (Ghost, Psychic, 0.5),
            (Ghost, Ghost, 2.0),
            // Dragon
            (Dragon, Dragon, 2.0),
        ];

        for &(attacking, defending, multiplier) in entries {
            chart.set(attacking, defending, multiplier);
        }
        chart
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::gen1()
    }
}

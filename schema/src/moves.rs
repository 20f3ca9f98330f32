use crate::PokemonType;
use serde::{Deserialize, Serialize};

/// Primary key of the move catalog.
pub type MoveId = u16;

/// One immutable row of the move catalog (the original `moves` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub move_type: PokemonType,
    /// Base power; 0 for status-only moves, which deal no damage.
    pub power: u16,
    /// Hit chance 0-100. Carried from the catalog but not rolled during
    /// resolution: every move in this engine hits.
    pub accuracy: u8,
    pub max_pp: u8,
}

impl MoveData {
    pub fn is_status_move(&self) -> bool {
        self.power == 0
    }
}

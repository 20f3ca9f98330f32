use crate::PokemonType;
use serde::{Deserialize, Serialize};

/// Pokedex number, the primary key of the species catalog.
pub type SpeciesId = u16;

/// One immutable row of the species catalog (the original `pokedex_entries`
/// table): display name, base HP, one or two elemental types, and the image
/// asset the web layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub name: String,
    pub base_hp: u16,
    /// One or two elemental types, never empty.
    pub types: Vec<PokemonType>,
    pub image_filename: String,
}

impl SpeciesData {
    pub fn is_dual_typed(&self) -> bool {
        self.types.len() == 2
    }
}

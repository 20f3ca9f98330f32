//! The reference-data provider: read-only species and move catalogs plus the
//! type-effectiveness chart. Loaded once (from RON files or built in code) and
//! shared freely across sessions without locking.

use crate::errors::{BattleError, BattleResult, ReferenceKind};
use schema::{MoveData, MoveId, PokemonType, SpeciesData, SpeciesId, TypeChart};
use std::collections::HashMap;
use std::path::Path;

/// Errors raised while loading catalog files from disk. Distinct from
/// [`BattleError`] because these wrap non-cloneable I/O and parse failures.
#[derive(Debug, thiserror::Error)]
pub enum DexLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
}

/// The read-only catalog the engine resolves ids against.
#[derive(Debug, Clone)]
pub struct Pokedex {
    species: HashMap<SpeciesId, SpeciesData>,
    moves: HashMap<MoveId, MoveData>,
    type_chart: TypeChart,
}

impl Pokedex {
    pub fn new(type_chart: TypeChart) -> Self {
        Pokedex {
            species: HashMap::new(),
            moves: HashMap::new(),
            type_chart,
        }
    }

    /// Load `species.ron`, `moves.ron` and `type_chart.ron` from a data
    /// directory.
    pub fn load_from_dir(data_path: &Path) -> Result<Self, DexLoadError> {
        let species = load_ron(&data_path.join("species.ron"))?;
        let moves = load_ron(&data_path.join("moves.ron"))?;
        let type_chart = load_ron(&data_path.join("type_chart.ron"))?;

        Ok(Pokedex {
            species,
            moves,
            type_chart,
        })
    }

    pub fn add_species(&mut self, id: SpeciesId, data: SpeciesData) {
        self.species.insert(id, data);
    }

    pub fn add_move(&mut self, id: MoveId, data: MoveData) {
        self.moves.insert(id, data);
    }

    pub fn species(&self, id: SpeciesId) -> BattleResult<&SpeciesData> {
        self.species
            .get(&id)
            .ok_or(BattleError::ReferenceDataMissing(ReferenceKind::Species(id)))
    }

    pub fn move_data(&self, id: MoveId) -> BattleResult<&MoveData> {
        self.moves
            .get(&id)
            .ok_or(BattleError::ReferenceDataMissing(ReferenceKind::Move(id)))
    }

    pub fn type_multiplier(&self, attacking: PokemonType, defending: PokemonType) -> f32 {
        self.type_chart.multiplier(attacking, defending)
    }

    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }
}

fn load_ron<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DexLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| DexLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DexLoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

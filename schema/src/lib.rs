// Boss Rush Schema - Shared reference-data definitions
// This crate contains the immutable catalog types (elemental types, the
// type-effectiveness chart, species rows, move rows) that are shared between
// the battle engine and any data tooling built on top of it.

// Re-export the main types
pub use moves::*;
pub use pokemon_types::*;
pub use species::*;

pub mod moves;
pub mod pokemon_types;
pub mod species;

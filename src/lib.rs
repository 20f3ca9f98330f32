// In: src/lib.rs

//! Boss Rush Battle Engine
//!
//! The battle resolution core of the Pokemon Boss Rush gym game: combat math,
//! the scripted gym-leader policy, turn resolution, forced switching, and the
//! per-battle session state machine, plus the session service that runs a
//! whole round per submitted move against a persistence store.
//!
//! Rendering, accounts, and team CRUD live in the web layer; this crate only
//! consumes and produces plain data records.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod dex;
pub mod errors;
pub mod service;
pub mod store;
pub mod team;
pub mod views;

// --- PUBLIC API RE-EXPORTS ---
// The public-facing API of the `boss-rush` crate, making it easy for callers
// to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the reference-data definitions.
pub use schema::{MoveData, MoveId, PokemonType, SpeciesData, SpeciesId, TypeChart};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::math::{damage, effectiveness};
pub use battle::policy::{MovePolicy, ScoringPolicy};
pub use battle::resolver::{apply_move, TurnOutcome};
pub use battle::session::{BattlePhase, BattleSession, TurnReport};
pub use battle::switching::{handle_faint, SwitchOutcome};

// Battle-side state types.
pub use team::{MoveSlot, Team, TeamMember, TeamSide};

// Reference data access.
pub use dex::{DexLoadError, Pokedex};

// The outer service and its collaborators.
pub use errors::{BattleError, BattleResult, ReferenceKind};
pub use service::{BattleOutcome, BattleRecord, BattleService};
pub use store::{MemoryStore, SessionStore, Version};
pub use views::{BattleSessionView, MemberView, MoveSlotView, SideView, TurnResult};

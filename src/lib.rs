#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod config;
pub mod characters;
pub mod rng;
pub mod draft;
pub mod board;

pub mod engine {
    pub mod score;
    pub mod optimal;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{is_valid_placement, Board};
pub use crate::characters::{load_characters_from_json, Character, CharacterDb};
pub use crate::config::{BoardConfig, ScoreTable};
pub use crate::draft::{
    generate_all_rounds, roll_rarity, DraftCard, Round, DRAFT_ROUNDS, OPTIONS_PER_ROUND,
};
pub use crate::engine::optimal::{calculate_optimal, OptimalResult};
pub use crate::engine::score::{calculate_score, score_cell, CellScore, Connection, ConnectionRule, ScoreBreakdown};
pub use crate::rng::{derive_seed, DraftRng};
pub use crate::types::{Rarity, Tag};

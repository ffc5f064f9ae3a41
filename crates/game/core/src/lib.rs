//! Deterministic combat rules for the mech prototype.
//!
//! `mech-core` defines characters, enemy templates, roster generation and the
//! round resolver, and exposes pure APIs that hosts (the headless simulator,
//! a GUI, tests) drive directly. All combat state mutation flows through
//! [`combat::Encounter`]; every random draw comes from the RNG the host passes
//! in, so a seeded [`PcgRng`] replays an encounter exactly.
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod formation;
pub mod rng;
pub mod roster;
#[cfg(feature = "serde")]
pub mod save;

pub use character::{Character, Placement, Role, Template, TemplateCatalog};
pub use combat::{
    ActionLine, Combatant, CombatantId, Effect, EffectKind, Encounter, EncounterStatus, Outcome,
    RoundReport, Side,
};
pub use config::CombatConfig;
pub use error::{CombatError, ErrorSeverity, GameError};
pub use formation::Formation;
pub use rng::{PcgRng, compute_seed};
pub use roster::{EnemyRoster, generate_enemy_roster};
#[cfg(feature = "serde")]
pub use save::SaveData;

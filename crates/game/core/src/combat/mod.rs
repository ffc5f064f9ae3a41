//! Combat resolution system.
//!
//! # Architecture
//!
//! - **Pure Formulas**: `damage` maps a role and attack stat to an effect
//! - **Encounter**: owns both rosters and resolves rounds in shuffled order
//! - **Results**: every applied effect becomes an [`ActionLine`]
//!
//! # Core Functions
//!
//! - `Encounter::resolve_round`: plan, shuffle, and execute one round
//! - `effect_for`: per-target damage or healing for a role
//! - `apply_damage` / `apply_heal`: HP changes clamped to `0..=max`

pub mod combatant;
pub mod damage;
pub mod encounter;
pub mod result;

pub use combatant::{Combatant, CombatantId, Side};
pub use damage::{Effect, EffectKind, apply_damage, apply_heal, effect_for};
pub use encounter::{Encounter, EncounterStatus, Outcome};
pub use result::{ActionLine, RoundReport};

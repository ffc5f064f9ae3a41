//! Encounter-scoped wrapper around a character.

use super::damage::{apply_damage, apply_heal};
use crate::character::{Character, Role};

/// Side of the encounter a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

/// Stable address of a combatant: side plus index into that side's roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId {
    pub side: Side,
    pub index: usize,
}

impl CombatantId {
    pub const fn player(index: usize) -> Self {
        Self {
            side: Side::Player,
            index,
        }
    }

    pub const fn enemy(index: usize) -> Self {
        Self {
            side: Side::Enemy,
            index,
        }
    }
}

/// A character taking part in an encounter.
///
/// # Invariants
///
/// - `hp_current` is always within `0..=hp_max`
/// - `target` is only read in the `Single` role and is cleared after every round
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "CombatantRecord"))]
pub struct Combatant {
    character: Character,
    hp_current: u32,
    role: Role,
    /// Index into the enemy roster.
    target: Option<usize>,
}

impl Combatant {
    /// Enter the encounter at full health in the `Single` role.
    pub fn new(character: Character) -> Self {
        Self {
            hp_current: character.health,
            character,
            role: Role::Single,
            target: None,
        }
    }

    /// Start from a specific health value, clamped to max health.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp_current = hp.min(self.hp_max());
        self
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn attack(&self) -> u32 {
        self.character.attack
    }

    pub fn hp_max(&self) -> u32 {
        self.character.health
    }

    pub fn hp_current(&self) -> u32 {
        self.hp_current
    }

    pub fn roles(&self) -> &[Role] {
        &self.character.roles
    }

    /// Role used in the most recent (or current) round.
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn is_alive(&self) -> bool {
        self.hp_current > 0
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub(crate) fn set_target(&mut self, enemy: usize) {
        self.target = Some(enemy);
    }

    pub(crate) fn clear_target(&mut self) {
        self.target = None;
    }

    pub(crate) fn take_damage(&mut self, amount: u32) {
        self.hp_current = apply_damage(self.hp_current, amount);
    }

    pub(crate) fn heal(&mut self, amount: u32) {
        self.hp_current = apply_heal(self.hp_current, amount, self.hp_max());
    }
}

/// Wire form of [`Combatant`]; health is clamped on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CombatantRecord {
    character: Character,
    hp_current: u32,
    role: Role,
    target: Option<usize>,
}

#[cfg(feature = "serde")]
impl From<CombatantRecord> for Combatant {
    fn from(record: CombatantRecord) -> Self {
        let mut combatant = Self::new(record.character).with_hp(record.hp_current);
        combatant.role = record.role;
        combatant.target = record.target;
        combatant
    }
}

impl From<Character> for Combatant {
    fn from(character: Character) -> Self {
        Self::new(character)
    }
}

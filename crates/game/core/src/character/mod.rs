//! Combatant descriptors: base stats, role affinities, and procurement.
//!
//! A [`Character`] is the persistent half of a combatant. Hosts own rosters of
//! characters between encounters; an encounter wraps each one in a
//! [`Combatant`](crate::combat::Combatant) that tracks current health.
//!
//! Characters come from three places:
//! - [`Character::from_random`]: stats split from a fixed point pool
//! - [`Character::from_template`]: an enemy archetype from the catalog
//! - a save file (see `SaveData`)

pub mod template;

use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

pub use template::{Template, TemplateCatalog};

use crate::config::CombatConfig;

/// Action category a combatant performs in a round.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Attack one enemy for half the attack stat.
    Single,
    /// Hit every standing enemy for a sixth of the attack stat.
    AoE,
    /// Heal the whole allied roster for a sixth of the attack stat.
    Support,
}

/// Battle line a character stands in.
///
/// Carried with the roster for hosts that lay out formations; the resolver
/// does not read it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    #[default]
    Front,
    Back,
}

/// Base stats and role affinities of one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Character {
    pub name: String,
    /// Maximum hit points.
    pub health: u32,
    pub attack: u32,
    /// Roles this character may be assigned, in display order.
    pub roles: Vec<Role>,
    pub placement: Placement,
}

impl Character {
    /// Field names recognised in persisted rosters.
    pub const FIELDS: &'static [&'static str] = &["name", "health", "attack", "roles", "placement"];

    /// Name given to freshly procured random characters until the host renames them.
    pub const RANDOM_NAME: &'static str = "Random";

    pub fn new(name: impl Into<String>, health: u32, attack: u32, roles: Vec<Role>) -> Self {
        Self {
            name: name.into(),
            health,
            attack,
            roles,
            placement: Placement::default(),
        }
    }

    /// Set the battle line (builder pattern).
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Procure a character by splitting `random_stat_points` between health
    /// and attack with random weights, and sampling `random_role_count`
    /// distinct roles.
    ///
    /// Both stats are at least 1.
    pub fn from_random<R: Rng + ?Sized>(config: &CombatConfig, rng: &mut R) -> Self {
        let health_weight: f64 = rng.gen_range(0.0..1.0);
        let attack_weight: f64 = rng.gen_range(0.0..1.0);
        let total = health_weight + attack_weight;
        let (health_share, attack_share) = if total > 0.0 {
            (health_weight / total, attack_weight / total)
        } else {
            (0.5, 0.5)
        };

        let points = config.random_stat_points as f64;
        let health = ((points * health_share) as u32).max(1);
        let attack = ((points * attack_share) as u32).max(1);

        let mut roles: Vec<Role> = Role::iter().collect();
        roles.shuffle(rng);
        roles.truncate(config.random_role_count);

        Self::new(Self::RANDOM_NAME, health, attack, roles)
    }

    /// Instantiate an enemy from an archetype. Enemies only ever act in the
    /// `Single` role.
    pub fn from_template(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            health: template.health,
            attack: template.attack,
            roles: vec![Role::Single],
            placement: template.placement,
        }
    }

    /// Returns true if this character may be assigned `role`.
    pub fn is_affiliated(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            health: 3,
            attack: 3,
            roles: Vec::new(),
            placement: Placement::Front,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn random_characters_stay_within_point_pool() {
        let config = CombatConfig::default();
        let mut rng = PcgRng::new(11);

        for _ in 0..200 {
            let character = Character::from_random(&config, &mut rng);
            assert!(character.health >= 1);
            assert!(character.attack >= 1);
            assert!(character.health + character.attack <= config.random_stat_points + 1);
            assert_eq!(character.roles.len(), config.random_role_count);

            let distinct: HashSet<_> = character.roles.iter().collect();
            assert_eq!(distinct.len(), character.roles.len());
            assert_eq!(character.name, Character::RANDOM_NAME);
        }
    }

    #[test]
    fn random_role_count_is_capped_by_available_roles() {
        let config = CombatConfig {
            random_role_count: 10,
            ..CombatConfig::default()
        };
        let character = Character::from_random(&config, &mut PcgRng::new(1));
        assert_eq!(character.roles.len(), 3);
    }

    #[test]
    fn template_characters_are_single_role() {
        let catalog = TemplateCatalog::standard();
        let heavy = catalog.get("heavy").unwrap();
        let character = Character::from_template(heavy);

        assert_eq!(character.name, "Heavy");
        assert_eq!(character.health, 12);
        assert_eq!(character.attack, 12);
        assert_eq!(character.roles, vec![Role::Single]);
        assert_eq!(character.placement, Placement::Front);
    }

    #[test]
    fn affiliation_checks_role_list() {
        let character = Character::new("Alpha", 10, 10, vec![Role::AoE, Role::Support]);
        assert!(character.is_affiliated(Role::AoE));
        assert!(!character.is_affiliated(Role::Single));
    }

    #[test]
    fn role_names_round_trip_through_strings() {
        for role in Role::iter() {
            assert_eq!(Role::from_str(&role.to_string()).unwrap(), role);
        }
        assert_eq!(Role::AoE.to_string(), "AoE");
    }
}

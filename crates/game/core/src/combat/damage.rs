//! Effect calculation and application.

use crate::character::Role;
use crate::config::CombatConfig;

/// Whether an effect removes or restores hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Damage,
    Heal,
}

/// Amount and kind of effect a role produces per target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub kind: EffectKind,
    pub amount: u32,
}

/// Per-target effect of acting in `role` with the given attack stat.
///
/// # Formula
///
/// ```text
/// Single:  damage = max(1, attack / 2)
/// AoE:     damage = max(1, attack / 6)
/// Support: heal   = max(1, attack / 6)
/// ```
pub fn effect_for(role: Role, attack: u32) -> Effect {
    match role {
        Role::Single => Effect {
            kind: EffectKind::Damage,
            amount: single_damage(attack),
        },
        Role::AoE => Effect {
            kind: EffectKind::Damage,
            amount: area_damage(attack),
        },
        Role::Support => Effect {
            kind: EffectKind::Heal,
            amount: support_heal(attack),
        },
    }
}

pub fn single_damage(attack: u32) -> u32 {
    (attack / CombatConfig::SINGLE_DIVISOR).max(CombatConfig::MINIMUM_EFFECT)
}

pub fn area_damage(attack: u32) -> u32 {
    (attack / CombatConfig::SPREAD_DIVISOR).max(CombatConfig::MINIMUM_EFFECT)
}

pub fn support_heal(attack: u32) -> u32 {
    (attack / CombatConfig::SPREAD_DIVISOR).max(CombatConfig::MINIMUM_EFFECT)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Apply healing to current HP.
///
/// # Returns
///
/// New HP value (clamped to `max_hp`)
pub fn apply_heal(current_hp: u32, heal: u32, max_hp: u32) -> u32 {
    current_hp.saturating_add(heal).min(max_hp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_target_halves_attack() {
        assert_eq!(single_damage(12), 6);
        assert_eq!(single_damage(7), 3);
    }

    #[test]
    fn spread_effects_take_a_sixth() {
        assert_eq!(area_damage(6), 1);
        assert_eq!(area_damage(13), 2);
        assert_eq!(support_heal(18), 3);
    }

    #[test]
    fn every_effect_is_at_least_one() {
        for attack in 0..6 {
            for role in [Role::Single, Role::AoE, Role::Support] {
                assert!(effect_for(role, attack).amount >= 1, "{role} with attack {attack}");
            }
        }
    }

    #[test]
    fn effect_kind_follows_role() {
        assert_eq!(effect_for(Role::Single, 4).kind, EffectKind::Damage);
        assert_eq!(effect_for(Role::AoE, 4).kind, EffectKind::Damage);
        assert_eq!(effect_for(Role::Support, 4).kind, EffectKind::Heal);
    }

    #[test]
    fn damage_floors_at_zero_and_heal_caps_at_max() {
        assert_eq!(apply_damage(3, 6), 0);
        assert_eq!(apply_damage(10, 4), 6);
        assert_eq!(apply_heal(9, 3, 10), 10);
        assert_eq!(apply_heal(0, 2, 10), 2);
    }
}

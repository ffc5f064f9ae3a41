//! Target selection for players in the `Single` role.

use mech_core::{Combatant, Encounter, Formation, Role};

use crate::config::TargetingKind;

/// Strategy for choosing which enemy a `Single` player attacks.
///
/// Implementations must be deterministic.
pub trait TargetingStrategy {
    /// Selects an enemy index, or `None` to let the resolver pick at random.
    fn select_target(&self, enemies: &[Combatant]) -> Option<usize>;

    /// Returns the strategy name for logging.
    fn name(&self) -> &'static str;
}

/// Leave the choice to the resolver.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy;

impl TargetingStrategy for RandomStrategy {
    fn select_target(&self, _enemies: &[Combatant]) -> Option<usize> {
        None
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}

/// Target the standing enemy with the lowest HP percentage.
///
/// Ties go to the earliest enemy in the roster.
#[derive(Debug, Clone, Default)]
pub struct LowestHealthStrategy;

impl TargetingStrategy for LowestHealthStrategy {
    fn select_target(&self, enemies: &[Combatant]) -> Option<usize> {
        enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| enemy.is_alive())
            .min_by_key(|(_, enemy)| health_percentage(enemy.hp_current(), enemy.hp_max()))
            .map(|(idx, _)| idx)
    }

    fn name(&self) -> &'static str {
        "Lowest Health"
    }
}

pub fn strategy_for(kind: TargetingKind) -> Box<dyn TargetingStrategy> {
    match kind {
        TargetingKind::Random => Box::new(RandomStrategy),
        TargetingKind::LowestHealth => Box::new(LowestHealthStrategy),
    }
}

/// Aim every standing player assigned `Single` in `formation`.
pub fn aim_single_players(
    encounter: &mut Encounter,
    formation: &Formation,
    strategy: &dyn TargetingStrategy,
) -> anyhow::Result<()> {
    let singles: Vec<usize> = encounter
        .players()
        .iter()
        .enumerate()
        .filter(|(_, player)| player.is_alive())
        .zip(formation.roles())
        .filter(|(_, role)| **role == Role::Single)
        .map(|((idx, _), _)| idx)
        .collect();

    for player in singles {
        if let Some(enemy) = strategy.select_target(encounter.enemies()) {
            encounter.set_target(player, enemy)?;
        }
    }

    Ok(())
}

fn health_percentage(current: u32, maximum: u32) -> u32 {
    if maximum == 0 {
        return 0;
    }
    current * 100 / maximum
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_core::Character;

    fn enemy(name: &str, health: u32, hp: u32) -> Combatant {
        Combatant::new(Character::new(name, health, 3, vec![Role::Single])).with_hp(hp)
    }

    #[test]
    fn lowest_health_prefers_wounded_standing_enemies() {
        let enemies = [
            enemy("(0) Tank", 12, 12),
            enemy("(1) Swarmer", 3, 0),
            enemy("(2) Heavy", 12, 3),
            enemy("(3) Skirmisher", 3, 2),
        ];
        assert_eq!(LowestHealthStrategy.select_target(&enemies), Some(2));
    }

    #[test]
    fn random_strategy_defers_to_resolver() {
        let enemies = [enemy("(0) Tank", 12, 12)];
        assert_eq!(RandomStrategy.select_target(&enemies), None);
    }

    #[test]
    fn only_single_players_are_aimed() {
        let players = [
            Character::new("Alpha", 10, 10, vec![Role::Single]),
            Character::new("Beta", 10, 10, vec![Role::AoE]),
        ];
        let enemies = vec![
            Character::new("(0) Tank", 12, 3, vec![Role::Single]),
            Character::new("(1) Tank", 12, 3, vec![Role::Single]),
        ];
        let mut encounter = Encounter::new(&players, enemies);
        let formation = Formation::new(vec![Role::Single, Role::AoE]);

        aim_single_players(&mut encounter, &formation, &LowestHealthStrategy).unwrap();

        assert_eq!(encounter.players()[0].target(), Some(0));
        assert_eq!(encounter.players()[1].target(), None);
    }
}

//! Enemy roster generation under a procurement budget.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::character::{Character, TemplateCatalog};
use crate::config::CombatConfig;

/// Enemy roster produced for one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyRoster {
    /// Enemies in generation order, already renamed `"(<index>) <name>"`.
    pub enemies: Vec<Character>,
    /// Catalog key each enemy was drawn from, parallel to `enemies`.
    pub template_keys: Vec<String>,
    /// Points available for this roster.
    pub budget: u32,
    /// Points actually spent, never above `budget`.
    pub spent: u32,
}

/// Draw enemies from `catalog` until the budget (`player_count *
/// budget_per_player`) is used up.
///
/// Each draw is uniform over the catalog. A draw that costs more than the
/// remaining points is discarded and redrawn. Generation stops when the
/// remaining budget hits zero, or as soon as the cheapest template no longer
/// fits.
pub fn generate_enemy_roster<R: Rng + ?Sized>(
    player_count: usize,
    catalog: &TemplateCatalog,
    config: &CombatConfig,
    rng: &mut R,
) -> EnemyRoster {
    let budget = config.enemy_budget(player_count);
    let mut remaining = budget;
    let mut picks = Vec::new();

    while remaining > 0 {
        match catalog.cheapest_cost() {
            Some(cheapest) if cheapest <= remaining => {}
            _ => {
                tracing::debug!(remaining, "no affordable template left, stopping generation");
                break;
            }
        }

        let Some(template) = catalog.templates().choose(rng) else {
            break;
        };
        if template.cost > remaining {
            tracing::trace!(
                key = %template.key,
                cost = template.cost,
                remaining,
                "over budget, redrawing"
            );
            continue;
        }

        remaining -= template.cost;
        tracing::trace!(key = %template.key, remaining, "template drawn");
        picks.push(template);
    }

    let enemies = picks
        .iter()
        .enumerate()
        .map(|(idx, template)| {
            let mut enemy = template.instantiate();
            enemy.name = format!("({idx}) {}", template.name);
            enemy
        })
        .collect();
    let template_keys = picks.iter().map(|t| t.key.clone()).collect();

    tracing::debug!(
        player_count,
        budget,
        spent = budget - remaining,
        count = picks.len(),
        "enemy roster generated"
    );

    EnemyRoster {
        enemies,
        template_keys,
        budget,
        spent: budget - remaining,
    }
}

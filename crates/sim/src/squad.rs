//! Player squad setup: load from a save or procure a fresh one.

use std::path::Path;

use mech_content::SaveLoader;
use mech_core::{Character, CombatConfig};
use rand::Rng;

const CALLSIGNS: [&str; 5] = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];

/// Procure `size` random mechs with unique callsigns.
pub fn procure_squad<R: Rng + ?Sized>(
    size: usize,
    config: &CombatConfig,
    rng: &mut R,
) -> Vec<Character> {
    (0..size)
        .map(|i| {
            let mut mech = Character::from_random(config, rng);
            mech.name = callsign(i);
            mech
        })
        .collect()
}

/// Use the saved roster when there is one, otherwise procure a new squad.
pub fn load_or_procure<R: Rng + ?Sized>(
    save_path: Option<&Path>,
    size: usize,
    config: &CombatConfig,
    rng: &mut R,
) -> anyhow::Result<Vec<Character>> {
    if let Some(path) = save_path
        && let Some(save) = SaveLoader::load_if_exists(path)?
        && !save.roster.is_empty()
    {
        tracing::info!(path = %path.display(), mechs = save.roster.len(), "loaded squad from save");
        return Ok(save.roster);
    }

    let squad = procure_squad(size, config, rng);
    tracing::info!(mechs = squad.len(), "procured new squad");
    Ok(squad)
}

fn callsign(index: usize) -> String {
    let base = CALLSIGNS[index % CALLSIGNS.len()];
    match index / CALLSIGNS.len() {
        0 => base.to_string(),
        wave => format!("{base} {}", wave + 1),
    }
}

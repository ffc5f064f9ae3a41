//! Simulator configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration for a headless campaign run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Campaign seed; each encounter derives its own seed from it.
    pub seed: u64,
    /// Squad size when no save file provides one.
    pub players: usize,
    /// Number of encounters to fight back to back.
    pub encounters: u64,
    /// Safety cap on rounds per encounter.
    pub max_rounds: u32,
    /// Directory holding `config.toml` / `templates.ron`. Built-in content when unset.
    pub data_dir: Option<PathBuf>,
    /// Roster save file, read at start and written at the end when set.
    pub save_path: Option<PathBuf>,
    pub targeting: TargetingKind,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `SIM_SEED`
    /// - `SIM_PLAYERS`
    /// - `SIM_ENCOUNTERS`
    /// - `SIM_MAX_ROUNDS`
    /// - `SIM_DATA_DIR`
    /// - `SIM_SAVE_PATH`
    /// - `SIM_TARGETING` (`random` or `lowest`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("SIM_SEED") {
            config.seed = seed;
        }

        if let Some(players) = read_env::<usize>("SIM_PLAYERS") {
            config.players = players.max(1);
        }

        if let Some(encounters) = read_env::<u64>("SIM_ENCOUNTERS") {
            config.encounters = encounters.max(1);
        }

        if let Some(max_rounds) = read_env::<u32>("SIM_MAX_ROUNDS") {
            config.max_rounds = max_rounds.max(1);
        }

        config.data_dir = read_env::<PathBuf>("SIM_DATA_DIR");
        config.save_path = read_env::<PathBuf>("SIM_SAVE_PATH");

        if let Some(targeting) = read_env::<TargetingKind>("SIM_TARGETING") {
            config.targeting = targeting;
        }

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            players: 3,
            encounters: 1,
            max_rounds: 100,
            data_dir: None,
            save_path: None,
            targeting: TargetingKind::Random,
        }
    }
}

/// How the simulator aims players in the `Single` role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetingKind {
    /// Leave targets unset; the resolver picks a random standing enemy.
    #[default]
    Random,
    /// Aim at the standing enemy with the lowest health percentage.
    LowestHealth,
}

impl std::str::FromStr for TargetingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "lowest" | "lowest_health" => Ok(Self::LowestHealth),
            other => Err(format!("unknown targeting strategy '{other}'")),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

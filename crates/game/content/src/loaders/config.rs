//! Combat configuration loader.

use std::path::Path;

use mech_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`CombatConfig::default`].
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("budget_per_player = 6\n").unwrap();
        assert_eq!(config.budget_per_player, 6);
        assert_eq!(
            config.random_stat_points,
            CombatConfig::DEFAULT_RANDOM_STAT_POINTS
        );
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ConfigLoader::parse("budget_per_player = \"lots\"").is_err());
    }
}

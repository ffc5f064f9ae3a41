//! Content factory for loading everything from a data directory.

use std::path::{Path, PathBuf};

use mech_core::{CombatConfig, TemplateCatalog};

use crate::loaders::{ConfigLoader, LoadResult, TemplateLoader};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── templates.ron
/// ```
///
/// Both files are optional; absent files fall back to the built-in defaults.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the enemy template catalog from `templates.ron`.
    pub fn load_templates(&self) -> LoadResult<TemplateCatalog> {
        let path = self.data_dir.join("templates.ron");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no template catalog, using standard");
            return Ok(TemplateCatalog::standard());
        }
        TemplateLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

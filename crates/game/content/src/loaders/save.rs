//! Player roster save files.
//!
//! Saves are JSON. Reading is forward-compatible: fields this build does not
//! know about are logged and skipped, and missing character fields take the
//! character defaults.

use std::path::Path;

use mech_core::{Character, SaveData};
use serde_json::{Map, Value};

use crate::loaders::{LoadResult, read_file};

/// Loader and writer for roster save files.
pub struct SaveLoader;

impl SaveLoader {
    /// Load a save file.
    pub fn load(path: &Path) -> LoadResult<SaveData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Load a save file, or return `None` if it does not exist yet.
    pub fn load_if_exists(path: &Path) -> LoadResult<Option<SaveData>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Parse save data from a JSON string, warning about unknown fields.
    pub fn parse(content: &str) -> LoadResult<SaveData> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse save JSON: {}", e))?;

        let Value::Object(root) = value else {
            anyhow::bail!("Failed to parse save JSON: expected an object at the top level");
        };
        warn_unknown_fields("save", &root, SaveData::FIELDS);

        if let Some(Value::Array(roster)) = root.get("roster") {
            for (idx, entry) in roster.iter().enumerate() {
                if let Value::Object(fields) = entry {
                    warn_unknown_fields(&format!("roster[{idx}]"), fields, Character::FIELDS);
                }
            }
        }

        let save: SaveData = serde_json::from_value(Value::Object(root))
            .map_err(|e| anyhow::anyhow!("Failed to parse save JSON: {}", e))?;

        tracing::debug!(characters = save.roster.len(), "save data loaded");
        Ok(save)
    }

    /// Serialize save data to pretty-printed JSON.
    pub fn to_string(save: &SaveData) -> LoadResult<String> {
        serde_json::to_string_pretty(save)
            .map_err(|e| anyhow::anyhow!("Failed to serialize save data: {}", e))
    }

    /// Write save data, creating parent directories as needed.
    pub fn store(path: &Path, save: &SaveData) -> LoadResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
            })?;
        }

        let content = Self::to_string(save)?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            characters = save.roster.len(),
            "save data written"
        );
        Ok(())
    }
}

fn warn_unknown_fields(scope: &str, fields: &Map<String, Value>, known: &[&str]) {
    for key in fields.keys() {
        if !known.contains(&key.as_str()) {
            tracing::warn!(scope, field = %key, "unknown field in save data, ignoring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_core::{Placement, Role};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (result, output)
    }

    #[test]
    fn unknown_fields_are_ignored_with_a_warning() {
        let (save, logs) = with_captured_warnings(|| {
            SaveLoader::parse(
                r#"{
                    "roster": [
                        {"name": "Alpha", "health": 10, "attack": 14, "roles": ["Single", "AoE"], "paint": "red"}
                    ],
                    "version": 3
                }"#,
            )
        });

        assert_eq!(
            save.unwrap().roster,
            vec![Character::new("Alpha", 10, 14, vec![Role::Single, Role::AoE])]
        );
        assert_eq!(logs.matches("unknown field in save data").count(), 2);
        assert!(logs.contains("field=version"));
        assert!(logs.contains("field=paint"));
        assert!(logs.contains("roster[0]"));
    }

    #[test]
    fn known_fields_do_not_warn() {
        let (save, logs) = with_captured_warnings(|| {
            SaveLoader::parse(r#"{"roster": [{"name": "Beta", "placement": "Back"}]}"#)
        });

        assert_eq!(save.unwrap().roster[0].placement, Placement::Back);
        assert!(logs.is_empty());
    }

    #[test]
    fn missing_fields_take_character_defaults() {
        let save = SaveLoader::parse(r#"{"roster": [{"name": "Beta"}]}"#).unwrap();
        let beta = &save.roster[0];

        assert_eq!(beta.name, "Beta");
        assert_eq!(beta.health, 3);
        assert_eq!(beta.attack, 3);
        assert!(beta.roles.is_empty());
        assert_eq!(beta.placement, Placement::Front);
    }

    #[test]
    fn empty_object_is_an_empty_save() {
        assert_eq!(SaveLoader::parse("{}").unwrap(), SaveData::default());
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(SaveLoader::parse("[1, 2, 3]").is_err());
    }

    #[test]
    fn rejects_unknown_role_names() {
        assert!(SaveLoader::parse(r#"{"roster": [{"roles": ["Sniper"]}]}"#).is_err());
    }
}

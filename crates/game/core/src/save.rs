//! Persisted player roster.

use crate::character::Character;

/// Save record owned by the host between sessions.
///
/// Only base stats are persisted; current health is encounter state and is
/// reset when the next encounter starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub roster: Vec<Character>,
}

impl SaveData {
    /// Top-level field names recognised in save files.
    pub const FIELDS: &'static [&'static str] = &["roster"];

    pub fn new(roster: Vec<Character>) -> Self {
        Self { roster }
    }
}

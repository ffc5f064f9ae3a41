use std::path::PathBuf;

use mech_content::{ContentFactory, SaveLoader};
use mech_core::{Character, CombatConfig, Placement, Role, SaveData, TemplateCatalog};

fn shipped_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn shipped_content_matches_builtin_defaults() {
    let factory = ContentFactory::new(shipped_data_dir());

    assert_eq!(factory.load_config().unwrap(), CombatConfig::default());
    assert_eq!(factory.load_templates().unwrap(), TemplateCatalog::standard());
}

#[test]
fn save_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("roster.json");

    let save = SaveData::new(vec![
        Character::new("Alpha", 14, 10, vec![Role::Single, Role::Support]),
        Character::new("Beta", 6, 18, vec![Role::AoE, Role::Single]).with_placement(Placement::Back),
    ]);

    SaveLoader::store(&path, &save).unwrap();
    let loaded = SaveLoader::load(&path).unwrap();
    assert_eq!(loaded, save);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"roles\""));
    assert!(written.contains("\"AoE\""));
}

#[test]
fn missing_save_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = SaveLoader::load_if_exists(&dir.path().join("nothing.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn unreadable_files_report_their_path() {
    let err = SaveLoader::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

//! Config file round trips through the filesystem

use masthead_core::{CoreError, NavConfig, NavigationController};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = NavConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, NavConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("masthead.toml");

    let mut config = NavConfig::default();
    config.brand = "Acme".to_string();
    config.cart_count = 2;
    config.behavior.back_clears_dropdown = false;
    config.primary[0].links = vec!["Search".to_string()];
    config.save(&path).unwrap();

    let loaded = NavConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_toml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("masthead.toml");
    fs::write(&path, "brand = [").unwrap();

    let err = NavConfig::load(&path).unwrap_err();
    let rendered = err.to_string();
    match err {
        CoreError::TomlParse { path: p, source } => {
            assert_eq!(p, path);
            // The parser's message appears once in the chain, on the source
            assert!(!rendered.contains(source.message()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validation_runs_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("masthead.toml");
    fs::write(
        &path,
        "[[primary]]\nlabel = \"Shop\"\n\n[[utility]]\nlabel = \"Shop\"\n",
    )
    .unwrap();

    assert!(matches!(
        NavConfig::load(&path),
        Err(CoreError::DuplicateLabel { .. })
    ));
}

#[test]
fn test_loaded_config_drives_controller() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("masthead.toml");
    fs::write(
        &path,
        "[[primary]]\nlabel = \"Shop\"\nhas_submenu = true\nlinks = [\"Shirts\"]\n",
    )
    .unwrap();

    let config = NavConfig::load(&path).unwrap();
    let nav = NavigationController::from_config(&config).unwrap();
    assert!(!nav.toggle_dropdown("Domains"));
    assert!(nav.toggle_dropdown("Shop"));
    assert_eq!(nav.open_dropdown_content().unwrap().1, vec!["Shirts"]);
}

use toll_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_uses_dollar_symbol() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "$");
    assert!(cfg.ui_color_enabled);
    assert!(!cfg.accessibility.plain_output);
    assert_eq!(cfg.format_amount(7.0), "$7");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("manager");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency_symbol = "EUR ".to_string();
    cfg.accessibility.plain_output = true;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency_symbol, "EUR ");
    assert!(loaded.accessibility.plain_output);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "ui_color_enabled": false }"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert!(!loaded.ui_color_enabled);
    assert_eq!(loaded.currency_symbol, "$");
}

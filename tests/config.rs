use modalist::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.dialog_width_percent, 60);
    assert_eq!(config.ui.dialog_height_percent, 20);
    assert!(!config.ui.mouse_enabled);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Dialog smaller than the minimum should fail
    config.ui.dialog_width_percent = 5;
    assert!(config.validate().is_err());

    // Reset and test a dialog taller than the screen
    config.ui.dialog_width_percent = 60;
    config.ui.dialog_height_percent = 150;
    assert!(config.validate().is_err());

    // Reset and test an unknown level
    config.ui.dialog_height_percent = 20;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("dialog_width_percent = 60"));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
dialog_height_percent = 40

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.dialog_height_percent, 40);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.dialog_width_percent, 60);
    assert!(!config.ui.mouse_enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.dialog_width_percent, default_config.ui.dialog_width_percent);
    assert_eq!(config.ui.dialog_height_percent, default_config.ui.dialog_height_percent);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let temp_dir = std::env::temp_dir().join(format!("modalist_test_invalid_{}", std::process::id()));
    std::fs::create_dir_all(&temp_dir).unwrap();
    let path = temp_dir.join("config.toml");
    std::fs::write(&path, "[ui]\ndialog_width_percent = 0\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join(format!("modalist_test_config_{}", std::process::id()));
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Modalist Configuration File"));
    assert!(content.contains("dialog_width_percent = 60"));
    let lines: Vec<&str> = content.lines().collect();
    for key in ["dialog_width_percent", "dialog_height_percent", "mouse_enabled", "enabled", "level"] {
        let position = lines
            .iter()
            .position(|line| line.starts_with(&format!("{} =", key)))
            .unwrap();
        assert!(lines[position - 1].starts_with("# "), "no comment above {}", key);
    }
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.dialog_height_percent, 20);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

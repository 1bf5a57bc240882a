//! Unit tests for configuration loading.

use racetracker::config::{load_config_from, AppConfig, ConfigError, ThemePreference};
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[race.player_one]
name = "Tortoise"
max_progress = 50
progress_delay_ms = 250

[ui]
theme = "light"
font_scale = 1.25
"#
    )
    .unwrap();

    let config = load_config_from(file.path()).unwrap();
    assert_eq!(config.race.player_one.name, "Tortoise");
    assert_eq!(config.race.player_one.max_progress, 50);
    assert_eq!(config.race.player_one.progress_increment, 1);
    assert_eq!(config.race.player_two.name, "Player 2");
    assert_eq!(config.ui.theme, ThemePreference::Light);
    assert_eq!(config.ui.font_scale, 1.25);

    let (one, _) = config.build_participants().unwrap();
    assert_eq!(one.progress_delay().as_millis(), 250);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[race.player_one\nname = ").unwrap();

    let result = load_config_from(file.path());
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_zero_font_scale_uses_default_zoom() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ui]\nfont_scale = 0.0").unwrap();

    let config = load_config_from(file.path()).unwrap();
    assert_eq!(config.ui.font_scale, 0.0);
    assert_eq!(config.ui.zoom_factor(), 1.0);
}

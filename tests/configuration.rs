//! Tests for configuration loading

use gapchef::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let config = Config::load(Some("config/default.toml".to_string()))?;

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.matching.min_match_threshold, 0.2);
    assert_eq!(config.matching.max_results, 50);
    assert!(config.catalog.path.is_none());
    assert_eq!(config.recognizer.mock_ingredients.len(), 10);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("gapchef.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[catalog]
path = "/srv/gapchef/recipes.json"

[matching]
min_match_threshold = 0.5
max_results = 20

[recognizer]
fallback_ingredients = ["bread"]
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(
        config.catalog.path.as_deref(),
        Some("/srv/gapchef/recipes.json")
    );
    assert_eq!(config.matching.options().min_match, 0.5);
    assert_eq!(config.matching.options().max_results, 20);
    assert_eq!(config.recognizer.fallback_ingredients, vec!["bread"]);
    // Unset lists keep their defaults
    assert_eq!(config.recognizer.mock_ingredients[0], "chicken");

    Ok(())
}

#[test]
fn test_missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("absent.toml");

    let config = Config::load(Some(missing.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.matching.max_results, 50);
    assert_eq!(config.recognizer.fallback_ingredients.len(), 6);

    Ok(())
}

#[test]
fn test_invalid_threshold_fails_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("bad.toml");
    std::fs::write(&path, "[matching]\nmin_match_threshold = 2.0\nmax_results = 50\n")?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(config.validate().is_err());

    Ok(())
}

use std::fs;

use cyclokit_geometry::{Resolution, ShapeType};
use cyclokit_settings::{Config, ConfigError, SettingsError};
use tempfile::TempDir;

fn customized() -> Config {
    let mut config = Config::new();
    config.resolution = Resolution {
        points_per_side: 24,
        points_per_radian: 12.5,
    };
    config.export.precision = 3;
    config.export.simplify_tolerance = Some(0.25);
    config.defaults.shape = ShapeType::Polygon;
    config.defaults.sides = 6;
    config.defaults.radius = 2.5;
    config.defaults.cycles = 1.5;
    config
}

#[test]
fn test_toml_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let config = customized();

    config.save_to_file(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[resolution]"));
    assert!(content.contains("points_per_side = 24"));

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");
    let config = customized();

    config.save_to_file(&path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["defaults"]["shape"], "polygon");
    assert_eq!(value["export"]["simplify_tolerance"], 0.25);

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_unknown_extension_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    let result = Config::new().save_to_file(&path);
    assert!(matches!(
        result,
        Err(SettingsError::Config(ConfigError::UnsupportedFormat(_)))
    ));
    assert!(!path.exists());
}

#[test]
fn test_invalid_file_not_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nsides = 2\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));

    fs::write(&path, "[resolution\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::TomlError(_))
    ));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = Config::load_from_file(&temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(SettingsError::LoadError(_))));
}

#[test]
fn test_configured_generation() {
    let config = customized();
    let shape = std::sync::Arc::new(config.default_shape().unwrap());
    let curve = config
        .generator()
        .generate(&shape, shape.top_point(), config.defaults.cycles)
        .unwrap();
    // 1.5 turns of a hexagon roll nine sides.
    assert_eq!(curve.len(), 9 * 24 + 1);
    assert_eq!(config.export_options().precision, 3);
}

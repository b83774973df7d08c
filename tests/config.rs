use std::path::Path;

use aqua_dosing_toolbox::config::{self, Config};
use aqua_dosing_toolbox::units::{ConcentrationScale, DimensionUnit, WaterVolumeUnit};

#[test]
fn partial_config_fills_defaults() {
    let cfg: Config = toml::from_str(
        r#"
decimals = 3

[default_units]
volume = "UsGallon"
concentration = "dKH"
"#,
    )
    .unwrap();
    assert_eq!(cfg.decimals, 3);
    assert_eq!(cfg.kh_purity, 1.0);
    assert_eq!(cfg.default_units.volume, WaterVolumeUnit::UsGallon);
    assert_eq!(cfg.default_units.dimension, DimensionUnit::Centimeter);
    assert_eq!(cfg.default_units.concentration, ConcentrationScale::Degree);
}

#[test]
fn missing_file_uses_defaults() {
    let cfg = config::load_or_default(Some(Path::new("/nonexistent/dosing.toml"))).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("aqua_dosing_cfg_{}.toml", std::process::id()));
    std::fs::write(&path, "kh_purity = 0.97\n").unwrap();
    let cfg = config::load_or_default(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(cfg.kh_purity, 0.97);
    assert_eq!(cfg.decimals, 2);
}

#[test]
fn malformed_file_is_an_error() {
    let path = std::env::temp_dir().join(format!("aqua_dosing_bad_{}.toml", std::process::id()));
    std::fs::write(&path, "decimals = \"many\"\n").unwrap();
    let result = config::load_from(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(config::ConfigError::Serde(_))));
}

#[test]
fn short_unit_names_are_accepted() {
    let cfg: Config = toml::from_str(
        r#"
[default_units]
volume = "UK"
dimension = "ft"
"#,
    )
    .unwrap();
    assert_eq!(cfg.default_units.volume, WaterVolumeUnit::UkGallon);
    assert_eq!(cfg.default_units.dimension, DimensionUnit::Foot);

    let text = toml::to_string(&Config::default()).unwrap();
    assert!(text.contains("volume = \"L\""));
    assert!(text.contains("dimension = \"cm\""));
}

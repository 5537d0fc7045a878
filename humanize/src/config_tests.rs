use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.style.format, OutputFormat::Pretty);
    assert_eq!(config.style.color, ColorChoice::Auto);
    assert_eq!(config.defaults, libhumanize::Config::default());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[style]"));
    assert!(toml_str.contains("[defaults.time]"));
    assert!(toml_str.contains("day_format = \"%d %b\""));
}

#[test]
fn test_config_deserialization() {
    let toml_str = r#"
[style]
format = "json"
color = "never"

[defaults.size]
units = "binary"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.style.format, OutputFormat::Json);
    assert_eq!(config.style.color, ColorChoice::Never);
    assert_eq!(config.defaults.size.units, UnitSystem::Binary);
    assert_eq!(config.defaults.time.year_threshold_months, 4);
}

#[test]
fn test_config_round_trip_through_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.style.format = OutputFormat::Yaml;
    config.defaults.number.fraction_precision = 0.25;
    config.defaults.time.natural_time = TimeMode::Components;
    config.save(&config_path).unwrap();

    let loaded = Config::load(&config_path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_nonexistent_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = Config::load(&temp_dir.path().join("missing.toml"));
    assert!(result.is_err());
}

#[test]
fn test_config_load_rejects_invalid_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[defaults.time]\nday_format = \"%Q\"\n").unwrap();

    let err = Config::load(&config_path).unwrap_err();
    assert!(err.contains("Invalid config file"));
}

#[test]
fn test_config_save_creates_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("subdir").join("config.toml");

    assert!(Config::default().save(&config_path).is_ok());
    assert!(config_path.exists());
}

#[test]
fn test_init_config_refuses_to_overwrite() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    init_config(&config_path).unwrap();
    assert!(config_path.exists());
    assert!(init_config(&config_path).is_err());
}

#[test]
fn test_get_config_value() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    init_config(&config_path).unwrap();

    assert_eq!(get_config_value(&config_path, "style.format").unwrap(), "pretty");
    assert_eq!(
        get_config_value(&config_path, "defaults.time.date_format").unwrap(),
        "%d %b, %Y"
    );
    assert_eq!(
        get_config_value(&config_path, "defaults.time.year_threshold_months").unwrap(),
        "4"
    );
    assert!(
        get_config_value(&config_path, "defaults.size")
            .unwrap()
            .contains("units = \"decimal\"")
    );
    assert!(get_config_value(&config_path, "style.nope").is_err());
}

#[test]
fn test_set_config_value() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    set_config_value(&config_path, "style.format", "json").unwrap();
    set_config_value(&config_path, "style.color", "never").unwrap();
    set_config_value(&config_path, "defaults.size.units", "binary").unwrap();
    set_config_value(&config_path, "defaults.number.fraction_precision", "0.01").unwrap();
    set_config_value(&config_path, "defaults.time.day_format", "%b %d").unwrap();
    set_config_value(&config_path, "defaults.time.year_threshold_months", "6").unwrap();
    set_config_value(&config_path, "defaults.time.natural_time", "components").unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.style.format, OutputFormat::Json);
    assert_eq!(config.style.color, ColorChoice::Never);
    assert_eq!(config.defaults.size.units, UnitSystem::Binary);
    assert_eq!(config.defaults.number.fraction_precision, 0.01);
    assert_eq!(config.defaults.time.day_format, "%b %d");
    assert_eq!(config.defaults.time.year_threshold_months, 6);
    assert_eq!(config.defaults.time.natural_time, TimeMode::Components);
}

#[test]
fn test_set_config_value_rejects_bad_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    assert!(set_config_value(&config_path, "defaults.size.units", "furlongs").is_err());
    assert!(set_config_value(&config_path, "defaults.number.fraction_precision", "0").is_err());
    assert!(set_config_value(&config_path, "defaults.number.fraction_precision", "x").is_err());
    assert!(set_config_value(&config_path, "defaults.time.date_format", "%Q").is_err());
    assert!(set_config_value(&config_path, "defaults.time.natural_time", "wall").is_err());
    assert!(set_config_value(&config_path, "unknown.key", "1").is_err());

    // Nothing was written
    assert!(!config_path.exists());
}

#[test]
fn test_config_format_pretty() {
    let output = Config::default().format_pretty();
    assert!(output.contains("[style]"));
    assert!(output.contains("format = \"pretty\""));
    assert!(output.contains("color = \"auto\""));
    assert!(output.contains("[defaults.time]"));
    assert!(output.contains("natural_time = \"elapsed\""));
}

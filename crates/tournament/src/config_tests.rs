use super::*;
use std::io::Write;

#[test]
fn test_default_config_is_valid() {
    let config = TournamentConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.regions.len(), 4);
    assert_eq!(
        config.region_path(&config.regions[0]),
        PathBuf::from("datasets/south_region.json")
    );
    assert_eq!(config.matchups_path(), PathBuf::from("datasets/matchups.json"));
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
datasets_dir = "data/2023"
seed = 42

[final_four_bounds]
low = 60
high = 80
"#
    )
    .unwrap();

    let config = TournamentConfig::load(file.path()).unwrap();
    assert_eq!(config.datasets_dir, PathBuf::from("data/2023"));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.final_four_bounds, ScoreBounds { low: 60, high: 80 });
    assert_eq!(config.regional_bounds, ScoreBounds::REGIONAL);
    assert_eq!(config.semifinals.len(), 2);
}

#[test]
fn test_invalid_bounds_rejected() {
    let config = TournamentConfig {
        regional_bounds: ScoreBounds { low: 90, high: 90 },
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(TournamentError::Bracket(_))));
}

#[test]
fn test_semifinal_must_name_configured_regions() {
    let mut config = TournamentConfig::default();
    config.semifinals[1][0] = "northeast".to_string();
    assert!(matches!(config.validate(), Err(TournamentError::Config(_))));

    let mut config = TournamentConfig::default();
    config.semifinals[1] = ["south".to_string(), "west".to_string()];
    assert!(matches!(config.validate(), Err(TournamentError::Config(_))));

    let mut config = TournamentConfig::default();
    config.semifinals.pop();
    assert!(matches!(config.validate(), Err(TournamentError::Config(_))));
}

#[test]
fn test_malformed_toml_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "regions = 7").unwrap();

    let err = TournamentConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, TournamentError::Toml { .. }));
}

#[test]
fn test_overrides_replace_loaded_values() {
    let loaded = TournamentConfig {
        seed: Some(1),
        ..Default::default()
    };

    let config = loaded
        .clone()
        .with_overrides(Some(PathBuf::from("data/2024")), Some(64))
        .unwrap();
    assert_eq!(config.datasets_dir, PathBuf::from("data/2024"));
    assert_eq!(config.seed, Some(64));

    // Absent overrides keep what the file said
    let config = loaded.with_overrides(None, None).unwrap();
    assert_eq!(config.datasets_dir, PathBuf::from("datasets"));
    assert_eq!(config.seed, Some(1));
}

#[test]
fn test_overrides_still_validate() {
    let mut loaded = TournamentConfig::default();
    loaded.semifinals.clear();

    let err = loaded.with_overrides(None, Some(5)).unwrap_err();
    assert!(matches!(err, TournamentError::Config(_)));
}

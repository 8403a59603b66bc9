//! Runs the bundled datasets end to end

use std::path::PathBuf;

use tournament::{quick_tournament, StageKind, TournamentConfig, TournamentData, TournamentResults};

fn bundled_config() -> TournamentConfig {
    TournamentConfig {
        datasets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../datasets"),
        ..Default::default()
    }
}

#[test]
fn test_bundled_datasets_load() {
    let data = TournamentData::load(&bundled_config()).unwrap();

    assert_eq!(data.matchups.len(), 8);
    assert_eq!(data.regions.len(), 4);
    for region in &data.regions {
        assert_eq!(region.teams.len(), 16, "region {}", region.name);
    }

    // Seeds must be unique so final four teams can play under them
    let mut seeds: Vec<_> = data
        .regions
        .iter()
        .flat_map(|r| r.teams.iter().map(|t| t.seed))
        .collect();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), 64);
}

#[test]
fn test_bundled_tournament_crowns_a_known_team() {
    let config = bundled_config();
    let data = TournamentData::load(&config).unwrap();

    for seed in 0..20 {
        let results = quick_tournament(config.clone(), &data, seed).unwrap();
        let champion = results.champion().unwrap();

        assert_eq!(results.total_games(), 63);
        assert!(data
            .regions
            .iter()
            .any(|r| r.teams.iter().any(|t| t.name == champion.name)));
    }
}

#[test]
fn test_results_file_round_trip() {
    let config = bundled_config();
    let data = TournamentData::load(&config).unwrap();
    let results = quick_tournament(config, &data, 68).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("madness.json");
    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();

    let kinds: Vec<_> = loaded.stages.iter().map(|s| s.kind).collect();
    assert_eq!(kinds.iter().filter(|k| **k == StageKind::Region).count(), 4);
    assert_eq!(kinds.iter().filter(|k| **k == StageKind::Semifinal).count(), 2);
    assert_eq!(kinds.last(), Some(&StageKind::Championship));
    assert_eq!(loaded.champion(), results.champion());
}

#[test]
fn test_missing_datasets_dir_fails() {
    let config = TournamentConfig {
        datasets_dir: PathBuf::from("does/not/exist"),
        ..Default::default()
    };
    let err = TournamentData::load(&config).unwrap_err();
    assert!(err.to_string().contains("matchups.json"));
}

#[test]
fn test_bundled_config_matches_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../madness.toml");
    let config = TournamentConfig::load(&path).unwrap();
    assert_eq!(config, TournamentConfig::default());
}

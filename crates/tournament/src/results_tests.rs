use super::*;

fn outcome(champion: Team, loser: &str) -> StageOutcome {
    StageOutcome {
        games: vec![GameRecord {
            round: 1,
            winner: champion.name.clone(),
            loser: loser.to_string(),
            winner_score: 77,
            loser_score: 65,
        }],
        champion,
        rounds: 1,
    }
}

fn sample() -> TournamentResults {
    let mut results = TournamentResults::new("Madness", "2023-03-16 12:00:00", Some(9));
    results.add_stage(
        "south-east",
        StageKind::Semifinal,
        ScoreBounds::FINAL_FOUR,
        outcome(Team::new("Alabama", 1, 1), "Purdue"),
    );
    results.add_stage(
        "final",
        StageKind::Championship,
        ScoreBounds::FINAL_FOUR,
        outcome(Team::new("Alabama", 1, 1), "Houston"),
    );
    results
}

#[test]
fn test_champion_comes_from_championship_stage() {
    let mut results = TournamentResults::new("Madness", "now", None);
    results.add_stage(
        "south",
        StageKind::Region,
        ScoreBounds::REGIONAL,
        outcome(Team::new("Alabama", 1, 1), "Arizona"),
    );
    assert!(results.champion().is_none());

    let results = sample();
    assert_eq!(results.champion().unwrap().name, "Alabama");
    assert_eq!(results.total_games(), 2);
    assert_eq!(results.stage("final").unwrap().games[0].loser, "Houston");
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    let results = sample();

    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();

    assert_eq!(loaded.stages.len(), 2);
    assert_eq!(loaded.seed, Some(9));
    assert_eq!(loaded.stages[1].games, results.stages[1].games);
}

#[test]
fn test_report_lists_stages_and_champion() {
    let report = sample().generate_report();
    assert!(report.contains("=== Tournament: Madness ==="));
    assert!(report.contains("Seed: 9"));
    assert!(report.contains("south-east"));
    assert!(report.contains("41-87"));
    assert!(report.contains("Champion: Alabama (1)"));
}

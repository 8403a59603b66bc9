//! Tournament results storage and reporting

use bracket_core::{GameRecord, ScoreBounds, StageOutcome, Team};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TournamentError};

/// Which part of the tournament a stage belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StageKind {
    Region,
    Semifinal,
    Championship,
}

/// One bracket played to completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageResult {
    /// Region name, or the joined region names for final four games
    pub label: String,
    pub kind: StageKind,
    pub bounds: ScoreBounds,
    pub games: Vec<GameRecord>,
    pub champion: Team,
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    /// Local start time, `YYYY-MM-DD HH:MM:SS`
    pub started_at: String,
    /// RNG seed, when the run was seeded explicitly
    pub seed: Option<u64>,
    /// Stages in the order they were played
    pub stages: Vec<StageResult>,
}

impl TournamentResults {
    pub fn new(name: &str, started_at: &str, seed: Option<u64>) -> Self {
        Self {
            name: name.to_string(),
            started_at: started_at.to_string(),
            seed,
            stages: Vec::new(),
        }
    }

    /// Record a finished stage
    pub fn add_stage(
        &mut self,
        label: &str,
        kind: StageKind,
        bounds: ScoreBounds,
        outcome: StageOutcome,
    ) {
        self.stages.push(StageResult {
            label: label.to_string(),
            kind,
            bounds,
            games: outcome.games,
            champion: outcome.champion,
        });
    }

    /// Winner of the championship, once it has been played
    pub fn champion(&self) -> Option<&Team> {
        self.stages
            .iter()
            .rev()
            .find(|s| s.kind == StageKind::Championship)
            .map(|s| &s.champion)
    }

    pub fn stage(&self, label: &str) -> Option<&StageResult> {
        self.stages.iter().find(|s| s.label == label)
    }

    pub fn total_games(&self) -> usize {
        self.stages.iter().map(|s| s.games.len()).sum()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| TournamentError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| TournamentError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Started: {}\n", self.started_at));
        if let Some(seed) = self.seed {
            report.push_str(&format!("Seed: {}\n", seed));
        }
        report.push_str(&format!("Games played: {}\n\n", self.total_games()));

        report.push_str(&format!(
            "{:<16} {:<14} {:>7} {:>6}  {}\n",
            "Stage", "Kind", "Bounds", "Games", "Champion"
        ));
        report.push_str(&"-".repeat(70));
        report.push('\n');

        for stage in &self.stages {
            report.push_str(&format!(
                "{:<16} {:<14} {:>7} {:>6}  {}\n",
                stage.label,
                format!("{:?}", stage.kind),
                format!("{}-{}", stage.bounds.low, stage.bounds.high),
                stage.games.len(),
                stage.champion
            ));
        }

        if let Some(champion) = self.champion() {
            report.push_str(&format!("\nChampion: {}\n", champion));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

//! Tournament configuration, loaded from TOML

use bracket_core::ScoreBounds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TournamentError};

/// One regional bracket and the file its teams are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: String,
    /// Path relative to `datasets_dir`
    pub file: String,
}

impl RegionConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            file: format!("{}_region.json", name),
        }
    }
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Directory holding the matchups and region files
    pub datasets_dir: PathBuf,
    /// First-round matchups shared by every region
    pub matchups_file: String,
    /// Regions in the order they are played
    pub regions: Vec<RegionConfig>,
    /// Pairs of region names meeting in the semifinals
    pub semifinals: Vec<[String; 2]>,
    pub regional_bounds: ScoreBounds,
    pub final_four_bounds: ScoreBounds,
    /// Fixed RNG seed (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            datasets_dir: PathBuf::from("datasets"),
            matchups_file: "matchups.json".to_string(),
            regions: ["south", "east", "west", "midwest"]
                .into_iter()
                .map(RegionConfig::new)
                .collect(),
            semifinals: vec![
                ["south".to_string(), "east".to_string()],
                ["midwest".to_string(), "west".to_string()],
            ],
            regional_bounds: ScoreBounds::REGIONAL,
            final_four_bounds: ScoreBounds::FINAL_FOUR,
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| TournamentError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values, then validate.
    pub fn with_overrides(
        mut self,
        datasets_dir: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Result<Self> {
        if let Some(dir) = datasets_dir {
            self.datasets_dir = dir;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.regional_bounds.validate()?;
        self.final_four_bounds.validate()?;

        if self.semifinals.len() != 2 {
            return Err(TournamentError::Config(format!(
                "expected 2 semifinals, found {}",
                self.semifinals.len()
            )));
        }

        let mut used: Vec<&str> = Vec::with_capacity(4);
        for name in self.semifinals.iter().flatten() {
            if self.region(name).is_none() {
                return Err(TournamentError::Config(format!(
                    "semifinal region {} is not configured",
                    name
                )));
            }
            if used.contains(&name.as_str()) {
                return Err(TournamentError::Config(format!(
                    "region {} plays in more than one semifinal slot",
                    name
                )));
            }
            used.push(name.as_str());
        }
        Ok(())
    }

    pub fn region(&self, name: &str) -> Option<&RegionConfig> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn matchups_path(&self) -> PathBuf {
        self.datasets_dir.join(&self.matchups_file)
    }

    pub fn region_path(&self, region: &RegionConfig) -> PathBuf {
        self.datasets_dir.join(&region.file)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

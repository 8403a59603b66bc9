//! Team and matchup data files

use bracket_core::{Matchup, Rank, Team};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::config::TournamentConfig;
use crate::error::{Result, TournamentError};

/// A first-round matchup as stored in `matchups.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    #[serde(default)]
    pub matchup_id: u32,
    pub team1_rank: Rank,
    pub team2_rank: Option<Rank>,
}

impl From<&MatchupEntry> for Matchup {
    fn from(entry: &MatchupEntry) -> Self {
        Matchup {
            team1_rank: entry.team1_rank,
            team2_rank: entry.team2_rank,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MatchupsFile {
    matchups: Vec<MatchupEntry>,
}

#[derive(Debug, Deserialize)]
struct RegionFile {
    teams: Vec<Team>,
}

/// A region's name and its teams
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub teams: Vec<Team>,
}

/// Everything needed to run a full tournament
#[derive(Debug, Clone)]
pub struct TournamentData {
    pub matchups: Vec<Matchup>,
    /// Regions in play order
    pub regions: Vec<Region>,
}

impl TournamentData {
    /// Read the matchups file and every configured region file
    pub fn load(config: &TournamentConfig) -> Result<Self> {
        let matchups = load_matchups(&config.matchups_path())?;
        let regions = config
            .regions
            .iter()
            .map(|region| {
                Ok(Region {
                    name: region.name.clone(),
                    teams: load_teams(&config.region_path(region))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { matchups, regions })
    }
}

pub fn load_matchups(path: &Path) -> Result<Vec<Matchup>> {
    let file: MatchupsFile = load_json(path)?;
    debug!(path = %path.display(), count = file.matchups.len(), "loaded matchups");
    Ok(file.matchups.iter().map(Matchup::from).collect())
}

pub fn load_teams(path: &Path) -> Result<Vec<Team>> {
    let file: RegionFile = load_json(path)?;
    debug!(path = %path.display(), count = file.teams.len(), "loaded teams");
    Ok(file.teams)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| TournamentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

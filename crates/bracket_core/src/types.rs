use serde::{Deserialize, Serialize};
use std::fmt;

/// Region-local ordinal of a team. Only unique within one bracket stage.
pub type Rank = u32;

/// A team entered in the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Position within the current stage's bracket
    pub rank: Rank,
    /// Overall tournament ranking, unique across regions
    pub seed: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, rank: Rank, seed: u32) -> Self {
        Self {
            name: name.into(),
            rank,
            seed,
        }
    }

    /// Replace the region-local rank with the overall seed so the team can
    /// meet teams from other regions without rank collisions.
    pub fn promote(&mut self) {
        self.rank = self.seed;
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.seed)
    }
}

/// A pairing of two ranks. `team2_rank` is `None` only for the terminal
/// entry holding the champion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub team1_rank: Rank,
    pub team2_rank: Option<Rank>,
}

impl Matchup {
    pub fn new(team1_rank: Rank, team2_rank: Rank) -> Self {
        Self {
            team1_rank,
            team2_rank: Some(team2_rank),
        }
    }

    pub fn terminal(champion_rank: Rank) -> Self {
        Self {
            team1_rank: champion_rank,
            team2_rank: None,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.team2_rank.is_none()
    }
}

/// Result of a single game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based round within the stage
    pub round: u32,
    pub winner: String,
    pub loser: String,
    pub winner_score: u32,
    pub loser_score: u32,
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} defeats {} with a score of {} to {}",
            self.winner, self.loser, self.winner_score, self.loser_score
        )
    }
}

use thiserror::Error;

use crate::types::Rank;

/// Errors raised while setting up or running a bracket
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("Invalid score bounds: low {low} must be below high {high}")]
    InvalidBounds { low: u32, high: u32 },

    #[error("Bracket has no matchups")]
    EmptyBracket,

    #[error("Bracket has {0} matchups, expected a power of two")]
    UnevenBracket(usize),

    #[error("Rank {0} appears more than once in the bracket")]
    DuplicateRank(Rank),

    #[error("Matchup for rank {rank} has no opponent in round {round}")]
    MissingOpponent { rank: Rank, round: u32 },

    #[error("No team with rank {0}")]
    UnknownRank(Rank),
}

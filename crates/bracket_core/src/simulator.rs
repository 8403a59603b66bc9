//! Round-by-round advancement of a single-elimination bracket

use std::collections::HashSet;

use tracing::debug;

use crate::error::BracketError;
use crate::types::{GameRecord, Matchup, Rank, Team};
use crate::GameModel;

/// Configuration for a bracket simulation
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Print each game result to stdout as it is played
    pub verbose: bool,
}

/// Everything produced by one bracket simulation
#[derive(Debug, Clone)]
pub struct StageOutcome {
    pub champion: Team,
    /// Games in the order they were played
    pub games: Vec<GameRecord>,
    /// Number of rounds in which games were played
    pub rounds: u32,
}

/// Runs single-elimination brackets
pub struct BracketSimulator {
    config: SimulationConfig,
}

impl BracketSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Play `matchups` down to a single champion.
    ///
    /// Each round's winners are paired in bracket order: the winners of
    /// matchups 0 and 1 meet next, then 2 and 3, and so on. Scores come from
    /// `model`; a tied score goes to the second team.
    pub fn simulate(
        &self,
        model: &mut dyn GameModel,
        teams: &[Team],
        matchups: &[Matchup],
    ) -> Result<StageOutcome, BracketError> {
        validate_bracket(matchups)?;

        let mut bracket = matchups.to_vec();
        let mut games = Vec::with_capacity(2 * matchups.len());
        let mut round = 0;

        loop {
            if let [final_entry] = bracket.as_slice() {
                if final_entry.is_terminal() {
                    let champion = find_team(teams, final_entry.team1_rank)?.clone();
                    debug!(champion = %champion.name, rounds = round, "bracket decided");
                    return Ok(StageOutcome {
                        champion,
                        games,
                        rounds: round,
                    });
                }
            }

            round += 1;
            debug!(round, matchups = bracket.len(), model = model.name(), "playing round");

            let mut winners: Vec<Rank> = Vec::with_capacity(bracket.len());
            for matchup in &bracket {
                let team2_rank = matchup.team2_rank.ok_or(BracketError::MissingOpponent {
                    rank: matchup.team1_rank,
                    round,
                })?;
                let team1 = find_team(teams, matchup.team1_rank)?;
                let team2 = find_team(teams, team2_rank)?;

                let (team1_score, team2_score) = model.play(team1, team2);
                let (winner, loser, winner_score, loser_score) = if team1_score > team2_score {
                    (team1, team2, team1_score, team2_score)
                } else {
                    (team2, team1, team2_score, team1_score)
                };

                let record = GameRecord {
                    round,
                    winner: winner.name.clone(),
                    loser: loser.name.clone(),
                    winner_score,
                    loser_score,
                };
                if self.config.verbose {
                    println!("{}", record);
                }
                debug!(round, %record, "game played");

                winners.push(winner.rank);
                games.push(record);
            }

            bracket = match winners.as_slice() {
                [champion] => vec![Matchup::terminal(*champion)],
                _ => winners
                    .chunks_exact(2)
                    .map(|pair| Matchup::new(pair[0], pair[1]))
                    .collect(),
            };
        }
    }
}

/// Quick utility to play a bracket without printing
pub fn simulate_tournament(
    model: &mut dyn GameModel,
    teams: &[Team],
    matchups: &[Matchup],
) -> Result<StageOutcome, BracketError> {
    BracketSimulator::new(SimulationConfig { verbose: false }).simulate(model, teams, matchups)
}

/// First team carrying `rank`.
pub fn find_team(teams: &[Team], rank: Rank) -> Result<&Team, BracketError> {
    teams
        .iter()
        .find(|team| team.rank == rank)
        .ok_or(BracketError::UnknownRank(rank))
}

fn validate_bracket(matchups: &[Matchup]) -> Result<(), BracketError> {
    if matchups.is_empty() {
        return Err(BracketError::EmptyBracket);
    }
    if !matchups.len().is_power_of_two() {
        return Err(BracketError::UnevenBracket(matchups.len()));
    }

    let mut seen = HashSet::with_capacity(2 * matchups.len());
    for rank in matchups
        .iter()
        .flat_map(|m| std::iter::once(m.team1_rank).chain(m.team2_rank))
    {
        if !seen.insert(rank) {
            return Err(BracketError::DuplicateRank(rank));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;

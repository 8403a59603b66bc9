//! Random score generation for simulated games.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BracketError;
use crate::types::Team;
use crate::GameModel;

/// Inclusive range that simulated scores are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub low: u32,
    pub high: u32,
}

impl ScoreBounds {
    /// Bounds used for regional games
    pub const REGIONAL: ScoreBounds = ScoreBounds { low: 50, high: 98 };
    /// Bounds used for the semifinals and the championship
    pub const FINAL_FOUR: ScoreBounds = ScoreBounds { low: 41, high: 87 };

    pub fn new(low: u32, high: u32) -> Result<Self, BracketError> {
        let bounds = Self { low, high };
        bounds.validate()?;
        Ok(bounds)
    }

    /// A tie-free draw needs at least two distinct values.
    pub fn validate(&self) -> Result<(), BracketError> {
        if self.low >= self.high {
            return Err(BracketError::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self::REGIONAL
    }
}

/// Draw two scores uniformly from `bounds`, redrawing both until they differ.
pub fn simulate_game<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: ScoreBounds,
) -> Result<(u32, u32), BracketError> {
    bounds.validate()?;
    Ok(draw_scores(rng, bounds))
}

// `bounds` must already be validated, otherwise this never returns.
fn draw_scores<R: Rng + ?Sized>(rng: &mut R, bounds: ScoreBounds) -> (u32, u32) {
    loop {
        let team1_score = rng.gen_range(bounds.low..=bounds.high);
        let team2_score = rng.gen_range(bounds.low..=bounds.high);
        if team1_score != team2_score {
            return (team1_score, team2_score);
        }
    }
}

/// Game model where both teams score uniformly at random, ignoring who they are.
#[derive(Debug)]
pub struct UniformScores<R> {
    rng: R,
    bounds: ScoreBounds,
}

impl<R: Rng> UniformScores<R> {
    pub fn new(rng: R, bounds: ScoreBounds) -> Result<Self, BracketError> {
        bounds.validate()?;
        Ok(Self { rng, bounds })
    }
}

impl<R: Rng> GameModel for UniformScores<R> {
    fn play(&mut self, _team1: &Team, _team2: &Team) -> (u32, u32) {
        draw_scores(&mut self.rng, self.bounds)
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;

//! Runs the regional brackets and the final four

use bracket_core::{
    BracketSimulator, Matchup, ScoreBounds, SimulationConfig, StageOutcome, Team, UniformScores,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::TournamentConfig;
use crate::data::TournamentData;
use crate::error::{Result, TournamentError};
use crate::results::{StageKind, TournamentResults};

/// Label of the championship stage
pub const CHAMPIONSHIP: &str = "final";

/// Runs a full tournament: every region, then semifinals and championship
pub struct TournamentRunner {
    config: TournamentConfig,
    simulator: BracketSimulator,
    /// Print games and champions during the run
    verbose: bool,
}

impl TournamentRunner {
    pub fn new(config: TournamentConfig, verbose: bool) -> Self {
        Self {
            config,
            simulator: BracketSimulator::new(SimulationConfig { verbose }),
            verbose,
        }
    }

    /// Run every stage in order, drawing all scores from `rng`
    pub fn run<R: Rng>(
        &self,
        data: &TournamentData,
        rng: &mut R,
        started_at: &str,
    ) -> Result<TournamentResults> {
        self.config.validate()?;

        let mut results = TournamentResults::new("Madness", started_at, self.config.seed);
        let mut region_champions: Vec<(&str, Team)> = Vec::with_capacity(data.regions.len());

        for region in &data.regions {
            info!(region = %region.name, teams = region.teams.len(), "simulating region");
            let bounds = self.config.regional_bounds;
            let outcome = self.play_stage(rng, bounds, &region.teams, &data.matchups)?;

            self.announce(&format!(
                "The {} region champion is: {}\n",
                region.name, outcome.champion.name
            ));
            region_champions.push((region.name.as_str(), outcome.champion.clone()));
            results.add_stage(&region.name, StageKind::Region, bounds, outcome);
        }

        let mut finalists = Vec::with_capacity(self.config.semifinals.len());
        for [first, second] in &self.config.semifinals {
            let team1 = champion_of(&region_champions, first)?;
            let team2 = champion_of(&region_champions, second)?;
            let label = format!("{}-{}", first, second);

            info!(stage = %label, "simulating semifinal");
            let outcome = self.play_head_to_head(rng, team1, team2)?;

            self.announce(&format!(
                "The {} region champion is: {}\n",
                label, outcome.champion.name
            ));
            finalists.push(outcome.champion.clone());
            results.add_stage(
                &label,
                StageKind::Semifinal,
                self.config.final_four_bounds,
                outcome,
            );
        }

        let (team1, team2) = match finalists.as_slice() {
            [team1, team2] => (team1, team2),
            other => {
                return Err(TournamentError::Config(format!(
                    "championship needs 2 finalists, found {}",
                    other.len()
                )))
            }
        };

        info!("simulating championship");
        let outcome = self.play_head_to_head(rng, team1, team2)?;

        self.announce(&format!("The final champion is: {}", outcome.champion.name));
        info!(champion = %outcome.champion.name, "tournament decided");
        results.add_stage(
            CHAMPIONSHIP,
            StageKind::Championship,
            self.config.final_four_bounds,
            outcome,
        );

        Ok(results)
    }

    /// Single game between teams from different regions.
    ///
    /// Region ranks collide across regions, so both teams play under their
    /// overall seed.
    fn play_head_to_head<R: Rng>(
        &self,
        rng: &mut R,
        team1: &Team,
        team2: &Team,
    ) -> Result<StageOutcome> {
        let mut teams = vec![team1.clone(), team2.clone()];
        teams.iter_mut().for_each(Team::promote);
        let matchups = [Matchup::new(teams[0].rank, teams[1].rank)];

        self.play_stage(rng, self.config.final_four_bounds, &teams, &matchups)
    }

    fn play_stage<R: Rng>(
        &self,
        rng: &mut R,
        bounds: ScoreBounds,
        teams: &[Team],
        matchups: &[Matchup],
    ) -> Result<StageOutcome> {
        let mut model = UniformScores::new(&mut *rng, bounds)?;
        Ok(self.simulator.simulate(&mut model, teams, matchups)?)
    }

    fn announce(&self, line: &str) {
        if self.verbose {
            println!("\n{}", line);
        }
    }
}

fn champion_of<'a>(champions: &'a [(&str, Team)], region: &str) -> Result<&'a Team> {
    champions
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, team)| team)
        .ok_or_else(|| TournamentError::MissingRegion(region.to_string()))
}

/// RNG for a run: fixed when `seed` is given, from OS entropy otherwise
pub fn tournament_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Quick utility to run a whole tournament without printing
pub fn quick_tournament(
    config: TournamentConfig,
    data: &TournamentData,
    seed: u64,
) -> Result<TournamentResults> {
    let config = TournamentConfig {
        seed: Some(seed),
        ..config
    };
    let mut rng = tournament_rng(config.seed);
    TournamentRunner::new(config, false).run(data, &mut rng, "")
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;

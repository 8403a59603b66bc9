pub mod error;
pub mod score;
pub mod simulator;
pub mod types;

pub use error::BracketError;
pub use score::*;
pub use simulator::*;
pub use types::*;

// =============================================================================
// GameModel trait — decides the score of every simulated game
// =============================================================================

/// Produces the final score of a game between two teams.
///
/// The bracket simulator only compares the two scores, so a model may use the
/// teams' seeds or ignore them entirely.
pub trait GameModel {
    /// Score of `team1` and `team2`, in that order
    fn play(&mut self, team1: &Team, team2: &Team) -> (u32, u32);

    /// Short name for logs
    fn name(&self) -> &str;
}

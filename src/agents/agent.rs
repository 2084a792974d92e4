use crate::game::{Grid, Player};

/// Result of a finished game, from one agent's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Won,
    Lost,
    Draw,
}

/// Universal interface for move-selection policies.
///
/// An agent sees only the public read-only views of the game: the latest grid
/// snapshot, the columns currently open, and the color it plays. It must
/// return a column from `valid_moves`; returning anything else forfeits the
/// game on the spot, the engine does not re-validate on the agent's behalf.
pub trait Agent {
    /// Select a column given the current configuration.
    fn choose_move(&mut self, grid: &Grid, valid_moves: &[usize], player: Player) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Called once when a game the agent took part in ends.
    fn notify_result(&mut self, _result: MatchResult, _final_grid: &Grid) {}
}

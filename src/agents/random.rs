use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::{Grid, Player};

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and seeded tournaments
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, _grid: &Grid, valid_moves: &[usize], _player: Player) -> usize {
        assert!(!valid_moves.is_empty(), "no valid moves available");
        valid_moves[self.rng.random_range(0..valid_moves.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

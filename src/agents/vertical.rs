use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::{Grid, Player, COLS};

/// Stacks pieces in one preferred column until it fills up, then picks a new
/// one at random. The preference is per-instance state chosen at
/// construction, so independent games never share it.
pub struct VerticalAgent {
    preferred: usize,
    rng: StdRng,
}

impl VerticalAgent {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let preferred = rng.random_range(0..COLS);
        VerticalAgent { preferred, rng }
    }
}

impl Default for VerticalAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for VerticalAgent {
    fn choose_move(&mut self, _grid: &Grid, valid_moves: &[usize], _player: Player) -> usize {
        assert!(!valid_moves.is_empty(), "no valid moves available");
        while !valid_moves.contains(&self.preferred) {
            self.preferred = self.rng.random_range(0..COLS);
        }
        self.preferred
    }

    fn name(&self) -> &str {
        "Vertical"
    }
}

//! Round-robin demo loop: pits randomly paired agents from a pool against
//! each other and keeps running win-rate statistics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::agents::{Agent, MatchResult};
use crate::config::TournamentConfig;
use crate::game::{Game, GameOutcome, Grid, Player};

/// Result of one finished game, for display by the caller.
#[derive(Debug)]
pub struct GameSummary {
    /// Pool indices of the two contestants, in (Player A, Player B) order
    pub pairing: (usize, usize),
    pub outcome: GameOutcome,
    pub final_grid: Grid,
    pub moves: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
struct GameRecord {
    pairing: (usize, usize),
    winner: Option<usize>,
}

/// Win-rate statistics for one pool agent.
#[derive(Debug, Clone)]
pub struct AgentStanding {
    pub name: String,
    pub played: usize,
    pub won: usize,
    pub recent_played: usize,
    pub recent_won: usize,
}

impl AgentStanding {
    pub fn win_rate(&self) -> f64 {
        rate(self.won, self.played)
    }

    pub fn recent_win_rate(&self) -> f64 {
        rate(self.recent_won, self.recent_played)
    }
}

fn rate(won: usize, played: usize) -> f64 {
    if played == 0 {
        0.0
    } else {
        won as f64 / played as f64
    }
}

/// Game-by-game history with a sliding recent window.
#[derive(Debug)]
pub struct Scoreboard {
    records: Vec<GameRecord>,
    recent_window: usize,
}

impl Scoreboard {
    fn new(recent_window: usize) -> Self {
        Scoreboard {
            records: Vec::new(),
            recent_window,
        }
    }

    fn record(&mut self, pairing: (usize, usize), winner: Option<usize>) {
        self.records.push(GameRecord { pairing, winner });
    }

    pub fn games_played(&self) -> usize {
        self.records.len()
    }

    fn standing_for(&self, idx: usize, name: &str) -> AgentStanding {
        let participated =
            |r: &GameRecord| r.pairing.0 == idx || r.pairing.1 == idx;
        let recent_start = self.records.len().saturating_sub(self.recent_window);

        let mut standing = AgentStanding {
            name: name.to_owned(),
            played: 0,
            won: 0,
            recent_played: 0,
            recent_won: 0,
        };
        for (i, record) in self.records.iter().enumerate() {
            if !participated(record) {
                continue;
            }
            standing.played += 1;
            let won = record.winner == Some(idx);
            if won {
                standing.won += 1;
            }
            if i >= recent_start {
                standing.recent_played += 1;
                if won {
                    standing.recent_won += 1;
                }
            }
        }
        standing
    }
}

/// Runs games between randomly drawn pool agents, one call per game.
pub struct Tournament {
    pool: Vec<Box<dyn Agent>>,
    rng: StdRng,
    scoreboard: Scoreboard,
}

impl Tournament {
    /// Build a tournament over a pool of at least two agents. A configured
    /// seed makes pairings, starting players, and any seeded agents in the
    /// pool fully reproducible.
    pub fn new(pool: Vec<Box<dyn Agent>>, config: &TournamentConfig) -> Self {
        assert!(pool.len() >= 2, "a tournament needs at least two agents");
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Tournament {
            pool,
            rng,
            scoreboard: Scoreboard::new(config.recent_window),
        }
    }

    pub fn agent_names(&self) -> Vec<String> {
        self.pool.iter().map(|a| a.name().to_owned()).collect()
    }

    /// Play one game between two distinct agents drawn at random.
    pub fn play_game(&mut self) -> GameSummary {
        let first = self.rng.random_range(0..self.pool.len());
        let second = loop {
            let candidate = self.rng.random_range(0..self.pool.len());
            if candidate != first {
                break candidate;
            }
        };

        let starter = if self.rng.random_bool(0.5) {
            Player::A
        } else {
            Player::B
        };
        let mut game = Game::with_starting_player(starter);

        while !game.is_terminal() {
            let mover = game.current_player();
            let idx = match mover {
                Player::A => first,
                Player::B => second,
            };
            let grid = *game.latest_configuration();
            let valid = game.valid_moves();
            let col = self.pool[idx].choose_move(&grid, &valid, mover);
            game.insert(col);
        }

        let outcome = game
            .outcome()
            .unwrap_or_else(|| unreachable!("terminal game always has an outcome"));
        let final_grid = *game.latest_configuration();
        let winner_idx = outcome.winner().map(|p| match p {
            Player::A => first,
            Player::B => second,
        });

        for idx in [first, second] {
            let result = match winner_idx {
                None => MatchResult::Draw,
                Some(w) if w == idx => MatchResult::Won,
                Some(_) => MatchResult::Lost,
            };
            self.pool[idx].notify_result(result, &final_grid);
        }

        self.scoreboard.record((first, second), winner_idx);
        match winner_idx {
            Some(w) => info!(
                winner = self.pool[w].name(),
                loser = self.pool[if w == first { second } else { first }].name(),
                plies = game.turn(),
                "game finished"
            ),
            None => info!(
                a = self.pool[first].name(),
                b = self.pool[second].name(),
                "game drawn"
            ),
        }

        GameSummary {
            pairing: (first, second),
            outcome,
            final_grid,
            moves: game.moves().to_vec(),
        }
    }

    /// Current standings for every pool agent, in pool order.
    pub fn standings(&self) -> Vec<AgentStanding> {
        self.pool
            .iter()
            .enumerate()
            .map(|(idx, agent)| self.scoreboard.standing_for(idx, agent.name()))
            .collect()
    }
}

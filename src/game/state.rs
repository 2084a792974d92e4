use rand::Rng;
use tracing::warn;

use super::{Board, Grid, Player};

/// How a finished game ended. Forfeit records the *winner*: the player whose
/// opponent attempted an illegal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Forfeit(Player),
    Draw,
}

impl GameOutcome {
    /// The winning player, if the game was not drawn
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Winner(p) | GameOutcome::Forfeit(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// One full game: turn sequencing, move and snapshot history, and terminal
/// state detection, layered on a [`Board`].
///
/// Rule violations never surface as errors here. An illegal move ends the
/// game in the opponent's favor, and inserting after the game is over is a
/// logged no-op.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    starting_player: Player,
    random_start: bool,
    current_player: Player,
    turn: usize,
    moves: Vec<usize>,
    snapshots: Vec<Grid>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game with a uniformly random starting player
    pub fn new() -> Self {
        let starter = if rand::rng().random_bool(0.5) {
            Player::A
        } else {
            Player::B
        };
        let mut game = Self::with_starting_player(starter);
        game.random_start = true;
        game
    }

    /// Start a game with an explicit starting player
    pub fn with_starting_player(starting_player: Player) -> Self {
        Game {
            board: Board::new(),
            starting_player,
            random_start: false,
            current_player: starting_player,
            turn: 0,
            moves: Vec::new(),
            snapshots: vec![Grid::empty()],
            outcome: None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Columns played (or attempted) so far, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// One grid per ply, starting with the initial empty grid
    pub fn snapshots(&self) -> &[Grid] {
        &self.snapshots
    }

    /// The most recent grid snapshot
    pub fn latest_configuration(&self) -> &Grid {
        self.snapshots
            .last()
            .unwrap_or_else(|| unreachable!("snapshot history always holds the initial grid"))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns the current player may legally choose, ascending
    pub fn valid_moves(&self) -> Vec<usize> {
        self.board.valid_moves()
    }

    /// Play one ply in the given column for the current player.
    ///
    /// Returns the latest grid snapshot and whether the game is now over.
    /// An illegal column forfeits the game to the opponent; the rejected
    /// attempt is kept in the move history, but the final configuration
    /// stays the last valid grid (no snapshot is taken for the attempt).
    pub fn insert(&mut self, col: usize) -> (Grid, bool) {
        if self.is_terminal() {
            warn!(col, "insert ignored: the game is over");
            return (*self.latest_configuration(), true);
        }

        self.moves.push(col);
        match self.board.drop(col, self.current_player) {
            Ok(grid) => {
                self.snapshots.push(grid);
                self.turn += 1;
                let mover = self.current_player;
                self.current_player = mover.other();

                if let Some(winner) = grid.winner() {
                    self.outcome = Some(GameOutcome::Winner(winner));
                } else if grid.is_full() {
                    self.outcome = Some(GameOutcome::Draw);
                }
            }
            Err(err) => {
                let winner = self.current_player.other();
                warn!(%err, forfeiting = self.current_player.name(), "illegal move forfeits the game");
                self.outcome = Some(GameOutcome::Forfeit(winner));
            }
        }

        (*self.latest_configuration(), self.is_terminal())
    }

    /// Discard the board and all history and start over. Games created with
    /// a random starting player draw a fresh one; games created with an
    /// explicit starting player keep it.
    pub fn reset(&mut self) {
        let replacement = if self.random_start {
            Game::new()
        } else {
            Game::with_starting_player(self.starting_player)
        };
        *self = replacement;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

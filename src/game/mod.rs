//! Core game logic: grid and board representation, player types, win
//! detection, and the turn-loop state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Grid, COLS, ROWS};
pub use player::Player;
pub use state::{Game, GameOutcome};

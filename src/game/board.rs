use std::fmt;

use crate::error::MoveError;
use crate::game::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// Signed projection used by the run-detection scan: empty cells are
    /// neutral, the two players pull a window sum in opposite directions.
    fn signum(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerA => 1,
            Cell::PlayerB => -1,
        }
    }
}

/// A full snapshot of the playing field. Row 0 is the top, row 5 the bottom.
///
/// `Grid` is a plain value: the turn loop stores one copy per ply, and win
/// detection runs on any snapshot, live or historical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    pub fn empty() -> Self {
        Grid {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of occupied cells in a column
    pub fn column_occupancy(&self, col: usize) -> usize {
        (0..ROWS).filter(|&row| self.cells[row][col] != Cell::Empty).count()
    }

    /// Total number of occupied cells
    pub fn occupied(&self) -> usize {
        (0..COLS).map(|col| self.column_occupancy(col)).sum()
    }

    /// Check if all 42 cells are occupied
    pub fn is_full(&self) -> bool {
        self.occupied() == ROWS * COLS
    }

    /// Scan the whole grid for a run of four and report its owner.
    ///
    /// Pure over the snapshot: every row, every column, and every diagonal of
    /// length >= 4 in both diagonal families is swept with a length-4 window;
    /// a window summing to +/-4 means four consecutive cells of one player.
    /// If runs for both players coexist (only possible on hand-built grids,
    /// never through legal play), whichever the scan reaches first is
    /// reported; no priority order is defined.
    pub fn winner(&self) -> Option<Player> {
        for row in 0..ROWS {
            if let Some(p) = scan_line((0..COLS).map(|col| self.cells[row][col])) {
                return Some(p);
            }
        }

        for col in 0..COLS {
            if let Some(p) = scan_line((0..ROWS).map(|row| self.cells[row][col])) {
                return Some(p);
            }
        }

        // Diagonal offsets -2..=3 cover every diagonal of length >= 4 on a
        // 6x7 grid, in both families.
        for offset in -2i32..=3 {
            let down_right = (0..ROWS as i32).filter_map(|row| {
                let col = row + offset;
                (0..COLS as i32)
                    .contains(&col)
                    .then(|| self.cells[row as usize][col as usize])
            });
            if let Some(p) = scan_line(down_right) {
                return Some(p);
            }

            let down_left = (0..ROWS as i32).filter_map(|row| {
                let col = COLS as i32 - 1 - (row + offset);
                (0..COLS as i32)
                    .contains(&col)
                    .then(|| self.cells[row as usize][col as usize])
            });
            if let Some(p) = scan_line(down_left) {
                return Some(p);
            }
        }

        None
    }
}

/// Slide a length-4 window along one line of cells. Values are in {-1, 0, +1},
/// so a sum of +/-4 can only come from four same-player cells.
fn scan_line(cells: impl Iterator<Item = Cell>) -> Option<Player> {
    let line: Vec<i8> = cells.map(Cell::signum).collect();
    line.windows(4).find_map(|w| match w.iter().sum::<i8>() {
        4 => Some(Player::A),
        -4 => Some(Player::B),
        _ => None,
    })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                let glyph = match cell {
                    Cell::PlayerA => 'o',
                    Cell::PlayerB => 'x',
                    Cell::Empty => ' ',
                };
                write!(f, " {glyph} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The live playing field. Owns one [`Grid`] and mutates it only through
/// [`Board::drop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board { grid: Grid::empty() }
    }

    /// Copy of the current grid
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// True iff the column index is in range and the column has room.
    /// Never errors; out-of-range input just reports false.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.grid.cells[0][col] == Cell::Empty
    }

    /// Columns currently accepting a piece, in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Drop a piece in a column. The piece settles in the lowest empty cell.
    /// Fails without mutating when the column is out of range or full, and
    /// returns a copy of the resulting grid on success.
    pub fn drop(&mut self, col: usize, player: Player) -> Result<Grid, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        for row in (0..ROWS).rev() {
            if self.grid.cells[row][col] == Cell::Empty {
                self.grid.cells[row][col] = player.to_cell();
                return Ok(self.grid);
            }
        }

        Err(MoveError::ColumnFull(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.grid().get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.grid().winner(), None);
    }

    #[test]
    fn test_drop_settles_at_bottom() {
        let mut board = Board::new();

        let grid = board.drop(3, Player::A).unwrap();
        assert_eq!(grid.get(5, 3), Cell::PlayerA);

        let grid = board.drop(3, Player::B).unwrap();
        assert_eq!(grid.get(4, 3), Cell::PlayerB);
        assert_eq!(grid.column_occupancy(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop(0, Player::A).unwrap();
        }

        assert!(!board.is_valid_move(0));
        let before = board.grid();
        assert_eq!(board.drop(0, Player::B), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.grid(), before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop(7, Player::A), Err(MoveError::InvalidColumn(7)));
        assert!(!board.is_valid_move(7));
        assert!(!board.is_valid_move(usize::MAX));
    }

    #[test]
    fn test_valid_moves_ascending() {
        let mut board = Board::new();
        assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);

        for _ in 0..ROWS {
            board.drop(2, Player::A).unwrap();
        }
        assert_eq!(board.valid_moves(), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_horizontal_win_both_players() {
        for player in [Player::A, Player::B] {
            let mut board = Board::new();
            for col in 3..7 {
                board.drop(col, player).unwrap();
            }
            assert_eq!(board.grid().winner(), Some(player));
        }
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop(6, Player::B).unwrap();
        }
        assert_eq!(board.grid().winner(), Some(Player::B));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // staircase: A on the rising diagonal, B as filler
        board.drop(0, Player::A).unwrap();

        board.drop(1, Player::B).unwrap();
        board.drop(1, Player::A).unwrap();

        board.drop(2, Player::B).unwrap();
        board.drop(2, Player::B).unwrap();
        board.drop(2, Player::A).unwrap();

        board.drop(3, Player::B).unwrap();
        board.drop(3, Player::B).unwrap();
        board.drop(3, Player::B).unwrap();
        assert_eq!(board.grid().winner(), None);
        board.drop(3, Player::A).unwrap();

        assert_eq!(board.grid().winner(), Some(Player::A));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        board.drop(6, Player::B).unwrap();

        board.drop(5, Player::A).unwrap();
        board.drop(5, Player::B).unwrap();

        board.drop(4, Player::A).unwrap();
        board.drop(4, Player::A).unwrap();
        board.drop(4, Player::B).unwrap();

        board.drop(3, Player::A).unwrap();
        board.drop(3, Player::A).unwrap();
        board.drop(3, Player::A).unwrap();
        board.drop(3, Player::B).unwrap();

        assert_eq!(board.grid().winner(), Some(Player::B));
    }

    #[test]
    fn test_short_diagonal_at_grid_corner() {
        // A run from (0,3) to (3,6) lies on the length-4 diagonal hugging the
        // top-right corner; the scan must reach it.
        let mut board = Board::new();
        let columns: [(usize, &[Player]); 4] = [
            (3, &[Player::B, Player::A, Player::B, Player::B, Player::B, Player::A]),
            (4, &[Player::A, Player::B, Player::B, Player::B, Player::A]),
            (5, &[Player::B, Player::A, Player::A, Player::A]),
            (6, &[Player::A, Player::B, Player::A]),
        ];
        for (col, pieces) in columns {
            for &player in pieces {
                board.drop(col, player).unwrap();
            }
        }

        let grid = board.grid();
        for (row, col) in [(0, 3), (1, 4), (2, 5), (3, 6)] {
            assert_eq!(grid.get(row, col), Cell::PlayerA);
        }
        assert_eq!(grid.winner(), Some(Player::A));
    }

    #[test]
    fn test_no_false_positive_on_scattered_runs() {
        let mut board = Board::new();
        // three in a row, three in a column, three on a diagonal
        for col in 0..3 {
            board.drop(col, Player::A).unwrap();
        }
        for _ in 0..2 {
            board.drop(5, Player::A).unwrap();
        }
        assert_eq!(board.grid().winner(), None);
    }

    #[test]
    fn test_display_glyphs() {
        let mut board = Board::new();
        board.drop(0, Player::A).unwrap();
        board.drop(1, Player::B).unwrap();
        let rendered = board.grid().to_string();
        let bottom = rendered.lines().last().unwrap();
        assert_eq!(bottom, "| o | x |   |   |   |   |   |");
        assert_eq!(rendered.lines().count(), ROWS);
    }
}

use super::agent::Agent;
use crate::game::{Grid, Player, COLS, ROWS};

/// Piles into whichever open column is already the tallest, ignoring whose
/// pieces are in it. Ties break toward the lower column index.
pub struct AnnoyingAgent;

impl Agent for AnnoyingAgent {
    fn choose_move(&mut self, grid: &Grid, valid_moves: &[usize], _player: Player) -> usize {
        assert!(!valid_moves.is_empty(), "no valid moves available");
        let mut order: Vec<usize> = (0..COLS).collect();
        order.sort_by_key(|&col| std::cmp::Reverse(grid.column_occupancy(col)));

        order
            .into_iter()
            .find(|&col| grid.column_occupancy(col) < ROWS)
            .unwrap_or(valid_moves[0])
    }

    fn name(&self) -> &str {
        "Annoying"
    }
}

/// Variant that targets the opponent: plays the open column holding the most
/// of the opponent's pieces.
pub struct AnnoyingAgentV2;

impl Agent for AnnoyingAgentV2 {
    fn choose_move(&mut self, grid: &Grid, valid_moves: &[usize], player: Player) -> usize {
        assert!(!valid_moves.is_empty(), "no valid moves available");
        let opponent = player.other().to_cell();
        let opponent_pieces = |col: usize| {
            (0..ROWS).filter(|&row| grid.get(row, col) == opponent).count()
        };

        let mut order: Vec<usize> = (0..COLS).collect();
        order.sort_by_key(|&col| std::cmp::Reverse(opponent_pieces(col)));

        order
            .into_iter()
            .find(|&col| grid.column_occupancy(col) < ROWS)
            .unwrap_or(valid_moves[0])
    }

    fn name(&self) -> &str {
        "Annoying v2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;

    #[test]
    fn test_annoying_picks_tallest_open_column() {
        let mut agent = AnnoyingAgent;
        let mut board = Board::new();
        board.drop(4, Player::A).unwrap();
        board.drop(4, Player::B).unwrap();
        board.drop(2, Player::A).unwrap();

        let col = agent.choose_move(&board.grid(), &board.valid_moves(), Player::B);
        assert_eq!(col, 4);
    }

    #[test]
    fn test_annoying_skips_full_column() {
        let mut agent = AnnoyingAgent;
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop(0, Player::A).unwrap();
        }
        board.drop(3, Player::B).unwrap();

        let col = agent.choose_move(&board.grid(), &board.valid_moves(), Player::A);
        assert_eq!(col, 3);
    }

    #[test]
    fn test_annoying_v2_targets_opponent_heavy_column() {
        let mut agent = AnnoyingAgentV2;
        let mut board = Board::new();
        // B has two pieces in column 5, A has three in column 1
        board.drop(5, Player::B).unwrap();
        board.drop(5, Player::B).unwrap();
        board.drop(1, Player::A).unwrap();
        board.drop(1, Player::A).unwrap();
        board.drop(1, Player::A).unwrap();

        // A hunts B's pieces, not its own stack
        let col = agent.choose_move(&board.grid(), &board.valid_moves(), Player::A);
        assert_eq!(col, 5);

        // and B, symmetrically, goes after A's stack
        let col = agent.choose_move(&board.grid(), &board.valid_moves(), Player::B);
        assert_eq!(col, 1);
    }
}

use crate::game::board::{Board, WINNING_TILE};
use crate::game::direction::Direction;
use crate::game::move_board::move_board;

pub fn is_win(board: &Board) -> bool {
    board.cells().any(|value| value == WINNING_TILE)
}

/// True when no direction changes the board.
pub fn is_lose(board: &Board) -> bool {
    Direction::ALL
        .iter()
        .all(|&direction| move_board(board, direction) == *board)
}

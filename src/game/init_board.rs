use crate::game::board::Board;
use rand::Rng;

/// Fresh board where every cell is independently 0 or 2.
///
/// This is a coin flip per cell, not the usual two seeded tiles.
pub fn init_board() -> Board {
    init_board_with(&mut rand::rng())
}

pub fn init_board_with<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    for row in board.0.iter_mut() {
        for cell in row.iter_mut() {
            *cell = if rng.random_bool(0.5) { 2 } else { 0 };
        }
    }
    board
}

use crate::game::board::Board;
use crate::game::get_empty_cells::get_empty_cells;
use rand::prelude::IndexedRandom;
use rand::Rng;

/// Values a spawned tile can take, chosen uniformly.
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

pub fn spawn_tile(board: Board) -> Board {
    spawn_tile_with(board, &mut rand::rng())
}

/// Places a 2 or a 4 on one uniformly chosen empty cell.
///
/// Only call this on a board known to have an empty cell; a full board is
/// returned untouched.
pub fn spawn_tile_with<R: Rng + ?Sized>(mut board: Board, rng: &mut R) -> Board {
    let empty = get_empty_cells(&board);
    let Some(&(row, col)) = empty.choose(rng) else {
        log::warn!("spawn_tile called on a full board");
        return board;
    };
    let value = SPAWN_VALUES[rng.random_range(0..SPAWN_VALUES.len())];
    board.set(row, col, value);
    board
}

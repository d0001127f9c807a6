pub mod board;
pub mod direction;
pub mod get_empty_cells;
pub mod init_board;
pub mod is_terminal;
pub mod move_board;
pub mod spawn_tile;

pub use board::{Board, BOARD_SIZE, WINNING_TILE};
pub use direction::Direction;
pub use get_empty_cells::get_empty_cells;
pub use init_board::{init_board, init_board_with};
pub use is_terminal::{is_lose, is_win};
pub use move_board::{move_board, move_down, move_left, move_right, move_up};
pub use spawn_tile::{spawn_tile, spawn_tile_with, SPAWN_VALUES};

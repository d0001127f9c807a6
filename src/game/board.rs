use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 4;
pub const WINNING_TILE: u32 = 2048;

/// 4x4 grid of tile values, `0` meaning empty.
///
/// Serializes as a bare array of four rows so the persisted file and the API
/// payload are both plain `[[u32; 4]; 4]` JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(pub [[u32; BOARD_SIZE]; BOARD_SIZE]);

impl Board {
    pub fn empty() -> Self {
        Board([[0; BOARD_SIZE]; BOARD_SIZE])
    }

    pub fn rows(&self) -> &[[u32; BOARD_SIZE]; BOARD_SIZE] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.0[row][col] = value;
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().flatten().copied()
    }

    pub fn empty_count(&self) -> usize {
        self.cells().filter(|&value| value == 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells().max().unwrap_or(0)
    }

    pub fn total_value(&self) -> u64 {
        self.cells().map(u64::from).sum()
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Board {
        let mut out = Board::empty();
        for (r, row) in self.0.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out.0[c][r] = value;
            }
        }
        out
    }

    /// Reverses every row (left/right mirror).
    pub fn mirror(&self) -> Board {
        let mut out = *self;
        for row in out.0.iter_mut() {
            row.reverse();
        }
        out
    }
}

impl From<[[u32; BOARD_SIZE]; BOARD_SIZE]> for Board {
    fn from(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board(rows)
    }
}

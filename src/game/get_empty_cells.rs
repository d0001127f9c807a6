use crate::game::board::Board;

/// Returns `(row, col)` of every empty cell, in row-major order.
pub fn get_empty_cells(board: &Board) -> Vec<(usize, usize)> {
    board
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, &value)| if value == 0 { Some((r, c)) } else { None })
        })
        .collect()
}

use crate::game::board::{Board, BOARD_SIZE};
use crate::game::direction::Direction;

/// Slides one line toward index 0, merging equal neighbours once each.
fn compress_line_left(line: [u32; BOARD_SIZE]) -> [u32; BOARD_SIZE] {
    let mut merged = [0; BOARD_SIZE];
    let mut target = 0;
    let mut pending: Option<u32> = None;

    for value in line.into_iter().filter(|&value| value != 0) {
        match pending {
            Some(previous) if previous == value => {
                merged[target] = previous * 2;
                target += 1;
                pending = None;
            }
            Some(previous) => {
                merged[target] = previous;
                target += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }

    if let Some(previous) = pending {
        merged[target] = previous;
    }
    merged
}

pub fn move_left(board: &Board) -> Board {
    let mut out = Board::empty();
    for (row, line) in board.rows().iter().enumerate() {
        out.0[row] = compress_line_left(*line);
    }
    out
}

pub fn move_right(board: &Board) -> Board {
    move_left(&board.mirror()).mirror()
}

pub fn move_up(board: &Board) -> Board {
    move_left(&board.transpose()).transpose()
}

pub fn move_down(board: &Board) -> Board {
    move_right(&board.transpose()).transpose()
}

pub fn move_board(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Up => move_up(board),
        Direction::Down => move_down(board),
        Direction::Left => move_left(board),
        Direction::Right => move_right(board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_board(rng: &mut StdRng) -> Board {
        let mut board = Board::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let exponent = rng.random_range(0..=6u32);
                board.set(row, col, if exponent == 0 { 0 } else { 1 << exponent });
            }
        }
        board
    }

    fn has_adjacent_pair(board: &Board) -> bool {
        board
            .rows()
            .iter()
            .any(|line| line.windows(2).any(|pair| pair[0] != 0 && pair[0] == pair[1]))
    }

    #[test]
    fn test_move_left() {
        let board = Board([[0, 8, 8, 8], [8, 0, 8, 8], [8, 8, 0, 8], [8, 8, 8, 0]]);
        let expected = Board([[16, 8, 0, 0]; 4]);
        assert_eq!(move_left(&board), expected);
    }

    #[test]
    fn test_move_left_no_change() {
        let board = Board([[8, 4, 0, 0], [4, 8, 0, 0], [0, 0, 0, 0], [2, 4, 8, 4]]);
        assert_eq!(move_left(&board), board);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let board = Board([[4, 4, 8, 0], [2, 2, 2, 2], [4, 2, 2, 0], [2, 0, 0, 2]]);
        let expected = Board([[8, 8, 0, 0], [4, 4, 0, 0], [4, 4, 0, 0], [4, 0, 0, 0]]);
        assert_eq!(move_left(&board), expected);
    }

    #[test]
    fn test_move_right() {
        let board = Board([[0, 8, 2, 2], [4, 2, 0, 2], [2, 0, 2, 0], [8, 0, 2, 0]]);
        let expected = Board([[0, 0, 8, 4], [0, 0, 4, 4], [0, 0, 0, 4], [0, 0, 8, 2]]);
        assert_eq!(move_right(&board), expected);
    }

    #[test]
    fn test_move_up() {
        let board = Board([[0, 0, 0, 8], [2, 0, 0, 0], [0, 4, 2, 0], [0, 4, 0, 0]]);
        let expected = Board([[2, 8, 2, 8], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert_eq!(move_up(&board), expected);
    }

    #[test]
    fn test_move_down() {
        let board = Board([[2, 4, 2, 0], [0, 0, 0, 0], [0, 2, 0, 0], [0, 0, 2, 0]]);
        let expected = Board([[0, 0, 0, 0], [0, 0, 0, 0], [0, 4, 0, 0], [2, 2, 4, 0]]);
        assert_eq!(move_down(&board), expected);
    }

    #[test]
    fn test_move_board_dispatch() {
        let board = Board([[2, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(move_board(&board, Direction::Left), move_left(&board));
        assert_eq!(move_board(&board, Direction::Right), move_right(&board));
        assert_eq!(move_board(&board, Direction::Up), move_up(&board));
        assert_eq!(move_board(&board, Direction::Down), move_down(&board));
    }

    #[test]
    fn test_second_move_left_is_stable_without_pairs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let once = move_left(&random_board(&mut rng));
            if !has_adjacent_pair(&once) {
                assert_eq!(move_left(&once), once);
            }
        }
    }

    #[test]
    fn test_moves_preserve_total_value() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let board = random_board(&mut rng);
            for direction in Direction::ALL {
                let moved = move_board(&board, direction);
                assert_eq!(moved.total_value(), board.total_value());
                assert!(moved.empty_count() >= board.empty_count());
            }
        }
    }

    #[test]
    fn test_move_right_matches_mirrored_move_left() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..500 {
            let board = random_board(&mut rng);
            assert_eq!(move_right(&board), move_left(&board.mirror()).mirror());
        }
    }
}

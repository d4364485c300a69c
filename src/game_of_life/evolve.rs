//! One-generation transition functions
//!
//! Every function here has the shape `fn(&Board, &mut Board)`: it reads the
//! previous generation and overwrites every cell of the next one. Both boards
//! must share dimensions; callers check that once up front with
//! [`Board::ensure_same_shape`].

use super::{Board, GameOfLifeRules};
use itertools::iproduct;

/// Live neighbor count of `(row, col)` with full modulo wrapping.
///
/// Each of the eight offsets is counted on its own, so on boards narrower
/// than three cells the same neighbor (or the cell itself) can be counted
/// more than once.
pub fn wrapped_neighbor_count(board: &Board, row: usize, col: usize) -> u8 {
    let (height, width) = board.dimensions();
    iproduct!(0..3usize, 0..3usize)
        .filter(|&offset| offset != (1, 1))
        .map(|(dr, dc)| board.cell((row + height + dr - 1) % height, (col + width + dc - 1) % width))
        .sum()
}

/// Uniform modulo-indexed evolution, row by row. This is the oracle the
/// other implementations are checked against.
pub fn evolve_reference(previous: &Board, next: &mut Board) {
    debug_assert_eq!(previous.dimensions(), next.dimensions());
    let (height, width) = previous.dimensions();

    for row in 0..height {
        for col in 0..width {
            let neighbors = wrapped_neighbor_count(previous, row, col);
            let alive = GameOfLifeRules::should_be_alive(previous.cell(row, col) == 1, neighbors);
            next.put(row, col, alive);
        }
    }
}

/// Same arithmetic as [`evolve_reference`] but walking down columns first,
/// against the row-major layout.
pub fn evolve_column_major(previous: &Board, next: &mut Board) {
    debug_assert_eq!(previous.dimensions(), next.dimensions());
    let (height, width) = previous.dimensions();

    for col in 0..width {
        for row in 0..height {
            let neighbors = wrapped_neighbor_count(previous, row, col);
            let alive = GameOfLifeRules::should_be_alive(previous.cell(row, col) == 1, neighbors);
            next.put(row, col, alive);
        }
    }
}

/// Boundary-specialised evolution with no modulo in the interior.
///
/// Interior rows read their neighbors straight from the rows above and
/// below; the first and last rows wrap vertically. Within each row the
/// middle columns slide a 3-wide window and the first and last columns wrap
/// horizontally, so the four corners wrap on both axes.
pub fn evolve_bordered(previous: &Board, next: &mut Board) {
    debug_assert_eq!(previous.dimensions(), next.dimensions());
    let height = previous.height();
    let last_row = height - 1;

    for row in 1..last_row {
        evolve_row(previous, next, row - 1, row, row + 1);
    }

    evolve_row(previous, next, last_row, 0, usize::from(height > 1));
    if last_row > 0 {
        evolve_row(previous, next, last_row - 1, last_row, 0);
    }
}

#[inline(always)]
fn evolve_row(previous: &Board, next: &mut Board, up: usize, row: usize, down: usize) {
    let width = previous.width();
    let last_col = width - 1;
    let above = previous.row(up);
    let centre = previous.row(row);
    let below = previous.row(down);
    let out = next.row_mut(row);

    for (col, ((a, b), c)) in above
        .windows(3)
        .zip(centre.windows(3))
        .zip(below.windows(3))
        .enumerate()
    {
        let neighbors = a[0] + a[1] + a[2] + b[0] + b[2] + c[0] + c[1] + c[2];
        out[col + 1] = GameOfLifeRules::next_state(b[1], neighbors);
    }

    out[0] = wrapped_state(above, centre, below, last_col, 0, usize::from(width > 1));
    if last_col > 0 {
        out[last_col] = wrapped_state(above, centre, below, last_col - 1, last_col, 0);
    }
}

#[inline(always)]
fn wrapped_state(above: &[u8], centre: &[u8], below: &[u8], left: usize, col: usize, right: usize) -> u8 {
    let neighbors = above[left]
        + above[col]
        + above[right]
        + centre[left]
        + centre[right]
        + below[left]
        + below[col]
        + below[right];
    GameOfLifeRules::next_state(centre[col], neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::patterns;
    use crate::registry::EvolveFn;

    const METHODS: [(&str, EvolveFn); 3] = [
        ("reference", evolve_reference),
        ("column_major", evolve_column_major),
        ("bordered", evolve_bordered),
    ];

    fn board_from_bits(height: usize, width: usize, bits: u64) -> Board {
        let mut board = Board::new(height, width).unwrap();
        for idx in 0..height * width {
            if bits >> idx & 1 == 1 {
                board.set(idx / width, idx % width, true).unwrap();
            }
        }
        board
    }

    fn step(board: &Board, evolve: EvolveFn) -> Board {
        let mut next = Board::new(board.height(), board.width()).unwrap();
        evolve(board, &mut next);
        next
    }

    fn assert_all_agree(board: &Board) {
        let expected = step(board, evolve_reference);
        for (name, evolve) in METHODS {
            assert_eq!(step(board, evolve), expected, "{} disagrees on\n{}", name, board);
        }
    }

    #[test]
    fn test_neighbor_count_wraps_corners() {
        let mut board = Board::new(4, 4).unwrap();
        for (row, col) in [(3, 3), (3, 0), (0, 3), (1, 1)] {
            board.set(row, col, true).unwrap();
        }
        assert_eq!(wrapped_neighbor_count(&board, 0, 0), 4);
        assert_eq!(wrapped_neighbor_count(&board, 3, 3), 2);
    }

    #[test]
    fn test_neighbor_count_on_tiny_boards_counts_each_offset() {
        let single = board_from_bits(1, 1, 1);
        assert_eq!(wrapped_neighbor_count(&single, 0, 0), 8);

        let pair = board_from_bits(1, 2, 0b10);
        // (0,0): left and right offsets both land on (0,1), in all three rows
        assert_eq!(wrapped_neighbor_count(&pair, 0, 0), 6);
    }

    #[test]
    fn test_every_4x4_board_agrees() {
        // covers all 2^9 neighborhoods of every corner, edge and interior cell
        for bits in 0..1u64 << 16 {
            let board = board_from_bits(4, 4, bits);
            let expected = step(&board, evolve_reference);
            assert_eq!(step(&board, evolve_bordered), expected, "bits {:#06x}", bits);
        }
    }

    #[test]
    fn test_every_3x3_board_agrees() {
        for bits in 0..1u64 << 9 {
            assert_all_agree(&board_from_bits(3, 3, bits));
        }
    }

    #[test]
    fn test_narrow_boards_agree() {
        for (height, width) in iproduct!(1..=3usize, 1..=5usize) {
            let cells = height * width;
            for bits in 0..1u64 << cells {
                assert_all_agree(&board_from_bits(height, width, bits));
                assert_all_agree(&board_from_bits(width, height, bits));
            }
        }
    }

    #[test]
    fn test_rectangular_boards_agree() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(0x11fe);
        for (height, width) in [(5, 7), (7, 5), (16, 9), (32, 32), (3, 40)] {
            for density in [0.1, 0.35, 0.6, 0.9] {
                let board = Board::random(height, width, density, &mut rng).unwrap();
                assert_all_agree(&board);
            }
        }
    }

    #[test]
    fn test_empty_board_stays_empty() {
        for (_, evolve) in METHODS {
            let board = Board::new(8, 6).unwrap();
            assert!(step(&board, evolve).is_empty());
        }
    }

    #[test]
    fn test_full_board_dies() {
        let mut board = Board::new(5, 5).unwrap();
        for (row, col) in iproduct!(0..5, 0..5) {
            board.set(row, col, true).unwrap();
        }
        for (_, evolve) in METHODS {
            assert!(step(&board, evolve).is_empty());
        }
    }

    #[test]
    fn test_lone_cell_dies_and_pair_dies() {
        let mut board = Board::new(6, 6).unwrap();
        board.set(2, 2, true).unwrap();
        assert!(step(&board, evolve_bordered).is_empty());
        board.set(2, 3, true).unwrap();
        assert!(step(&board, evolve_bordered).is_empty());
    }

    #[test]
    fn test_crowded_centre_dies() {
        // plus sign: centre has 4 neighbors
        let mut board = Board::new(7, 7).unwrap();
        board.place((2, 2), &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
        let next = step(&board, evolve_bordered);
        assert!(!next.get(3, 3));
    }

    #[test]
    fn test_block_is_still_life() {
        for (_, evolve) in METHODS {
            let mut board = Board::new(6, 6).unwrap();
            board.place((2, 2), patterns::BLOCK);
            assert_eq!(step(&board, evolve), board);

            // straddling the corner
            let mut wrapped = Board::new(4, 4).unwrap();
            wrapped.place((3, 3), patterns::BLOCK);
            assert_eq!(step(&wrapped, evolve), wrapped);
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        for (_, evolve) in METHODS {
            let mut horizontal = Board::new(5, 5).unwrap();
            horizontal.place((2, 1), patterns::BLINKER);

            let mut vertical = Board::new(5, 5).unwrap();
            vertical.place((1, 2), &[(0, 0), (1, 0), (2, 0)]);

            let once = step(&horizontal, evolve);
            assert_eq!(once, vertical);
            assert_eq!(step(&once, evolve), horizontal);
        }
    }

    #[test]
    fn test_blinker_across_seam() {
        let mut horizontal = Board::new(5, 5).unwrap();
        horizontal.place((0, 4), patterns::BLINKER);

        let mut vertical = Board::new(5, 5).unwrap();
        vertical.place((4, 0), &[(0, 0), (1, 0), (2, 0)]);

        assert_eq!(step(&horizontal, evolve_bordered), vertical);
        assert_eq!(step(&vertical, evolve_bordered), horizontal);
    }

    #[test]
    fn test_glider_translates() {
        for (_, evolve) in METHODS {
            let mut board = Board::new(10, 10).unwrap();
            board.place((1, 1), patterns::GLIDER);

            let mut expected = Board::new(10, 10).unwrap();
            expected.place((2, 2), patterns::GLIDER);

            let moved = GameOfLifeRules::evolve_generations(&board, 4, evolve);
            assert_eq!(moved, expected);
        }
    }

    #[test]
    fn test_glider_circles_the_torus() {
        // 4 generations per diagonal step, 8 steps to come all the way round
        let mut board = Board::new(8, 8).unwrap();
        board.place((0, 0), patterns::GLIDER);

        let back = GameOfLifeRules::evolve_generations(&board, 32, evolve_bordered);
        assert_eq!(back, board);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let mut board = Board::new(6, 6).unwrap();
        board.place((1, 1), patterns::GLIDER);
        let snapshot = board.clone();
        let mut next = Board::new(6, 6).unwrap();
        evolve_bordered(&board, &mut next);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_stale_output_is_overwritten() {
        let board = Board::new(5, 5).unwrap();
        for (_, evolve) in METHODS {
            let mut next = Board::new(5, 5).unwrap();
            next.place((0, 0), &[(0, 0), (4, 4), (2, 2), (0, 4)]);
            evolve(&board, &mut next);
            assert!(next.is_empty());
        }
    }
}

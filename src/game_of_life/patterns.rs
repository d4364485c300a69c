//! Well-known patterns as live-cell offsets `(row, col)` from a top-left origin

use super::Board;
use crate::error::LifeError;

/// 2x2 still life
pub const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

/// Period-2 oscillator, horizontal phase
pub const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];

/// Moves one cell down and right every 4 generations
pub const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Period-2 oscillator made of two diagonal blocks
pub const BEACON: &[(usize, usize)] = &[
    (0, 0),
    (0, 1),
    (1, 0),
    (2, 3),
    (3, 2),
    (3, 3),
];

/// Name and offsets of every built-in pattern
pub fn all_patterns() -> Vec<(&'static str, &'static [(usize, usize)])> {
    vec![
        ("block", BLOCK),
        ("blinker", BLINKER),
        ("glider", GLIDER),
        ("beacon", BEACON),
    ]
}

/// Look up a built-in pattern by name
pub fn find_pattern(name: &str) -> Option<&'static [(usize, usize)]> {
    all_patterns()
        .into_iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, offsets)| offsets)
}

/// Smallest board that holds `offsets` with one dead cell of margin all round
pub fn framed(offsets: &[(usize, usize)]) -> Result<Board, LifeError> {
    let height = offsets.iter().map(|&(row, _)| row + 1).max().unwrap_or(0) + 2;
    let width = offsets.iter().map(|&(_, col)| col + 1).max().unwrap_or(0) + 2;
    let mut board = Board::new(height, width)?;
    board.place((1, 1), offsets);
    Ok(board)
}

//! B3/S23 transition rule

use super::Board;
use crate::registry::EvolveFn;

/// Conway's Life rule table (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Next state of a cell given its current state and live neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Same as [`should_be_alive`](Self::should_be_alive) on raw 0/1 cells
    #[inline(always)]
    pub fn next_state(cell: u8, neighbor_count: u8) -> u8 {
        u8::from(neighbor_count == 3 || (neighbor_count == 2 && cell == 1))
    }

    /// Step `board` forward `generations` times with `evolve`, reusing two buffers
    pub fn evolve_generations(board: &Board, generations: usize, evolve: EvolveFn) -> Board {
        let mut current = board.clone();
        let mut next = board.clone();
        for _ in 0..generations {
            evolve(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!GameOfLifeRules::should_be_alive(true, 0));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
    }

    #[test]
    fn test_stasis() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!GameOfLifeRules::should_be_alive(true, n), "{} neighbors", n);
        }
    }

    #[test]
    fn test_birth() {
        for n in 0..=8 {
            assert_eq!(GameOfLifeRules::should_be_alive(false, n), n == 3, "{} neighbors", n);
        }
    }

    #[test]
    fn test_raw_state_matches_table() {
        for n in 0..=8 {
            for cell in [0u8, 1] {
                let expected = GameOfLifeRules::should_be_alive(cell == 1, n);
                assert_eq!(GameOfLifeRules::next_state(cell, n), u8::from(expected));
            }
        }
    }

    #[test]
    fn test_zero_generations_is_identity() {
        let mut board = Board::new(4, 4).unwrap();
        board.set(0, 0, true).unwrap();
        let evolved = GameOfLifeRules::evolve_generations(&board, 0, crate::game_of_life::evolve_reference);
        assert_eq!(evolved, board);
    }
}

//! Game of Life core: board, rule and transition functions

pub mod board;
pub mod evolve;
pub mod io;
pub mod patterns;
pub mod rules;

pub use board::Board;
pub use evolve::{evolve_bordered, evolve_column_major, evolve_reference, wrapped_neighbor_count};
pub use io::{create_example_patterns, load_board_from_file, parse_board_from_string, save_board_to_file};
pub use rules::GameOfLifeRules;

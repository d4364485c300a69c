//! Text I/O for boards
//!
//! Format: one line per row, `1` for a live cell and `0` for a dead one.
//! Blank lines and surrounding whitespace are ignored.

use super::patterns;
use super::Board;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a board from a text file
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read board file: {}", path.as_ref().display()))?;

    parse_board_from_string(&content)
        .with_context(|| format!("Failed to parse board from file: {}", path.as_ref().display()))
}

/// Parse a board from its text form
pub fn parse_board_from_string(content: &str) -> Result<Board> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Board file is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            })
            .collect::<Result<Vec<bool>>>()?;
        rows.push(row);
    }

    Ok(Board::from_rows(rows)?)
}

/// Save a board to a text file, creating parent directories
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, board_to_string(board))
        .with_context(|| format!("Failed to write board to file: {}", path.as_ref().display()))?;

    Ok(())
}

pub fn board_to_string(board: &Board) -> String {
    let mut result = String::with_capacity(board.height() * (board.width() + 1));
    for row in 0..board.height() {
        for &cell in board.row(row) {
            result.push(if cell == 1 { '1' } else { '0' });
        }
        result.push('\n');
    }
    result
}

/// Write every built-in pattern as `<name>.txt` into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, offsets) in patterns::all_patterns() {
        let board = patterns::framed(offsets)?;
        save_board_to_file(&board, dir.join(format!("{}.txt", name)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_board_from_string() {
        let board = parse_board_from_string("010\n101\n010\n").unwrap();

        assert_eq!(board.dimensions(), (3, 3));
        assert_eq!(board.living_count(), 4);
        assert!(board.get(0, 1));
        assert!(board.get(1, 0));
        assert!(board.get(1, 2));
        assert!(board.get(2, 1));
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_padding() {
        let board = parse_board_from_string("\n  0110 \n\n  1001\n").unwrap();
        assert_eq!(board.dimensions(), (2, 4));
        assert_eq!(board.living_count(), 4);
    }

    #[test]
    fn test_board_to_string() {
        let board = Board::from_rows(vec![
            vec![false, true, false],
            vec![true, false, true],
        ])
        .unwrap();

        assert_eq!(board_to_string(&board), "010\n101\n");
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/board.txt");

        let mut original = Board::new(3, 4).unwrap();
        original.place((0, 1), &[(0, 0), (1, 1), (2, 2)]);

        save_board_to_file(&original, &file_path).unwrap();
        let loaded = load_board_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_board_from_string("010\n1X1\n010\n").is_err());
        assert!(parse_board_from_string("010\n11\n010\n").is_err());
        assert!(parse_board_from_string("").is_err());
        assert!(parse_board_from_string("\n   \n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = load_board_from_file(temp_dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read board file"));
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider", "blinker", "block", "beacon"] {
            assert!(temp_dir.path().join(format!("{}.txt", name)).exists());
        }

        let glider = load_board_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.dimensions(), (5, 5));
        assert_eq!(glider.living_count(), 5);
    }
}

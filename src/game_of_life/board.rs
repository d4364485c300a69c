//! Fixed-size toroidal board

use crate::error::LifeError;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// A two-state Life board stored row-major, one byte per cell.
///
/// Every cell holds 0 (dead) or 1 (alive). Cells are only ever written
/// through `bool`, so no other value can appear. Dimensions are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Create an all-dead board
    pub fn new(height: usize, width: usize) -> Result<Self, LifeError> {
        if height == 0 || width == 0 {
            return Err(LifeError::EmptyBoard { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![0; height * width],
        })
    }

    /// Create a board from rows of booleans
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut board = Self::new(height, width)?;

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(LifeError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            for (col, alive) in values.into_iter().enumerate() {
                board.cells[row * width + col] = u8::from(alive);
            }
        }

        Ok(board)
    }

    /// Fill a board at random, each cell alive with probability `density`.
    /// Densities outside `0.0..=1.0` (NaN included) are rejected.
    pub fn random<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, LifeError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        let mut board = Self::new(height, width)?;
        for cell in board.cells.iter_mut() {
            *cell = u8::from(rng.random_bool(density));
        }
        Ok(board)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell state at coordinates; out of bounds reads as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[self.index(row, col)] == 1
    }

    /// Raw cell value (0 or 1) without bounds translation
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.width + col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = u8::from(alive);
        Ok(())
    }

    /// One row of raw cell values
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = row * self.width;
        &mut self.cells[start..start + self.width]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, alive: bool) {
        let idx = row * self.width + col;
        self.cells[idx] = u8::from(alive);
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Stamp live cells given as offsets from `origin`, wrapping around both axes
    pub fn place(&mut self, origin: (usize, usize), offsets: &[(usize, usize)]) {
        let (row0, col0) = origin;
        for &(dr, dc) in offsets {
            let row = (row0 + dr) % self.height;
            let col = (col0 + dc) % self.width;
            self.put(row, col, true);
        }
    }

    /// Fail unless `other` has the same dimensions
    pub fn ensure_same_shape(&self, other: &Board) -> Result<(), LifeError> {
        if self.dimensions() != other.dimensions() {
            return Err(LifeError::ShapeMismatch {
                expected_height: self.height,
                expected_width: self.width,
                actual_height: other.height,
                actual_width: other.width,
            });
        }
        Ok(())
    }

    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for &cell in self.row(row) {
                let symbol = if cell == 1 { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Board model for Conway's Game of Life: a fixed-size square grid of
//! live/dead cells, advanced one generation at a time under the B3/S23
//! rule, plus a built-in catalog of named seed patterns that can be
//! stamped onto the grid at an anchor position.
//!
//! The grid has hard edges: positions outside it count as dead, with no
//! wraparound to the opposite side.

mod shapes;

use std::collections::HashMap;
use std::mem;
use std::ops::{Index, IndexMut};

use thiserror::Error;

use shapes::Offsets;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be non-negative, got {size}")]
    InvalidSize { size: i32 },

    #[error("unknown shape \"{name}\"")]
    UnknownShape { name: String },

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// A `size x size` Game of Life grid with double-buffered generations.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Grid,
    next_cells: Grid,
    shapes: HashMap<&'static str, Offsets>,
}

/// Boards are equal when their current generations are; the back buffer
/// holds stale cells and does not participate.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Board {
    /// Creates an all-dead board. A size of zero yields a degenerate
    /// empty board; a negative size is an error.
    pub fn new(size: i32) -> Result<Self, BoardError> {
        if size < 0 {
            return Err(BoardError::InvalidSize { size });
        }
        let size = size as usize;
        Ok(Self {
            size,
            cells: Grid::new(size),
            next_cells: Grid::new(size),
            shapes: shapes::catalog(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a copy of the grid, independent of the board's own
    /// storage, indexed `[row][col]`.
    pub fn state(&self) -> Vec<Vec<bool>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.cells[(row, col)]).collect())
            .collect()
    }

    /// Names of the built-in shapes, in no particular order.
    pub fn shape_names(&self) -> Vec<&'static str> {
        self.shapes.keys().copied().collect()
    }

    /// Advances the board one generation:
    /// - a live cell with two or three live neighbors stays alive,
    ///   otherwise it dies;
    /// - a dead cell with exactly three live neighbors becomes alive.
    ///
    /// The next generation is computed entirely from the current one;
    /// the buffers swap only after every cell has been decided.
    pub fn update(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                let neighbors = self.count_live_neighbors(row, col);
                self.next_cells[(row, col)] = if self.cells[(row, col)] {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
            }
        }
        mem::swap(&mut self.cells, &mut self.next_cells);
    }

    /// Toggles the cell at `(row, col)`.
    pub fn flip_cell(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let size = self.size;
        let cell = self
            .cells
            .get_mut(row, col)
            .ok_or(BoardError::OutOfBounds { row, col, size })?;
        *cell = !*cell;
        Ok(())
    }

    /// Sets every cell of the named shape alive, anchored at
    /// `(row, col)`. Cells outside the shape are left untouched. Fails
    /// without mutating anything if the name is unknown or any cell of
    /// the shape would fall outside the grid.
    pub fn add_shape(&mut self, name: &str, row: usize, col: usize) -> Result<(), BoardError> {
        let offsets = self
            .shapes
            .get(name)
            .copied()
            .ok_or_else(|| BoardError::UnknownShape {
                name: name.to_owned(),
            })?;

        // Saturating addition: a sum past usize::MAX cannot be inside
        // the grid, and any coordinate that validates in range was
        // computed without saturating.
        for &(d_row, d_col) in offsets {
            let (row, col) = (row.saturating_add(d_row), col.saturating_add(d_col));
            if self.cells.get(row, col).is_none() {
                return Err(BoardError::OutOfBounds {
                    row,
                    col,
                    size: self.size,
                });
            }
        }
        for &(d_row, d_col) in offsets {
            self.cells[(row.saturating_add(d_row), col.saturating_add(d_col))] = true;
        }
        Ok(())
    }

    /// Live cells among the up-to-8 Moore neighbors of `(row, col)`.
    /// Positions outside the grid count as dead.
    fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        let (row, col) = (row as i64, col as i64);
        let mut count = 0;
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if (r, c) != (row, col) && self.is_alive_at(r, c) {
                    count += 1;
                }
            }
        }
        count
    }

    fn is_alive_at(&self, row: i64, col: i64) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.cells
            .get(row as usize, col as usize)
            .copied()
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Grid {
    cells: Vec<bool>,
    size: usize,
}

impl Grid {
    fn new(size: usize) -> Self {
        Self {
            cells: vec![false; size * size],
            size,
        }
    }

    fn get(&self, row: usize, col: usize) -> Option<&bool> {
        self.grid_index(row, col).map(|index| &self.cells[index])
    }

    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut bool> {
        self.grid_index(row, col)
            .map(|index| &mut self.cells[index])
    }

    fn grid_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.get(row, col)
            .unwrap_or_else(|| panic!("indices {row}, {col} out of bounds"))
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.get_mut(row, col)
            .unwrap_or_else(|| panic!("indices {row}, {col} out of bounds"))
    }
}

//! Board state for the hop puzzle
//!
//! Stores placed numbers in a dense square grid. A cell holds 0 while
//! unoccupied and the placed number (1..=N²) afterwards. The search mutates
//! one board in place and snapshots it by cloning when a new longest
//! placement sequence is reached.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::MAX_GRID_SIZE;
use crate::io::error::{Result, invalid_parameter};

/// Square board of placement cells
///
/// Coordinates are `[row, col]` pairs of `i32` so that hop arithmetic can
/// step outside the board without wrapping; out-of-bounds positions read
/// as occupied and silently absorb writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<u32>,
    size: usize,
}

impl Board {
    /// Create an empty board with `size` rows and columns
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidParameter`] when `size` is zero
    /// or exceeds [`MAX_GRID_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"the board needs at least one cell",
            ));
        }
        if size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("the maximum supported grid size is {MAX_GRID_SIZE}"),
            ));
        }
        Ok(Self {
            cells: Array2::zeros((size, size)),
            size,
        })
    }

    /// Number of rows (and columns)
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total cell count N², the number a completed placement ends on
    pub const fn cell_count(&self) -> u32 {
        (self.size * self.size) as u32
    }

    /// Check whether a position lies on the board
    pub const fn in_bounds(&self, position: [i32; 2]) -> bool {
        self.index_of(position).is_some()
    }

    /// Check whether a position is on the board and unoccupied
    pub fn is_open(&self, position: [i32; 2]) -> bool {
        self.in_bounds(position) && self.value_at(position) == 0
    }

    /// Read the number at a position, 0 when unoccupied or out of bounds
    pub fn value_at(&self, position: [i32; 2]) -> u32 {
        self.index_of(position)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Write a number into a cell, overwriting whatever was there
    pub fn place(&mut self, position: [i32; 2], number: u32) {
        let Some(index) = self.index_of(position) else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = number;
        }
    }

    /// Reset a cell to unoccupied
    pub fn clear(&mut self, position: [i32; 2]) {
        self.place(position, 0);
    }

    /// Access the underlying cell array for rendering and analysis
    pub const fn cells(&self) -> &Array2<u32> {
        &self.cells
    }

    /// Count of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// Translate a signed coordinate pair into an array index
    const fn index_of(&self, position: [i32; 2]) -> Option<(usize, usize)> {
        let [row, col] = position;
        if row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    /// Render the board with right-aligned numbers and `.` for open cells
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cell_count().to_string().len();
        for row in self.cells.rows() {
            for (column, &value) in row.iter().enumerate() {
                if column > 0 {
                    write!(formatter, " ")?;
                }
                if value == 0 {
                    write!(formatter, "{:>width$}", ".")?;
                } else {
                    write!(formatter, "{value:>width$}")?;
                }
            }
            writeln!(formatter)?;
        }
        Ok(())
    }
}

//! Grid module - the rows x cols cell matrix
//!
//! Uses a flat row-major vector so whole-row moves are a single `copy_within`.
//! Coordinates: (row, col) where row 0 is the top and col 0 the left edge.

use std::fmt;

use crate::{Cell, Color, EMPTY_SYMBOL};

/// The game board as a flat row-major cell buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new all-empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "grid needs at least one row");
        assert!(cols > 0, "grid needs at least one column");
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a grid from row vectors (top row first).
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, a row is empty, or the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert!(!rows.is_empty(), "grid needs at least one row");
        let cols = rows[0].len();
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "every row must have the same number of cells"
        );

        let mut grid = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            let start = r * cols;
            grid.cells[start..start + cols].copy_from_slice(row);
        }
        grid
    }

    /// Parse a text dump, one line per row, one symbol per cell (`.` = empty).
    ///
    /// Blank lines and surrounding whitespace are ignored. Returns `None` on an unknown symbol,
    /// ragged rows, or an input with no rows.
    pub fn parse(text: &str) -> Option<Self> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut row = Vec::with_capacity(line.len());
            for c in line.chars() {
                if c == EMPTY_SYMBOL {
                    row.push(None);
                } else {
                    row.push(Some(Color::from_symbol(c)?));
                }
            }
            rows.push(row);
        }

        let cols = rows.first()?.len();
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self::from_rows(rows))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Borrow one row, or None if out of bounds
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Check if a row holds no colored cell
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row)
            .map_or(false, |cells| cells.iter().all(|cell| cell.is_none()))
    }

    /// Overwrite row `dst` with the contents of row `src`.
    /// Returns false (and does nothing) if either row is out of bounds.
    pub fn copy_row(&mut self, src: usize, dst: usize) -> bool {
        if src >= self.rows || dst >= self.rows {
            return false;
        }
        let src_start = src * self.cols;
        self.cells
            .copy_within(src_start..src_start + self.cols, dst * self.cols);
        true
    }

    /// Set every cell of a row to `cell`.
    /// Returns false if the row is out of bounds.
    pub fn fill_row(&mut self, row: usize, cell: Cell) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].fill(cell);
        true
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Count of colored cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to row vectors (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                let symbol = cell.map_or(EMPTY_SYMBOL, |color| color.symbol());
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

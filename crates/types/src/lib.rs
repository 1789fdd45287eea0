//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the rules engine and by anything that
//! observes it (renderers, tests, tooling). All types are pure data structures with no external
//! dependencies.
//!
//! # Board Layout
//!
//! - Row 0 is the top of the board, where freshly spawned rows appear.
//! - Row `rows - 1` is the bottom; any color reaching it ends the game.
//! - Columns are indexed left to right from 0.
//!
//! # Cells
//!
//! A [`Cell`] is `Option<Color>`: `None` is the empty cell, `Some(color)` a colored one.
//! Two cells are equal exactly when they hold the same color (or are both empty).
//!
//! # Examples
//!
//! ```
//! use clear_cell_types::{cell_code, Color, Grid, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Parse a color (case-insensitive)
//! assert_eq!(Color::from_str("Red"), Some(Color::Red));
//!
//! // Snapshot codes: 0 is empty, colors are 1-based
//! assert_eq!(cell_code(None), 0);
//! assert_eq!(cell_code(Some(Color::Red)), 1);
//!
//! // A fresh grid is all empty
//! let grid = Grid::new(DEFAULT_ROWS, DEFAULT_COLS);
//! assert!(grid.is_row_empty(DEFAULT_ROWS - 1));
//! ```

pub mod grid;

pub use grid::Grid;

/// Default number of rows on a board
pub const DEFAULT_ROWS: usize = 10;

/// Default number of columns on a board
pub const DEFAULT_COLS: usize = 8;

/// Number of distinct non-empty colors
pub const COLOR_COUNT: usize = 4;

/// Seed used when the caller does not provide one
pub const DEFAULT_SEED: u32 = 1;

/// The colors a non-empty cell can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Every color, in code order
    pub const ALL: [Color; COLOR_COUNT] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Parse color from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use clear_cell_types::Color;
    ///
    /// assert_eq!(Color::from_str("blue"), Some(Color::Blue));
    /// assert_eq!(Color::from_str("YELLOW"), Some(Color::Yellow));
    /// assert_eq!(Color::from_str("empty"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }

    /// Single-character symbol used in text dumps of the board
    pub fn symbol(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// Parse a color from its text-dump symbol
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }

    /// 1-based snapshot code (0 is reserved for the empty cell)
    pub fn code(&self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Yellow => 4,
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<Color>;

/// Symbol used for an empty cell in text dumps
pub const EMPTY_SYMBOL: char = '.';

/// Snapshot code of a cell: 0 for empty, [`Color::code`] otherwise
#[inline]
pub fn cell_code(cell: Cell) -> u8 {
    cell.map_or(0, |color| color.code())
}

/// Inverse of [`cell_code`]. Returns `None` for codes outside `0..=COLOR_COUNT`.
pub fn cell_from_code(code: u8) -> Option<Cell> {
    match code {
        0 => Some(None),
        n if (n as usize) <= COLOR_COUNT => Some(Some(Color::ALL[n as usize - 1])),
        _ => None,
    }
}

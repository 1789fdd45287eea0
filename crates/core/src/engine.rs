//! Engine module - the rules of the game
//!
//! [`BoardEngine`] owns the grid, the score and the injected random source. Everything that
//! changes the board goes through it:
//!
//! - [`BoardEngine::tick`]: gravity. Rows move down one step and a new random row spawns on top.
//! - [`BoardEngine::handle_click`]: clears the clicked cell plus any same-colored cell in its
//!   8-neighborhood, scores one point per cell, then collapses empty rows.
//! - [`BoardEngine::is_game_over`]: true once anything reaches the bottom row.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::error::InvalidIndex;
use crate::rng::{random_cell, RandomSource, SimpleRng};
use crate::snapshot::BoardSnapshot;
use crate::types::{Cell, Grid, DEFAULT_COLS, DEFAULT_ROWS};

/// (row, col) offsets of the 8-neighborhood
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),  // left
    (-1, -1), // above-left
    (1, -1),  // below-left
    (0, 1),   // right
    (-1, 1),  // above-right
    (1, 1),   // below-right
    (-1, 0),  // above
    (1, 0),   // below
];

/// Game rules over a single owned grid
#[derive(Debug, Clone)]
pub struct BoardEngine<R = SimpleRng> {
    grid: Grid,
    score: u32,
    rng: R,
}

impl BoardEngine<SimpleRng> {
    /// Default-sized board driven by a [`SimpleRng`] with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> BoardEngine<R> {
    /// Create an engine with an all-empty `rows` x `cols` board and zero score.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize, rng: R) -> Self {
        Self::with_grid(Grid::new(rows, cols), rng)
    }

    /// Create an engine around an existing grid, score starts at zero
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { grid, score: 0, rng }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get cell at (row, col), None if out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    /// Overwrite one cell. Returns false if out of bounds.
    ///
    /// Scoring and game-over are not affected until the next tick or click.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        self.grid.set(row, col, cell)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// The game is over when the bottom row holds at least one colored cell
    pub fn is_game_over(&self) -> bool {
        !self.grid.is_row_empty(self.grid.rows() - 1)
    }

    /// Advance one gravity step.
    ///
    /// Does nothing once the game is over. Otherwise every row moves down by one (the old bottom
    /// row is discarded) and row 0 is refilled left to right with random colored cells.
    pub fn tick(&mut self) {
        if self.is_game_over() {
            return;
        }

        // Bottom-most rows first so nothing is overwritten before it is copied.
        for row in (0..self.grid.rows() - 1).rev() {
            self.grid.copy_row(row, row + 1);
        }

        for col in 0..self.grid.cols() {
            let cell = random_cell(&mut self.rng);
            self.grid.set(0, col, cell);
        }

        trace!("tick: spawned new top row");
        if self.is_game_over() {
            info!("game over after tick, score {}", self.score);
        }
    }

    /// Process a click at (row, col).
    ///
    /// If the cell is colored it is cleared together with every in-bounds 8-neighbor of the
    /// same color; each cleared cell scores one point. Matching is a single hop against the
    /// clicked color, it does not spread further. Empty rows are collapsed afterwards even when
    /// nothing was cleared.
    ///
    /// Returns the number of cells cleared. Out-of-range coordinates are rejected before the
    /// board is touched, row first.
    pub fn handle_click(&mut self, row: i32, col: i32) -> Result<u32, InvalidIndex> {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let r = checked_index(row, rows).ok_or_else(|| InvalidIndex::row(row, rows))?;
        let c = checked_index(col, cols).ok_or_else(|| InvalidIndex::column(col, cols))?;

        let was_over = self.is_game_over();
        let mut cleared = 0;

        if let Some(color) = self.grid.get(r, c).flatten() {
            self.grid.set(r, c, None);
            cleared += 1;

            for (nr, nc) in neighbors(r, c, rows, cols) {
                if self.grid.get(nr, nc) == Some(Some(color)) {
                    self.grid.set(nr, nc, None);
                    cleared += 1;
                }
            }
        }

        self.score += cleared;
        collapse(&mut self.grid);

        debug!(
            "click ({}, {}): cleared {} cell(s), score {}",
            r, c, cleared, self.score
        );
        match (was_over, self.is_game_over()) {
            (false, true) => info!("game over after collapse, score {}", self.score),
            (true, false) => info!("bottom row cleared, game resumes"),
            _ => {}
        }

        Ok(cleared)
    }

    /// Copy the current state into a reusable snapshot
    pub fn snapshot_into(&self, snap: &mut BoardSnapshot) {
        snap.fill_from(&self.grid, self.score, self.is_game_over());
    }

    /// Take a fresh snapshot of the current state
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Convert a caller-supplied coordinate into an index in `0..len`
fn checked_index(index: i32, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

/// In-bounds 8-neighbors of (row, col)
fn neighbors(row: usize, col: usize, rows: usize, cols: usize) -> ArrayVec<(usize, usize), 8> {
    let mut out = ArrayVec::new();
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if nr < rows && nc < cols {
            out.push((nr, nc));
        }
    }
    out
}

/// Squeeze out empty rows in one top-to-bottom pass.
///
/// Each empty row found at index `r` pulls every row below it up by one and leaves an empty
/// row at the bottom. The scan then continues at `r + 1`, so a row pulled into `r` is not
/// re-checked during the same pass.
fn collapse(grid: &mut Grid) {
    let rows = grid.rows();
    for row in 0..rows {
        if !grid.is_row_empty(row) {
            continue;
        }
        for next in row..rows - 1 {
            grid.copy_row(next + 1, next);
        }
        grid.fill_row(rows - 1, None);
        trace!("collapse: squeezed empty row {}", row);
    }
}

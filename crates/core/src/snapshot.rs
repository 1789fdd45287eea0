use crate::types::{cell_code, Grid};

/// Observer view of the board: cell codes plus score and game-over flag.
///
/// Refilled in place by [`BoardEngine::snapshot_into`](crate::BoardEngine::snapshot_into), so a
/// renderer can keep one around and avoid allocating after the first fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cell codes: 0 = empty, 1.. = color
    pub cells: Vec<u8>,
    /// FNV-1a 64-bit hash of `cells`
    pub board_hash: u64,
    pub score: u32,
    pub game_over: bool,
}

impl BoardSnapshot {
    pub(crate) fn fill_from(&mut self, grid: &Grid, score: u32, game_over: bool) {
        self.rows = grid.rows();
        self.cols = grid.cols();
        self.cells.clear();
        self.cells
            .extend(grid.cells().iter().map(|&cell| cell_code(cell)));
        self.board_hash = fnv1a64(&self.cells);
        self.score = score;
        self.game_over = game_over;
    }

    /// Cell code at (row, col), None if out of bounds
    pub fn code_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells.clear();
        self.board_hash = 0;
        self.score = 0;
        self.game_over = false;
    }
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

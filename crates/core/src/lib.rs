//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of Clear Cell: a board of colored cells where a new random
//! row drops in from the top on every tick, and the player clicks cells to clear them before
//! the stack reaches the bottom row.
//!
//! It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: the random source is injected, so the same seed replays the same game
//! - **Testable**: every rule is reachable through [`BoardEngine`]'s public API
//! - **Allocation-free** on the hot paths: `tick` and `handle_click` only move cells around
//!   inside one flat buffer
//!
//! # Module Structure
//!
//! - [`engine`]: the [`BoardEngine`] rules (tick, click, collapse, game over)
//! - [`rng`]: the [`RandomSource`] seam and the deterministic [`SimpleRng`]
//! - [`error`]: [`InvalidIndex`], the only error a click can produce
//! - [`snapshot`]: reusable observer view of the board
//!
//! # Game Rules
//!
//! - **Tick**: all rows move down one step, a random full row spawns at the top. Frozen once
//!   the game is over.
//! - **Click**: the clicked colored cell and every same-colored cell touching it (including
//!   diagonals) are cleared, one point each. Fully empty rows then collapse.
//! - **Game over**: the bottom row holds any colored cell.
//!
//! # Example
//!
//! ```
//! use clear_cell_core::{BoardEngine, SimpleRng};
//!
//! let mut engine = BoardEngine::new(6, 4, SimpleRng::new(12345));
//! assert!(!engine.is_game_over());
//!
//! engine.tick();
//! let cleared = engine.handle_click(0, 0).unwrap();
//! assert!(cleared >= 1);
//! assert_eq!(engine.score(), cleared);
//!
//! // Clicks outside the board are rejected, rows first.
//! assert!(engine.handle_click(6, 0).is_err());
//! ```

pub mod engine;
pub mod error;
pub mod rng;
pub mod snapshot;

pub use clear_cell_types as types;

// Re-export commonly used types for convenience
pub use engine::BoardEngine;
pub use error::{Axis, InvalidIndex};
pub use rng::{random_cell, RandomSource, SimpleRng};
pub use snapshot::BoardSnapshot;

//! Clear Cell (workspace facade crate).
//!
//! Exposes `clear_cell::{core, types}` while the implementation lives in dedicated crates under
//! `crates/`.

pub use clear_cell_core as core;
pub use clear_cell_types as types;

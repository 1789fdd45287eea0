//! Engine tests - rules of tick, click, collapse and game over

use clear_cell::core::{Axis, BoardEngine, RandomSource, SimpleRng};
use clear_cell::types::{Color, Grid};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn grid(text: &str) -> Grid {
    Grid::parse(text).expect("valid grid text")
}

fn engine(text: &str) -> BoardEngine {
    BoardEngine::with_grid(grid(text), SimpleRng::new(12345))
}

/// Always yields the same color index.
struct FixedRng(u32);

impl RandomSource for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0
    }

    fn next_range(&mut self, max: u32) -> u32 {
        self.0 % max
    }
}

#[test]
fn test_new_engine_is_empty_and_not_over() {
    init_logging();
    for rows in 1..6 {
        let engine = BoardEngine::new(rows, 4, SimpleRng::new(1));
        assert!(!engine.is_game_over(), "{} rows should start playable", rows);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.grid().filled_count(), 0);
    }
}

#[test]
fn test_tick_shifts_rows_down_and_spawns_full_top_row() {
    init_logging();
    let mut engine = BoardEngine::new(5, 3, SimpleRng::new(777));

    engine.tick();
    engine.tick();
    let before = engine.grid().to_rows();
    engine.tick();
    let after = engine.grid().to_rows();

    for i in 0..4 {
        assert_eq!(after[i + 1], before[i], "row {} should move to {}", i, i + 1);
    }
    assert!(after[0].iter().all(|cell| cell.is_some()));
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_tick_uses_injected_source_left_to_right() {
    init_logging();
    let mut engine = BoardEngine::new(3, 4, FixedRng(2));
    engine.tick();

    let top = engine.grid().row(0).unwrap();
    assert!(top.iter().all(|&cell| cell == Some(Color::Blue)));
}

#[test]
fn test_same_seed_same_game() {
    init_logging();
    let mut a = BoardEngine::new(8, 6, SimpleRng::new(4242));
    let mut b = BoardEngine::new(8, 6, SimpleRng::new(4242));

    for step in 0..6 {
        a.tick();
        b.tick();
        assert_eq!(a.handle_click(0, step % 6), b.handle_click(0, step % 6));
        assert_eq!(a.grid(), b.grid());
    }
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_game_over_after_rows_ticks_and_tick_frozen() {
    init_logging();
    let mut engine = BoardEngine::new(3, 2, SimpleRng::new(9));

    engine.tick();
    engine.tick();
    assert!(!engine.is_game_over());
    engine.tick();
    assert!(engine.is_game_over());

    let frozen = engine.grid().clone();
    let rng_state = engine.rng().state();
    for _ in 0..5 {
        engine.tick();
    }
    assert_eq!(engine.grid(), &frozen);
    assert_eq!(engine.rng().state(), rng_state);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_single_row_board_is_over_after_first_tick() {
    let mut engine = BoardEngine::new(1, 3, SimpleRng::new(5));
    engine.tick();
    assert!(engine.is_game_over());
}

#[test]
fn test_invalid_row_reported_first() {
    let mut engine = engine("RG\nBY\n..");

    let err = engine.handle_click(3, 0).unwrap_err();
    assert_eq!(err.axis, Axis::Row);
    assert_eq!(err.message(), "Invalid row index");

    let err = engine.handle_click(-1, 0).unwrap_err();
    assert_eq!(err.axis, Axis::Row);

    // Both out of range: row wins.
    let err = engine.handle_click(7, 9).unwrap_err();
    assert_eq!(err.axis, Axis::Row);
    assert_eq!(err.index, 7);
    assert_eq!(err.len, 3);
}

#[test]
fn test_invalid_column_after_valid_row() {
    let mut engine = engine("RG\nBY\n..");

    let err = engine.handle_click(0, 2).unwrap_err();
    assert_eq!(err.axis, Axis::Column);
    assert_eq!(err.message(), "Invalid column index");

    let err = engine.handle_click(1, -3).unwrap_err();
    assert_eq!(err.axis, Axis::Column);
    assert_eq!(err.len, 2);
}

#[test]
fn test_invalid_click_does_not_mutate() {
    let mut engine = engine("..\nRR\n..");
    let before = engine.grid().clone();

    assert!(engine.handle_click(0, 5).is_err());
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_click_empty_cell_scores_nothing() {
    init_logging();
    let mut engine = engine("R.R\nRRR\n...");

    assert_eq!(engine.handle_click(0, 1).unwrap(), 0);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.grid(), &grid("R.R\nRRR\n..."));
}

#[test]
fn test_click_full_same_color_3x3_clears_everything() {
    init_logging();
    let mut engine = engine("RRR\nRRR\nRRR");
    assert!(engine.is_game_over());

    assert_eq!(engine.handle_click(1, 1).unwrap(), 9);
    assert_eq!(engine.score(), 9);
    assert_eq!(engine.grid().filled_count(), 0);
    assert!(!engine.is_game_over());
}

#[test]
fn test_click_isolated_corner_clears_only_itself() {
    let mut engine = engine("R..\n...\n..R");

    assert_eq!(engine.handle_click(0, 0).unwrap(), 1);
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.cell(0, 0), Some(None));
    assert_eq!(engine.grid().filled_count(), 1);
}

#[test]
fn test_click_clears_matching_neighbors_only() {
    // Center is B; matching neighbors are above-left, right and below.
    let mut engine = engine("BGR\nYBB\nRBG");

    assert_eq!(engine.handle_click(1, 1).unwrap(), 4);
    assert_eq!(engine.score(), 4);
    // No row became empty, so nothing moved.
    assert_eq!(engine.grid(), &grid(".GR\nY..\nR.G"));
}

#[test]
fn test_click_edge_cell_bounds() {
    // Bottom-right corner: only left, above and above-left exist.
    let mut engine = engine("GGG\nGYY\nGYY");

    assert_eq!(engine.handle_click(2, 2).unwrap(), 4);
    assert_eq!(engine.grid(), &grid("GGG\nG..\nG.."));
}

#[test]
fn test_score_accumulates_across_clicks() {
    let mut engine = engine("RRG\nBBG\nYYG");

    assert_eq!(engine.handle_click(0, 0).unwrap(), 2);
    assert_eq!(engine.handle_click(2, 2).unwrap(), 2);
    assert_eq!(engine.score(), 4);
}

#[test]
fn test_cleared_row_collapses_up() {
    init_logging();
    let mut engine = engine("GG\nRR\nBB\n..");

    assert_eq!(engine.handle_click(1, 0).unwrap(), 2);
    assert_eq!(engine.grid(), &grid("GG\nBB\n..\n.."));
}

#[test]
fn test_collapse_leaves_promoted_empty_row_for_next_pass() {
    let mut engine = engine("R.\n..\nGG\n..");

    // Clearing (0,0) empties row 0; the empty row 1 is pulled into row 0 and not re-checked.
    engine.handle_click(0, 0).unwrap();
    assert_eq!(engine.grid(), &grid("..\nGG\n..\n.."));

    // Any later click (even on an empty cell) runs another pass.
    assert_eq!(engine.handle_click(0, 0).unwrap(), 0);
    assert_eq!(engine.grid(), &grid("GG\n..\n..\n.."));
}

#[test]
fn test_collapse_on_settled_board_is_noop() {
    let settled = grid("RG\nYB\n..\n..");
    let mut engine = BoardEngine::with_grid(settled.clone(), SimpleRng::new(1));

    for _ in 0..3 {
        engine.handle_click(3, 1).unwrap();
        assert_eq!(engine.grid(), &settled);
    }
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_clearing_bottom_row_lifts_game_over() {
    init_logging();
    let mut engine = engine("R\nG");
    assert!(engine.is_game_over());

    assert_eq!(engine.handle_click(1, 0).unwrap(), 1);
    assert!(!engine.is_game_over());
    assert_eq!(engine.grid(), &grid("R\n."));

    // Ticks resume once the bottom row is clear.
    engine.tick();
    assert_eq!(engine.cell(1, 0), Some(Some(Color::Red)));
    assert!(engine.is_game_over());
}

#[test]
fn test_set_cell_does_not_score() {
    let mut engine = BoardEngine::new(3, 3, SimpleRng::new(1));
    assert!(engine.set_cell(2, 2, Some(Color::Green)));
    assert!(!engine.set_cell(3, 0, Some(Color::Green)));
    assert_eq!(engine.score(), 0);
    assert!(engine.is_game_over());
}

#[test]
fn test_error_propagates_through_question_mark() {
    fn play(engine: &mut BoardEngine) -> Result<u32, Box<dyn std::error::Error>> {
        let cleared = engine.handle_click(0, 0)?;
        let more = engine.handle_click(10, 0)?;
        Ok(cleared + more)
    }

    let mut engine = engine("R.\n..");
    let err = play(&mut engine).unwrap_err();
    assert!(err.to_string().starts_with("Invalid row index"));
    assert_eq!(engine.score(), 1);
}

//! Rendering integration tests: game state -> framebuffer -> terminal bytes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_runner::core::{GameConfig, GameState};
use tui_runner::term::{encode_clear_into, encode_frame_into, GameView};
use tui_runner::types::{GRID_COLS, GRID_ROWS, INSTRUCTIONS, PLAYER_COL};

#[test]
fn default_frame_layout() {
    let state = GameState::new(GameConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let fb = GameView::new().render(&state, &mut rng);

    assert_eq!(fb.width(), GRID_COLS);
    assert_eq!(fb.height(), GRID_ROWS + 2);
    assert_eq!(fb.row_text(0).trim(), "SCORE: 0");
    assert_eq!(fb.row_text(GRID_ROWS), "W".repeat(GRID_COLS as usize));
    assert_eq!(fb.get(PLAYER_COL, GRID_ROWS - 1).unwrap().ch, '>');
    assert_eq!(fb.row_text(GRID_ROWS + 1).trim(), INSTRUCTIONS);
}

#[test]
fn encoded_frame_carries_text_lines() {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..20 {
        state.tick(false, &mut rng);
    }
    let fb = GameView::new().render(&state, &mut rng);

    let mut out = Vec::new();
    encode_clear_into(&mut out).unwrap();
    encode_frame_into(&fb, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);

    assert!(text.contains("SCORE: 0"));
    assert!(text.contains(INSTRUCTIONS));
    assert_eq!(text.matches("\r\n").count(), usize::from(fb.height()) - 1);
}

#[test]
fn frame_text_tracks_scrolling_trail() {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..5 {
        state.tick(false, &mut rng);
    }
    let text = GameView::new().render(&state, &mut rng).to_text();
    let head_line = text.lines().nth(usize::from(GRID_ROWS) - 1).unwrap();

    let col = usize::from(PLAYER_COL);
    assert_eq!(&head_line[col - 5..=col], "----->");
}

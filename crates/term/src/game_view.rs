//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//!                SCORE: 3              <- centered over the grid width
//! ...grid rows, one char per cell...
//!       SPACE TO JUMP. ESC TO QUIT.    <- centered over the grid width
//! score: 3                             <- debug lines (optional)
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{DebugSnapshot, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellKind, INSTRUCTIONS, OBSTACLE_SYMBOLS};

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const FLOOR: CellStyle = CellStyle {
    fg: Rgb::new(120, 110, 90),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: true,
};
const OBSTACLE: CellStyle = CellStyle {
    fg: Rgb::new(230, 90, 70),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};
const HEAD: CellStyle = CellStyle {
    fg: Rgb::new(250, 210, 80),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};
const TRAIL: CellStyle = CellStyle::fg(Rgb::new(110, 200, 220));

/// Renders the runner grid with its score and instruction lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    debug: bool,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the internal state under the instructions.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Framebuffer size needed for `state`: `(width, height)`.
    pub fn frame_size(&self, state: &GameState) -> (u16, u16) {
        let grid = state.grid();
        let mut width = grid.cols().max(INSTRUCTIONS.len() as u16);
        let mut height = grid.rows() + 2;
        if self.debug {
            let lines = state.debug_snapshot().lines();
            for line in &lines {
                width = width.max(line.chars().count() as u16);
            }
            height += lines.len() as u16;
        }
        (width, height)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Obstacle glyphs are drawn from `rng` on every call, so the same
    /// obstacle may show a different symbol from one frame to the next.
    pub fn render_into<R: Rng>(&self, state: &GameState, fb: &mut FrameBuffer, rng: &mut R) {
        let (width, height) = self.frame_size(state);
        fb.resize(width, height);
        fb.clear(Default::default());

        let grid = state.grid();
        let cols = grid.cols();

        let score = format!("SCORE: {}", state.score());
        fb.put_str(0, 0, &centered(&score, cols as usize), TEXT);

        for row in 0..grid.rows() {
            let y = row + 1;
            for (x, kind) in grid.row(row).iter().enumerate() {
                let (ch, style) = glyph(*kind, rng);
                fb.put_char(x as u16, y, ch, style);
            }
        }

        let instructions_y = grid.rows() + 1;
        fb.put_str(0, instructions_y, &centered(INSTRUCTIONS, cols as usize), TEXT);

        if self.debug {
            self.draw_debug(fb, &state.debug_snapshot(), instructions_y + 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: Rng>(&self, state: &GameState, rng: &mut R) -> FrameBuffer {
        let (width, height) = self.frame_size(state);
        let mut fb = FrameBuffer::new(width, height);
        self.render_into(state, &mut fb, rng);
        fb
    }

    fn draw_debug(&self, fb: &mut FrameBuffer, snap: &DebugSnapshot, start_y: u16) {
        let style = CellStyle { dim: true, ..TEXT };
        for (i, line) in snap.lines().iter().enumerate() {
            fb.put_str(0, start_y + i as u16, line, style);
        }
    }
}

/// Left-pad `text` so it sits centered over `width` columns.
///
/// Text wider than `width` is returned unpadded.
pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = (len.max(width) - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn glyph<R: Rng>(kind: CellKind, rng: &mut R) -> (char, CellStyle) {
    let style = match kind {
        CellKind::Empty => TEXT,
        CellKind::Wall => FLOOR,
        CellKind::Obstacle => OBSTACLE,
        CellKind::PlayerHead => HEAD,
        CellKind::PlayerAscending
        | CellKind::PlayerDescending
        | CellKind::PlayerForward
        | CellKind::PlayerJumpTop => TRAIL,
    };
    let ch = kind.symbol().unwrap_or_else(|| random_obstacle_symbol(rng));
    (ch, style)
}

fn random_obstacle_symbol<R: Rng>(rng: &mut R) -> char {
    OBSTACLE_SYMBOLS.choose(rng).copied().unwrap_or('#')
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Rows**: 32 (row 31 is the permanent floor)
//! - **Columns**: 80
//! - **Player column**: 20 (the player never moves horizontally)
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 10 | Pacing sleep between ticks |
//! | `JUMP_DISTANCE` | 11 | Ticks in one jump arc (odd, > 3) |
//! | `JUMP_HEIGHT` | 5 | Peak offset in rows (odd, > 3) |
//! | `MIN_OBSTACLE_HEIGHT` | 1 | Shortest obstacle |
//! | `MAX_OBSTACLE_HEIGHT` | 4 | Tallest obstacle, always below the jump height |
//! | `MIN_OBSTACLE_GAP` | 11 | Gap before random spawns are allowed |
//! | `MAX_OBSTACLE_GAP` | 80 | Gap that forces a spawn |
//! | `OBSTACLE_SPAWN_CHANCE` | 25 | Percent chance per eligible tick |
//!
//! # Examples
//!
//! ```
//! use tui_runner_types::{CellKind, InputIntent, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(CellKind::Wall.symbol(), Some('W'));
//! assert_eq!(CellKind::Obstacle.symbol(), None);
//! assert!(CellKind::PlayerHead.is_player());
//!
//! assert_eq!(InputIntent::Jump.as_str(), "jump");
//!
//! assert_eq!(GRID_ROWS, 32);
//! assert_eq!(GRID_COLS, 80);
//! ```

/// Grid height in rows (the last row is the floor)
pub const GRID_ROWS: u16 = 32;

/// Grid width in columns
pub const GRID_COLS: u16 = 80;

/// Fixed column of the player head
pub const PLAYER_COL: u16 = 20;

/// Pacing interval between ticks in milliseconds
pub const TICK_MS: u32 = 10;

/// Jump arc length in ticks. Must be odd and greater than 3.
pub const JUMP_DISTANCE: u32 = 11;

/// Jump peak in rows. Must be odd and greater than 3.
pub const JUMP_HEIGHT: u32 = 5;

/// Shortest obstacle in rows
pub const MIN_OBSTACLE_HEIGHT: u32 = 1;

/// Tallest obstacle in rows (always clearable)
pub const MAX_OBSTACLE_HEIGHT: u32 = JUMP_HEIGHT - 1;

/// Columns that must pass before a random spawn is considered
pub const MIN_OBSTACLE_GAP: u32 = 11;

/// Columns after which a spawn is forced
pub const MAX_OBSTACLE_GAP: u32 = 80;

/// Spawn chance in percent once `MIN_OBSTACLE_GAP` is exceeded
pub const OBSTACLE_SPAWN_CHANCE: u32 = 25;

pub const EMPTY_SYMBOL: char = ' ';
pub const WALL_SYMBOL: char = 'W';
pub const PLAYER_SYMBOL_ASCENDING: char = '/';
pub const PLAYER_SYMBOL_DESCENDING: char = '\\';
pub const PLAYER_SYMBOL_FORWARD: char = '-';
pub const PLAYER_SYMBOL_HEAD: char = '>';
pub const PLAYER_SYMBOL_JUMP_TOP: char = '_';

/// Obstacle glyphs. One is picked at random every time an obstacle cell is drawn.
pub const OBSTACLE_SYMBOLS: [char; 4] = ['#', '+', '?', '!'];

/// Instruction line shown under the grid
pub const INSTRUCTIONS: &str = "SPACE TO JUMP. ESC TO QUIT.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_defaults_keep_obstacles_jumpable() {
        assert!(JUMP_DISTANCE % 2 == 1 && JUMP_DISTANCE > 3);
        assert!(JUMP_HEIGHT % 2 == 1 && JUMP_HEIGHT > 3);
        assert!(MAX_OBSTACLE_HEIGHT < JUMP_HEIGHT);
        assert!(MIN_OBSTACLE_HEIGHT <= MAX_OBSTACLE_HEIGHT);
        assert!(MIN_OBSTACLE_GAP < MAX_OBSTACLE_GAP);
        assert!(PLAYER_COL < GRID_COLS - 1);
    }
}

/// State of a single grid cell
///
/// The player is drawn as a head plus a trail of sprites left behind as the
/// grid scrolls. The trail sprite depends on the phase of the jump:
/// - **PlayerForward**: running on the ground
/// - **PlayerAscending**: rising part of the arc
/// - **PlayerJumpTop**: apex of the arc
/// - **PlayerDescending**: falling part of the arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Obstacle,
    PlayerHead,
    PlayerAscending,
    PlayerDescending,
    PlayerForward,
    PlayerJumpTop,
}

impl CellKind {
    /// Fixed glyph for this cell.
    ///
    /// Returns `None` for `Obstacle`, whose glyph is randomized at draw time.
    pub fn symbol(&self) -> Option<char> {
        match self {
            CellKind::Empty => Some(EMPTY_SYMBOL),
            CellKind::Wall => Some(WALL_SYMBOL),
            CellKind::Obstacle => None,
            CellKind::PlayerHead => Some(PLAYER_SYMBOL_HEAD),
            CellKind::PlayerAscending => Some(PLAYER_SYMBOL_ASCENDING),
            CellKind::PlayerDescending => Some(PLAYER_SYMBOL_DESCENDING),
            CellKind::PlayerForward => Some(PLAYER_SYMBOL_FORWARD),
            CellKind::PlayerJumpTop => Some(PLAYER_SYMBOL_JUMP_TOP),
        }
    }

    /// True for the head and every trail sprite
    pub fn is_player(&self) -> bool {
        matches!(
            self,
            CellKind::PlayerHead
                | CellKind::PlayerAscending
                | CellKind::PlayerDescending
                | CellKind::PlayerForward
                | CellKind::PlayerJumpTop
        )
    }
}

/// Player intents produced by the input layer
///
/// Only two intents exist. Every other key is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    /// Start a jump (ignored while already airborne)
    Jump,
    /// Stop the game
    Quit,
}

impl InputIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputIntent::Jump => "jump",
            InputIntent::Quit => "quit",
        }
    }
}

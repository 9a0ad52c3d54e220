//! Error types for the game core.

use thiserror::Error;

/// A rule broken by a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("jump distance must be odd and greater than 3 (got {0})")]
    JumpDistance(u32),
    #[error("jump height must be odd and greater than 3 (got {0})")]
    JumpHeight(u32),
    #[error("obstacle heights must satisfy 1 <= min <= max < jump height (min {min}, max {max}, jump {jump})")]
    ObstacleHeight { min: u32, max: u32, jump: u32 },
    #[error("min obstacle gap {min} exceeds max gap {max}")]
    ObstacleGap { min: u32, max: u32 },
    #[error("spawn chance must be a percentage (got {0})")]
    SpawnChance(u32),
    #[error("grid {rows}x{cols} cannot fit a jump of height {jump} at column {player_col}")]
    GridTooSmall {
        rows: u16,
        cols: u16,
        jump: u32,
        player_col: u16,
    },
}

#[derive(Debug, Error)]
pub enum RunnerError {
    /// A game loop was started on shared state that is already running.
    #[error("game loop is already running")]
    AlreadyRunning,
    #[error("invalid game config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

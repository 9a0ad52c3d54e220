//! Game tuning gathered from the constants in `tui_runner_types`.
//!
//! The defaults reproduce the shipped game. Tests and benches build smaller or
//! differently tuned games through the `with_*` setters, and `validate` keeps
//! every config inside the rules the physics relies on (odd arcs, jumpable
//! obstacles, a grid tall enough for the peak of the jump).

use crate::error::ConfigError;
use crate::types::{
    GRID_COLS, GRID_ROWS, JUMP_DISTANCE, JUMP_HEIGHT, MAX_OBSTACLE_GAP, MAX_OBSTACLE_HEIGHT,
    MIN_OBSTACLE_GAP, MIN_OBSTACLE_HEIGHT, OBSTACLE_SPAWN_CHANCE, PLAYER_COL, TICK_MS,
};

/// Shape of the jump arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpArc {
    /// Ticks in a full arc
    pub distance: u32,
    /// Peak offset in rows
    pub height: u32,
}

impl JumpArc {
    pub const fn new(distance: u32, height: u32) -> Self {
        Self { distance, height }
    }

    /// Ticks spent ascending (integer division of the distance).
    pub fn ascend_steps(&self) -> u32 {
        self.distance / 2
    }

    /// Vertical offset applied per tick while airborne.
    pub fn step_size(&self) -> f32 {
        self.height as f32 / self.ascend_steps() as f32
    }

    /// Step count at which the jump ends and the player is idle again.
    pub fn landing_step(&self) -> u32 {
        self.distance - 1
    }
}

impl Default for JumpArc {
    fn default() -> Self {
        Self::new(JUMP_DISTANCE, JUMP_HEIGHT)
    }
}

/// Obstacle spawner tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleConfig {
    pub min_height: u32,
    pub max_height: u32,
    pub min_gap: u32,
    pub max_gap: u32,
    /// Percent chance of a spawn on an eligible tick
    pub spawn_chance: u32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            min_height: MIN_OBSTACLE_HEIGHT,
            max_height: MAX_OBSTACLE_HEIGHT,
            min_gap: MIN_OBSTACLE_GAP,
            max_gap: MAX_OBSTACLE_GAP,
            spawn_chance: OBSTACLE_SPAWN_CHANCE,
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub player_col: u16,
    pub tick_ms: u32,
    pub jump: JumpArc,
    pub obstacles: ObstacleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            player_col: PLAYER_COL,
            tick_ms: TICK_MS,
            jump: JumpArc::default(),
            obstacles: ObstacleConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn with_grid(mut self, rows: u16, cols: u16, player_col: u16) -> Self {
        self.rows = rows;
        self.cols = cols;
        self.player_col = player_col;
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub fn with_jump(mut self, distance: u32, height: u32) -> Self {
        self.jump = JumpArc::new(distance, height);
        self
    }

    pub fn with_obstacles(mut self, obstacles: ObstacleConfig) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Row the player stands on (directly above the floor).
    pub fn base_row(&self) -> u16 {
        self.rows - 2
    }

    /// Check every rule the simulation depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let jump = self.jump;
        if jump.distance % 2 == 0 || jump.distance <= 3 {
            return Err(ConfigError::JumpDistance(jump.distance));
        }
        if jump.height % 2 == 0 || jump.height <= 3 {
            return Err(ConfigError::JumpHeight(jump.height));
        }

        let obs = self.obstacles;
        if obs.min_height == 0 || obs.min_height > obs.max_height || obs.max_height >= jump.height
        {
            return Err(ConfigError::ObstacleHeight {
                min: obs.min_height,
                max: obs.max_height,
                jump: jump.height,
            });
        }
        if obs.min_gap > obs.max_gap {
            return Err(ConfigError::ObstacleGap {
                min: obs.min_gap,
                max: obs.max_gap,
            });
        }
        if obs.spawn_chance > 100 {
            return Err(ConfigError::SpawnChance(obs.spawn_chance));
        }

        // The head at the peak sits `height` rows above the base row, which
        // itself sits above the floor. The player column needs a column to
        // its right to scroll from.
        let fits_vertically = u32::from(self.rows) >= jump.height.saturating_add(2);
        let fits_horizontally =
            self.player_col >= 1 && u32::from(self.player_col) + 1 < u32::from(self.cols);
        if !fits_vertically || !fits_horizontally {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
                jump: jump.height,
                player_col: self.player_col,
            });
        }

        Ok(())
    }
}

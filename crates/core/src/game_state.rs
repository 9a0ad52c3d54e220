//! Game state - the per-tick simulation pipeline
//!
//! [`GameState::tick`] runs everything that happens between two frames, in a
//! fixed order:
//!
//! 1. If the previous tick latched a collision, stop (nothing else changes).
//! 2. Score: an obstacle cell under the player column on the base row is one
//!    obstacle cleared.
//! 3. Advance the jump arc (a pending jump request starts a jump first).
//! 4. Scroll the grid, re-place the head, latch a collision if the head lands
//!    on an obstacle.
//! 5. Run the obstacle generator.
//!
//! Rendering happens before `tick` and pacing after it; both belong to the
//! caller. Because the collision latch is only acted on at the start of the
//! next tick, the frame showing the impact is always drawn once.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::TileGrid;
use crate::obstacles::ObstacleGenerator;
use crate::player::Player;
use crate::snapshot::DebugSnapshot;
use crate::types::CellKind;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Something that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// An obstacle passed under the player
    Scored { score: u32 },
    JumpStarted,
    Landed,
    ObstacleSpawned { height: u32 },
    /// The head moved onto an obstacle; the game stops next tick
    Collided,
    /// The latched collision stopped the game
    GameOver,
}

/// Events emitted by one tick. A tick can emit each kind at most once.
pub type TickEvents = ArrayVec<TickEvent, 6>;

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: TileGrid,
    player: Player,
    obstacles: ObstacleGenerator,
    score: u32,
    colliding: bool,
    state: RunState,
    ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl GameState {
    /// Create a game from a validated config.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let mut grid = TileGrid::new(config.rows, config.cols);
        grid.set(config.base_row(), config.player_col, CellKind::PlayerHead);

        Self {
            config,
            grid,
            player: Player::new(),
            obstacles: ObstacleGenerator::new(),
            score: 0,
            colliding: false,
            state: RunState::Running,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &ObstacleGenerator {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once the head has landed on an obstacle
    pub fn colliding(&self) -> bool {
        self.colliding
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state == RunState::Stopped
    }

    /// Ticks simulated so far (the stopping tick is not counted)
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Stop the game from outside (quit request).
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Row the head currently occupies
    pub fn head_row(&self) -> u16 {
        self.config.base_row() - self.player.row_offset()
    }

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot::from_state(self)
    }

    /// Simulate one tick.
    ///
    /// `jump_requested` is the jump intent sampled since the last tick. It is
    /// dropped if the player is already airborne.
    pub fn tick<R: Rng>(&mut self, jump_requested: bool, rng: &mut R) -> TickEvents {
        let mut events = TickEvents::new();

        if self.state == RunState::Stopped {
            return events;
        }
        if self.colliding {
            self.state = RunState::Stopped;
            events.push(TickEvent::GameOver);
            return events;
        }

        self.ticks += 1;

        if self.update_score() {
            events.push(TickEvent::Scored { score: self.score });
        }

        if jump_requested && self.player.start_jump() {
            events.push(TickEvent::JumpStarted);
        }
        if self.player.advance(&self.config.jump) {
            events.push(TickEvent::Landed);
        }

        if self.scroll_and_place_head() {
            events.push(TickEvent::Collided);
        }

        if let Some(height) = self
            .obstacles
            .update(&self.config.obstacles, &mut self.grid, rng)
        {
            events.push(TickEvent::ObstacleSpawned { height });
        }

        events
    }

    fn update_score(&mut self) -> bool {
        let beneath = self
            .grid
            .get(self.config.base_row(), self.config.player_col);
        if beneath == Some(CellKind::Obstacle) {
            self.score += 1;
            return true;
        }
        false
    }

    /// Returns true when the head's destination cell held an obstacle.
    fn scroll_and_place_head(&mut self) -> bool {
        let trailing = self.player.trailing_cell(&self.config.jump);
        self.grid.scroll_left(trailing);

        let row = self.head_row();
        let previous = self
            .grid
            .replace(row, self.config.player_col, CellKind::PlayerHead);
        self.colliding = previous == Some(CellKind::Obstacle);
        self.colliding
    }
}

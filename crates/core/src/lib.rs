//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the runner's rules and per-tick simulation. It has
//! **no dependencies** on the terminal or on keyboard input, which makes it:
//!
//! - **Deterministic**: randomness is injected as a `rand::Rng`, so a seeded RNG
//!   replays the same obstacle course
//! - **Testable**: every rule can be driven tick by tick without a terminal
//! - **Cheap per tick**: the grid is allocated once and tick events are
//!   collected in a fixed-capacity `ArrayVec`
//!
//! # Module Structure
//!
//! - [`config`]: `GameConfig` built from the tuning constants, with validation
//! - [`grid`]: the scrolling tile buffer with its permanent floor row
//! - [`player`]: the discrete jump arc
//! - [`obstacles`]: the gap-and-height obstacle spawner
//! - [`game_state`]: the tick pipeline tying the above together
//! - [`snapshot`]: read-only state for the debug overlay
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tui_runner_core::{GameConfig, GameState, TickEvent};
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // The first tick always spawns an obstacle at the right edge.
//! let events = game.tick(false, &mut rng);
//! assert!(events.iter().any(|e| matches!(e, TickEvent::ObstacleSpawned { .. })));
//!
//! // Jump on the next tick.
//! game.tick(true, &mut rng);
//! assert!(game.player().jumping);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod obstacles;
pub mod player;
pub mod snapshot;

pub use tui_runner_types as types;

pub use config::{GameConfig, JumpArc, ObstacleConfig};
pub use error::{ConfigError, RunnerError};
pub use game_state::{GameState, RunState, TickEvent, TickEvents};
pub use grid::TileGrid;
pub use obstacles::ObstacleGenerator;
pub use player::Player;
pub use snapshot::DebugSnapshot;

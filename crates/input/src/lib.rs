//! Terminal input for the game loop.
//!
//! This module is intentionally independent of the game core. It maps
//! `crossterm` key events into [`crate::types::InputIntent`] and runs a
//! background polling task that publishes those intents through
//! [`SharedInputState`], a handful of atomics the tick loop reads without
//! blocking.

pub mod map;
pub mod shared;
pub mod source;
pub mod task;

pub use tui_runner_types as types;

pub use map::{is_interrupt, map_key_event};
pub use shared::SharedInputState;
pub use source::{CrosstermKeys, KeySource};
pub use task::{InputTask, POLL_INTERVAL_MS};

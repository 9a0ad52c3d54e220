//! TUI Runner (workspace facade crate).
//!
//! Re-exports the member crates under `tui_runner::{core,input,term,types}`
//! and hosts the game loop controller that wires them together.

pub use tui_runner_core as core;
pub use tui_runner_input as input;
pub use tui_runner_term as term;
pub use tui_runner_types as types;

pub mod controller;
pub mod logging;

pub use controller::{GameLoop, GameSummary, StopReason};

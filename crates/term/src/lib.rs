//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The game state
//! is drawn into a simple framebuffer (pure, testable), and a [`FrameSink`]
//! puts that framebuffer on screen.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal concerns
//! - Keep the plain-text layout (score, grid, instructions) testable without a tty
//! - Hide crossterm behind a two-call sink (clear, write)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{centered, GameView};
pub use renderer::{encode_clear_into, encode_frame_into, FrameSink, TerminalRenderer};

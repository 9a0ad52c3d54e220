//! Terminal runner (default binary).
//!
//! Takes over the terminal, runs one game, restores the terminal and then
//! prints the last frame so a game over stays visible in the shell.

use std::sync::Arc;

use anyhow::Result;

use tui_runner::core::{GameConfig, GameState, RunnerError};
use tui_runner::input::{CrosstermKeys, SharedInputState};
use tui_runner::term::{centered, GameView, TerminalRenderer};
use tui_runner::{logging, GameLoop, GameSummary, StopReason};

fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = GameConfig::default();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    println!("{}", summary.final_frame);
    if summary.reason == StopReason::Collision {
        println!("{}", centered("GAME OVER", usize::from(config.cols)));
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<GameSummary> {
    let state = GameState::new(config).map_err(RunnerError::InvalidConfig)?;
    let view = GameView::new().with_debug(cfg!(feature = "debug-overlay"));
    let shared = Arc::new(SharedInputState::new());

    let mut game = GameLoop::new(state, term, shared).with_view(view);
    game.run(CrosstermKeys)
}

//! Game loop controller.
//!
//! Owns the game state and drives it in real time:
//!
//! ```text
//! while running:
//!     render            (clear + write the whole frame)
//!     tick              (stops here if the last tick latched a collision)
//!     sleep tick_ms
//! ```
//!
//! Input arrives asynchronously from an [`InputTask`] through
//! [`SharedInputState`]; the loop never waits on it. On exit the input task is
//! signalled and joined before `run` returns.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{GameState, RunnerError, TickEvent, TickEvents};
use crate::input::{InputTask, KeySource, SharedInputState};
use crate::term::{FrameBuffer, FrameSink, GameView};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A quit key was pressed
    Quit,
    /// The player ran into an obstacle
    Collision,
}

/// Result of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub ticks: u64,
    pub reason: StopReason,
    /// Plain text of the last frame drawn
    pub final_frame: String,
}

pub struct GameLoop<S: FrameSink, R: Rng = StdRng> {
    state: GameState,
    view: GameView,
    sink: S,
    shared: Arc<SharedInputState>,
    rng: R,
    tick: Duration,
    fb: FrameBuffer,
}

impl<S: FrameSink> GameLoop<S, StdRng> {
    /// Create a loop with an entropy-seeded RNG.
    pub fn new(state: GameState, sink: S, shared: Arc<SharedInputState>) -> Self {
        Self::with_rng(state, sink, shared, StdRng::from_entropy())
    }
}

impl<S: FrameSink, R: Rng> GameLoop<S, R> {
    pub fn with_rng(state: GameState, sink: S, shared: Arc<SharedInputState>, rng: R) -> Self {
        let tick = Duration::from_millis(u64::from(state.config().tick_ms));
        Self {
            state,
            view: GameView::new(),
            sink,
            shared,
            rng,
            tick,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn with_view(mut self, view: GameView) -> Self {
        self.view = view;
        self
    }

    /// Override the pacing interval taken from the config.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn shared(&self) -> &Arc<SharedInputState> {
        &self.shared
    }

    /// Run until quit or collision.
    ///
    /// Fails with [`RunnerError::AlreadyRunning`] without touching any state
    /// if the shared input state already belongs to a running loop.
    pub fn run<K>(&mut self, keys: K) -> Result<GameSummary>
    where
        K: KeySource + Send + 'static,
    {
        if !self.shared.try_start() {
            return Err(RunnerError::AlreadyRunning.into());
        }
        log::info!(
            "game start: {}x{} grid, tick {:?}",
            self.state.config().cols,
            self.state.config().rows,
            self.tick
        );

        let input = match InputTask::spawn(keys, Arc::clone(&self.shared)) {
            Ok(task) => task,
            Err(e) => {
                self.shared.request_quit();
                return Err(e.into());
            }
        };

        let result = self.run_ticks();

        self.shared.request_quit();
        if let Err(e) = input.stop() {
            log::warn!("input task ended with error: {}", e);
        }

        let reason = result?;
        let summary = GameSummary {
            score: self.state.score(),
            ticks: self.state.ticks(),
            reason,
            final_frame: self.fb.to_text(),
        };
        log::info!(
            "game stopped ({:?}) after {} ticks, score {}",
            summary.reason,
            summary.ticks,
            summary.score
        );
        Ok(summary)
    }

    fn run_ticks(&mut self) -> Result<StopReason> {
        while self.shared.is_running() {
            self.view.render_into(&self.state, &mut self.fb, &mut self.rng);
            self.sink.present(&self.fb)?;

            let jump = self.shared.take_jump();
            let events = self.state.tick(jump, &mut self.rng);
            log_events(&events);

            if self.state.is_stopped() {
                break;
            }

            thread::sleep(self.tick);
        }

        self.state.stop();
        Ok(self.stop_reason())
    }

    fn stop_reason(&self) -> StopReason {
        if self.state.colliding() {
            StopReason::Collision
        } else {
            StopReason::Quit
        }
    }
}

fn log_events(events: &TickEvents) {
    for event in events {
        match event {
            TickEvent::Scored { score } => log::debug!("obstacle cleared, score {}", score),
            TickEvent::JumpStarted => log::debug!("jump"),
            TickEvent::Landed => log::debug!("landed"),
            TickEvent::ObstacleSpawned { height } => {
                log::debug!("obstacle spawned, height {}", height)
            }
            TickEvent::Collided => log::info!("collision"),
            TickEvent::GameOver => log::info!("game over"),
        }
    }
}

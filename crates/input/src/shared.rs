//! Flags shared between the tick loop and the input task.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::types::InputIntent;

/// Intents published by the input task and consumed by the tick loop.
///
/// - `running`: set when a loop starts, cleared by a quit request
/// - `jump_requested`: set on a jump key, taken (swapped to false) once per tick
/// - `stop`: tells the input task to exit; only the loop sets it
#[derive(Debug, Default)]
pub struct SharedInputState {
    running: AtomicBool,
    jump_requested: AtomicBool,
    stop: AtomicBool,
}

impl SharedInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the loop as running.
    ///
    /// Returns false if it already was; the caller must not start a second loop.
    pub fn try_start(&self) -> bool {
        let started = self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if started {
            self.jump_requested.store(false, Ordering::Release);
            self.stop.store(false, Ordering::Release);
        }
        started
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn request_quit(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn request_jump(&self) {
        self.jump_requested.store(true, Ordering::Release);
    }

    /// Consume a pending jump request.
    pub fn take_jump(&self) -> bool {
        self.jump_requested.swap(false, Ordering::AcqRel)
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// Publish an intent.
    pub fn apply(&self, intent: InputIntent) {
        match intent {
            InputIntent::Jump => self.request_jump(),
            InputIntent::Quit => self.request_quit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_exclusive() {
        let shared = SharedInputState::new();
        assert!(!shared.is_running());
        assert!(shared.try_start());
        assert!(shared.is_running());
        assert!(!shared.try_start());

        shared.request_quit();
        assert!(!shared.is_running());
        assert!(shared.try_start());
    }

    #[test]
    fn jump_is_taken_once() {
        let shared = SharedInputState::new();
        assert!(!shared.take_jump());
        shared.apply(InputIntent::Jump);
        shared.apply(InputIntent::Jump);
        assert!(shared.take_jump());
        assert!(!shared.take_jump());
    }

    #[test]
    fn quit_does_not_stop_input_task() {
        let shared = SharedInputState::new();
        shared.try_start();
        shared.apply(InputIntent::Quit);
        assert!(!shared.is_running());
        assert!(!shared.stop_requested());
        shared.request_stop();
        assert!(shared.stop_requested());
    }
}

//! Background input polling.
//!
//! The task polls its [`KeySource`] with a short timeout so it notices the stop
//! flag promptly, and it never touches game state directly: everything goes
//! through [`SharedInputState`].

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::map::map_key_event;
use crate::shared::SharedInputState;
use crate::source::KeySource;

/// Upper bound on how long the task waits for a key before re-checking `stop`.
pub const POLL_INTERVAL_MS: u64 = 5;

/// Handle to the running input thread.
pub struct InputTask {
    shared: Arc<SharedInputState>,
    handle: Option<JoinHandle<io::Result<()>>>,
}

impl InputTask {
    /// Spawn the polling thread.
    pub fn spawn<K>(keys: K, shared: Arc<SharedInputState>) -> io::Result<Self>
    where
        K: KeySource + Send + 'static,
    {
        let thread_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || poll_loop(keys, &thread_shared))?;

        Ok(Self {
            shared,
            handle: Some(handle),
        })
    }

    /// True once the thread has returned, whether stopped or failed.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Signal the thread to exit and wait for it.
    ///
    /// Returns the error that ended polling early, if any.
    pub fn stop(mut self) -> io::Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> io::Result<()> {
        self.shared.request_stop();
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| io::Error::other("input thread panicked"))?,
            None => Ok(()),
        }
    }
}

impl Drop for InputTask {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

fn poll_loop<K: KeySource>(mut keys: K, shared: &SharedInputState) -> io::Result<()> {
    let timeout = Duration::from_millis(POLL_INTERVAL_MS);
    while !shared.stop_requested() {
        if !keys.poll_key(timeout)? {
            continue;
        }
        let Some(key) = keys.read_key()? else {
            continue;
        };
        if let Some(intent) = map_key_event(key) {
            log::debug!("input: {}", intent.as_str());
            shared.apply(intent);
        }
    }
    Ok(())
}

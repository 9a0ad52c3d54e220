//! Non-blocking key sources.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

/// A polling keyboard.
///
/// `poll_key` waits at most `timeout` for a key to become available;
/// `read_key` then returns it. Non-key events read as `None`.
pub trait KeySource {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Key source backed by the crossterm event queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

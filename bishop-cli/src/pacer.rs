//! Pacing between frames, cut short by interrupts.

use art::Error;
use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::Duration,
};

/// Sleeps between frames until the user interrupts the walk.
#[derive(Debug)]
pub struct Pacer {
    pause: Duration,
    interrupts: Option<Receiver<()>>,
}

impl Pacer {
    /// Create a pacer which wakes up early when a message arrives on
    /// `interrupts`.
    pub fn new(pause: Duration, interrupts: Receiver<()>) -> Self {
        Self {
            pause,
            interrupts: Some(interrupts),
        }
    }

    /// Create a pacer that cannot be interrupted.
    pub fn uninterruptible(pause: Duration) -> Self {
        Self {
            pause,
            interrupts: None,
        }
    }

    /// Install a Ctrl-C handler and pace with it.
    ///
    /// Falls back to an uninterruptible pacer if the handler can't be
    /// installed, in which case an interrupt terminates the process without
    /// restoring the terminal.
    pub fn with_ctrlc(pause: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        match ctrlc::set_handler(move || {
            let _ = tx.send(());
        }) {
            Ok(()) => Self::new(pause, rx),
            Err(err) => {
                tracing::warn!(%err, "unable to install interrupt handler");
                Self::uninterruptible(pause)
            }
        }
    }

    /// Wait for the configured pause.
    ///
    /// Returns [`Error::Interrupted`] as soon as an interrupt arrives.
    pub fn pause(&self) -> art::Result<()> {
        let Some(interrupts) = &self.interrupts else {
            thread::sleep(self.pause);
            return Ok(());
        };

        match interrupts.recv_timeout(self.pause) {
            Ok(()) => Err(Error::Interrupted),
            Err(RecvTimeoutError::Timeout) => Ok(()),
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(self.pause);
                Ok(())
            }
        }
    }
}

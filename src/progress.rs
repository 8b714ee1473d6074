// src/progress.rs

use std::time::{Duration, Instant};

use crate::config::consts::LOAD_SAFETY_TIMEOUT_SECS;

/// Lightweight progress reporting used by long-running operations
/// (feed fetch, export). Frontends (GUI/CLI) implement this to surface
/// status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., one photo loaded).
    fn item_done(&mut self) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Tracks photo loads against an expected total, bounded by a fixed
/// safety deadline. Success and failure both count as progress; hitting
/// the expected total early-cancels the deadline.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    expected: usize,
    done: usize,
    deadline: Option<Instant>,
}

impl LoadTracker {
    pub fn start(expected: usize) -> Self {
        Self {
            expected,
            done: 0,
            deadline: Some(Instant::now() + Duration::from_secs(LOAD_SAFETY_TIMEOUT_SECS)),
        }
    }

    pub fn item_done(&mut self) {
        self.done += 1;
        if self.done >= self.expected {
            self.deadline = None; // complete: cancel the safety timeout
        }
    }

    pub fn complete(&self) -> bool {
        self.done >= self.expected
    }

    /// Whether the loading indicator should still be shown. Past the
    /// safety deadline the answer is no, whatever is still outstanding.
    pub fn loading(&self) -> bool {
        match self.deadline {
            Some(d) => !self.complete() && Instant::now() < d,
            None => false,
        }
    }

    pub fn counts(&self) -> (usize, usize) {
        (self.done, self.expected)
    }
}

//! Time sources for the alert queue.
//!
//! The queue never sleeps; it asks a [`Clock`] for the current instant when an
//! operation runs or when the UI loop calls `tick()`. Tests drive a
//! [`ManualClock`] forward explicitly.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock. Clones share the same underlying time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Start a clock at the current instant.
    pub fn new() -> Self {
        let origin = Instant::now();
        Self {
            origin,
            now: Rc::new(Cell::new(origin)),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to `offset` past the clock's origin. Never moves backwards.
    pub fn set_elapsed(&self, offset: Duration) {
        let target = self.origin + offset;
        if target > self.now.get() {
            self.now.set(target);
        }
    }

    /// Time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.now.get() - self.origin
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

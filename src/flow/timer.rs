//! One-shot deferred progress reveal
//!
//! Progress bars start empty and jump to their value after a short delay so
//! the fill is visible. The timer is polled with explicit instants; dropping
//! the owning screen guarantees no later update lands.

use std::time::{Duration, Instant};

/// A progress value that becomes visible after a delay
#[derive(Debug, Clone)]
pub struct DeferredProgress {
    target: f64,
    delay: Duration,
    /// `None` once fired
    armed_at: Option<Instant>,
    shown: f64,
}

impl DeferredProgress {
    /// Arm the timer at `now`; `target` is clamped into 0-100
    pub fn new(target: f64, delay: Duration, now: Instant) -> Self {
        Self {
            target: target.clamp(0.0, 100.0),
            delay,
            armed_at: Some(now),
            shown: 0.0,
        }
    }

    /// Fire if the delay has elapsed. Returns `true` when the shown value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.armed_at {
            Some(armed) if now.saturating_duration_since(armed) >= self.delay => {
                self.armed_at = None;
                self.shown = self.target;
                true
            }
            _ => false,
        }
    }

    /// Value to draw right now
    pub fn value(&self) -> f64 {
        self.shown
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

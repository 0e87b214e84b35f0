//! Frame-rate cap for the render loop.
use std::time::{Duration, Instant};

/// Drop-frame throttle: a tick that comes too soon is skipped outright, and
/// a late tick does not schedule extra frames to catch up.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    min_interval: Duration,
    last: Option<Instant>,
    rendered: u64,
    dropped: u64,
}

impl FrameThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval, last: None, rendered: 0, dropped: 0 }
    }

    /// Returns true when a frame should be rendered at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last {
            if now.saturating_duration_since(last) < self.min_interval {
                self.dropped += 1;
                return false;
            }
        }
        self.last = Some(now);
        self.rendered += 1;
        true
    }

    pub fn rendered(&self) -> u64 {
        self.rendered
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

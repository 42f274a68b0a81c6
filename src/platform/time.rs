//! Tick clocks
//!
//! The loop advances one logical step per callback and never looks at the
//! elapsed time, so a clock only decides *when* the next callback happens.

use std::time::{Duration, Instant};

use crate::consts::TICK_RATE_HZ;

pub trait Clock {
    /// Block until the next tick is due
    fn wait_tick(&mut self);
}

/// Paces callbacks at a fixed rate by sleeping; late frames are not caught up
#[derive(Debug)]
pub struct FixedRateClock {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / hz.max(1),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for FixedRateClock {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ)
    }
}

impl Clock for FixedRateClock {
    fn wait_tick(&mut self) {
        let now = Instant::now();
        let due = self.next.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        // Schedule from whichever is later so a stall never causes a burst
        self.next = Some(due.max(now) + self.period);
    }
}

/// Never waits; counts callbacks
#[derive(Debug, Default)]
pub struct ManualClock {
    pub ticks: u64,
}

impl Clock for ManualClock {
    fn wait_tick(&mut self) {
        self.ticks += 1;
    }
}

use std::time::Duration;

use crate::core::constants::MAX_TICKS_PER_FRAME;

/// Fixed-interval tick source fed by variable frame times.
///
/// `advance` banks elapsed time; `take_tick` pays out one interval at a time so
/// the caller can stop dispatching mid-frame when the timer is stopped.
#[derive(Clone, Debug)]
pub struct TickTimer {
    interval: Duration,
    running: bool,
    accumulator: Duration,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            running: false,
            accumulator: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    /// Bank `dt` and return how many ticks are now due. A long stall (window
    /// drag, breakpoint) pays out at most `MAX_TICKS_PER_FRAME` ticks.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        let cap = self.interval * MAX_TICKS_PER_FRAME;
        self.accumulator = (self.accumulator + dt).min(cap);
        self.due()
    }

    pub fn take_tick(&mut self) -> bool {
        if !self.running || self.accumulator < self.interval {
            return false;
        }
        self.accumulator -= self.interval;
        true
    }

    fn due(&self) -> u32 {
        (self.accumulator.as_nanos() / self.interval.as_nanos()) as u32
    }
}

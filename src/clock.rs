//! Tick pacing.
//!
//! The loop calls `tick(rate)` once per iteration; the clock sleeps off
//! whatever part of the tick interval the iteration did not use. The rate is
//! passed fresh on every call so the difficulty ramp needs no
//! reconfiguration.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct TickClock {
    last_tick: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Sleep `max(0, 1/rate - elapsed since previous tick)`, then mark the
    /// new tick start.
    pub fn tick(&mut self, rate: u32) {
        let interval = tick_interval(rate);
        if let Some(remaining) = interval.checked_sub(self.last_tick.elapsed()) {
            thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

fn tick_interval(rate: u32) -> Duration {
    Duration::from_secs(1) / rate.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_shrinks_as_rate_grows() {
        assert_eq!(tick_interval(10), Duration::from_millis(100));
        assert_eq!(tick_interval(20), Duration::from_millis(50));
        assert!(tick_interval(11) < tick_interval(10));
    }

    #[test]
    fn zero_rate_is_clamped() {
        assert_eq!(tick_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn tick_paces_consecutive_calls() {
        let mut clock = TickClock::new();
        clock.tick(100);
        let start = Instant::now();
        clock.tick(100);
        clock.tick(100);
        // Two 10ms ticks with no work in between must take at least ~20ms.
        assert!(start.elapsed() >= Duration::from_millis(18));
    }

    #[test]
    fn slow_iterations_do_not_sleep() {
        let mut clock = TickClock::new();
        clock.tick(100);
        thread::sleep(Duration::from_millis(20));
        let start = Instant::now();
        clock.tick(100);
        // Interval already elapsed; tick should return almost immediately.
        assert!(start.elapsed() < Duration::from_millis(10));
    }
}

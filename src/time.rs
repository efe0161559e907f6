//! Wall clocks and the fixed-interval tick gate.
//!
//! The host calls [`Scheduler::poll`] as often as it likes (an animation
//! frame, a timer, a test loop). The scheduler answers whether a tick is due.
//! Missed intervals collapse into one tick since the simulation itself
//! integrates over the real elapsed time.

use std::cell::Cell;

/// Source of epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// The platform clock: `Date.now()` in the browser, `SystemTime` elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

/// Hand-driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

#[derive(Debug)]
pub struct Scheduler {
    interval_ms: u64,
    /// Timestamp of the last fired tick, None until started
    last_fire: Option<u64>,
    running: bool,
    /// Ticks fired since creation
    pub total_ticks: u64,
}

impl Scheduler {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            last_fire: None,
            running: false,
            total_ticks: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.last_fire = Some(now_ms);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_fire = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true when at least one interval passed since the last tick.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        let due = match self.last_fire {
            // Clock went backwards: re-anchor instead of stalling.
            Some(prev) if now_ms < prev => {
                self.last_fire = Some(now_ms);
                false
            }
            Some(prev) => now_ms - prev >= self.interval_ms,
            None => {
                self.last_fire = Some(now_ms);
                false
            }
        };
        if due {
            self.last_fire = Some(now_ms);
            self.total_ticks += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_started() {
        let mut s = Scheduler::new(100);
        assert!(!s.is_running());
        assert!(!s.poll(1_000));
        assert_eq!(s.total_ticks, 0);
    }

    #[test]
    fn fires_after_interval() {
        let mut s = Scheduler::new(100);
        s.start(0);
        assert!(!s.poll(99));
        assert!(s.poll(100));
        assert_eq!(s.total_ticks, 1);
    }

    #[test]
    fn missed_intervals_collapse() {
        let mut s = Scheduler::new(100);
        s.start(0);
        // 10 second gap (tab backgrounded) fires once
        assert!(s.poll(10_000));
        assert!(!s.poll(10_050));
        assert_eq!(s.total_ticks, 1);
    }

    #[test]
    fn sub_interval_frames_accumulate() {
        let mut s = Scheduler::new(100);
        s.start(0);
        for frame in 1..=6 {
            assert!(!s.poll(frame * 16));
        }
        assert!(s.poll(112));
        assert_eq!(s.total_ticks, 1);
    }

    #[test]
    fn stop_halts_ticks() {
        let mut s = Scheduler::new(100);
        s.start(0);
        assert!(s.poll(100));
        s.stop();
        assert!(!s.poll(500));
        s.start(500);
        assert!(!s.poll(550));
        assert!(s.poll(600));
    }

    #[test]
    fn backwards_clock_reanchors() {
        let mut s = Scheduler::new(100);
        s.start(10_000);
        assert!(!s.poll(5_000));
        assert!(s.poll(5_100));
    }

    #[test]
    fn steady_60fps() {
        let mut s = Scheduler::new(100);
        s.start(0);
        let fired = (1..=60).filter(|i| s.poll(i * 1_000 / 60)).count();
        // Frame quantization stretches some intervals; expect ~10.
        assert!((8..=10).contains(&fired), "expected ~10 ticks, got {fired}");
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(5);
        clock.advance(10);
        assert_eq!(clock.now_ms(), 15);
        clock.set(3);
        assert_eq!((&clock).now_ms(), 3);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}

//! Frame pacing
//!
//! `FrameRegulator` holds the loop to a fixed frame rate. When a frame runs
//! long, the overrun is carried into the next wait so the average rate stays
//! on target.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Sleep granularity while waiting for the next frame
pub const SLEEP_STEP: Duration = Duration::from_millis(1);

/// Monotonic time source used for pacing
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that only advances when told to (or when slept on).
///
/// Lets the frame loop run at full speed under a test harness while the
/// regulator still sees a consistent timeline.
#[derive(Debug, Default)]
pub struct SimulatedClock {
    now: Cell<Duration>,
    sleeps: Cell<u32>,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }

    /// Number of `sleep` calls made so far
    pub fn sleeps(&self) -> u32 {
        self.sleeps.get()
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.set(self.sleeps.get() + 1);
        self.advance(duration);
    }
}

/// Paces a loop to `fps` frames per second
#[derive(Debug)]
pub struct FrameRegulator<C: Clock> {
    clock: C,
    frame_interval: Duration,
    time_of_last_frame: Duration,
    /// How far the previous frame overran its slot
    lateness: Duration,
}

impl<C: Clock> FrameRegulator<C> {
    pub fn new(clock: C, fps: u32) -> Self {
        let frame_interval = Duration::from_secs(1) / fps.max(1);
        let time_of_last_frame = clock.now();
        Self {
            clock,
            frame_interval,
            time_of_last_frame,
            lateness: Duration::ZERO,
        }
    }

    /// Block until the next frame is due.
    ///
    /// A clock reading earlier than the previous frame is treated as a stall:
    /// no sleep, no lateness, and the timeline restarts from the new reading.
    pub fn sync(&mut self) {
        let target = self.time_of_last_frame + self.frame_interval;
        let mut now = self.clock.now();

        while now + self.lateness < target && now >= self.time_of_last_frame {
            self.clock.sleep(SLEEP_STEP);
            now = self.clock.now();
        }

        if now < self.time_of_last_frame {
            log::warn!(
                "Clock went backwards by {:?}, resynchronising",
                self.time_of_last_frame - now
            );
        }

        self.lateness = now.saturating_sub(target);
        if !self.lateness.is_zero() {
            log::trace!("Frame late by {:?}", self.lateness);
        }
        self.time_of_last_frame = now;
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn lateness(&self) -> Duration {
        self.lateness
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

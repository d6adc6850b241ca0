//! Gravity driver - the periodic half of the game loop.
//!
//! The board has no notion of time. The driver accumulates elapsed
//! milliseconds and, for every full interval, performs one gravity step:
//! spawn a piece if none is falling, then move it down one row.
//! [`FrameClock`] turns wall-clock time into the whole milliseconds the
//! driver consumes.

use std::time::{Duration, Instant};

use crate::core::{Board, PiecePicker};

#[derive(Debug, Clone)]
pub struct GravityDriver {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl GravityDriver {
    /// Create a driver stepping every `interval_ms` (at least 1ms)
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time banked toward the next step
    pub fn pending_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Feed elapsed time; returns how many gravity steps ran.
    pub fn advance<P: PiecePicker>(&mut self, elapsed_ms: u32, board: &mut Board<P>) -> u32 {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let mut steps = 0;
        while self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            board.spawn();
            board.move_down();
            steps += 1;
        }
        steps
    }

    /// Drop any banked time.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

/// Hands out elapsed wall-clock time in whole milliseconds
///
/// The mark advances by exactly the milliseconds handed out, so the
/// fraction left over stays on the clock for the next frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    mark: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { mark: now }
    }

    /// Time not yet handed out as of `now`
    pub fn since(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.mark)
    }

    /// Take every whole millisecond up to `now`.
    pub fn take_ms(&mut self, now: Instant) -> u32 {
        let ms = u32::try_from(self.since(now).as_millis()).unwrap_or(u32::MAX);
        self.mark += Duration::from_millis(u64::from(ms));
        ms
    }
}

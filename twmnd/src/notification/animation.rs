//! Width animation clock.
//!
//! Interpolates an integer from a start value to an end value over a fixed
//! duration. A forward run moves the current time from 0 to the duration; a
//! backward run replays it from the duration down to 0, so the value travels
//! from the end value back to the start value.

use std::time::{Duration, Instant};

use super::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Result of advancing the clock to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub value: u32,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct Animation {
    start_value: u32,
    end_value: u32,
    duration: Duration,
    direction: Direction,
    easing: Easing,
    started_at: Option<Instant>,
    current_time: Duration,
}

impl Animation {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_value: 0,
            end_value: 0,
            duration,
            direction: Direction::Forward,
            easing: Easing::OutBounce,
            started_at: None,
            current_time: Duration::ZERO,
        }
    }

    pub fn set_range(&mut self, start_value: u32, end_value: u32) {
        self.start_value = start_value;
        self.end_value = end_value;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Start running from the beginning of the current direction.
    pub fn start(&mut self, now: Instant) {
        self.current_time = match self.direction {
            Direction::Forward => Duration::ZERO,
            Direction::Backward => self.duration,
        };
        self.started_at = Some(now);
    }

    /// Move the clock to `now` and return the interpolated value.
    ///
    /// A stopped animation reports its value at the current time.
    pub fn advance(&mut self, now: Instant) -> Tick {
        let Some(started_at) = self.started_at else {
            return Tick {
                value: self.value(),
                finished: false,
            };
        };

        let elapsed = now
            .saturating_duration_since(started_at)
            .min(self.duration);
        self.current_time = match self.direction {
            Direction::Forward => elapsed,
            Direction::Backward => self.duration - elapsed,
        };
        let finished = elapsed == self.duration;
        if finished {
            self.started_at = None;
        }

        Tick {
            value: self.value(),
            finished,
        }
    }

    /// Value at the current time.
    pub fn value(&self) -> u32 {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            self.current_time.as_secs_f64() / self.duration.as_secs_f64()
        };
        let progress = self.easing.apply(t);
        let start = f64::from(self.start_value);
        let end = f64::from(self.end_value);
        (start + (end - start) * progress).max(0.0) as u32
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_time(&self) -> Duration {
        self.current_time
    }

    /// Time left before the clock reaches the end of the duration.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.current_time)
    }

    pub fn end_value(&self) -> u32 {
        self.end_value
    }
}

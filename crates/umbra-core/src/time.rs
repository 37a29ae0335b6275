// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Simulation time helpers.
//!
//! All gameplay cadence is driven by the `dt` the frame driver feeds into the
//! pipeline, never by wall-clock reads, so a sequence of updates with known
//! deltas is fully deterministic. Systems own these small accumulators and
//! tick them explicitly.

use serde::{Deserialize, Serialize};

/// An accumulator measuring seconds since it was last restarted.
///
/// Used for state-machine dwell times (AI idle/patrol durations), attack
/// cooldown windows, and similar "how long since X" questions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    /// Creates a stopwatch with zero elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the stopwatch by `dt` seconds.
    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Returns the seconds accumulated since the last restart.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Resets the accumulated time to zero.
    #[inline]
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
}

/// A recurring timer that fires every `interval` seconds of accumulated dt.
///
/// Overshoot past the boundary is carried over, so a large frame delta does
/// not silently shorten the following period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalTimer {
    interval: f32,
    accumulated: f32,
}

impl IntervalTimer {
    /// Creates a timer firing every `interval` seconds.
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Advances the timer by `dt` seconds and reports whether the interval
    /// boundary was crossed.
    ///
    /// A single call reports at most one firing; the remainder stays
    /// accumulated toward the next one.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.accumulated += dt;
        if self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            true
        } else {
            false
        }
    }

    /// The configured firing interval in seconds.
    #[inline]
    pub fn interval(&self) -> f32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwatch_accumulates_and_restarts() {
        let mut watch = Stopwatch::new();
        assert_eq!(watch.elapsed(), 0.0);

        watch.tick(0.5);
        watch.tick(0.25);
        assert_eq!(watch.elapsed(), 0.75);

        watch.restart();
        assert_eq!(watch.elapsed(), 0.0);
    }

    #[test]
    fn test_interval_timer_fires_on_boundary() {
        let mut timer = IntervalTimer::new(1.0);
        assert!(!timer.tick(0.4));
        assert!(!timer.tick(0.4));
        assert!(timer.tick(0.4), "crossing 1.0s must fire");
        assert!(!timer.tick(0.4), "remainder carries over, no double fire");
    }

    #[test]
    fn test_interval_timer_carries_overshoot() {
        let mut timer = IntervalTimer::new(1.0);
        // A large delta fires once and keeps the overshoot.
        assert!(timer.tick(1.9));
        // Only 0.1s more is needed to fire again.
        assert!(timer.tick(0.1));
    }
}

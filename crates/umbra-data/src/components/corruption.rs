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

use umbra_core::time::Stopwatch;

/// Severity stages of accumulated corruption.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorruptionStage {
    /// No corruption effects.
    #[default]
    None,
    /// Cosmetic-only effects.
    Low,
    /// Health cap and energy recovery start degrading.
    Medium,
    /// Continuous health drain on top of the cap degradation.
    High,
    /// Severe health drain.
    Critical,
}

impl CorruptionStage {
    /// A short display name for logging.
    pub fn name(self) -> &'static str {
        match self {
            CorruptionStage::None => "none",
            CorruptionStage::Low => "low",
            CorruptionStage::Medium => "medium",
            CorruptionStage::High => "high",
            CorruptionStage::Critical => "critical",
        }
    }
}

/// The accumulating risk meter of the corruption mechanic.
///
/// `current` is non-negative and unbounded above. The stage is a pure
/// function of `current` against the three ascending thresholds. Note the
/// boundary policy: both comparisons are strict, so a value exactly equal to
/// a threshold classifies as `None`. Deliberate; several tests pin it.
#[derive(Debug, Clone, PartialEq)]
pub struct Corruption {
    /// Current corruption. Never negative.
    pub current: f32,
    /// Upper bound of the Low band.
    pub low_threshold: f32,
    /// Upper bound of the Medium band.
    pub medium_threshold: f32,
    /// Upper bound of the High band.
    pub high_threshold: f32,
    /// The stage recorded by the most recent `update_stage`.
    pub stage: CorruptionStage,
    /// The stage recorded by the `update_stage` before that; the pair
    /// detects transition edges once per frame.
    pub last_stage: CorruptionStage,
    /// Cadence timer for the periodic (once per second) stage effects.
    pub effect_timer: Stopwatch,
}

impl Corruption {
    /// Creates a corruption meter with the given starting value and
    /// thresholds.
    pub fn new(initial: f32, low: f32, medium: f32, high: f32) -> Self {
        Self {
            current: initial,
            low_threshold: low,
            medium_threshold: medium,
            high_threshold: high,
            stage: CorruptionStage::None,
            last_stage: CorruptionStage::None,
            effect_timer: Stopwatch::new(),
        }
    }

    /// The stage `value` would classify as under this meter's thresholds.
    ///
    /// Pure and side-effect free. Strict inequalities on both ends of every
    /// band; exact-threshold values fall through to `None`.
    pub fn stage_for(&self, value: f32) -> CorruptionStage {
        if value > 0.0 && value < self.low_threshold {
            return CorruptionStage::Low;
        }
        if value > self.low_threshold && value < self.medium_threshold {
            return CorruptionStage::Medium;
        }
        if value > self.medium_threshold && value < self.high_threshold {
            return CorruptionStage::High;
        }
        if value > self.high_threshold {
            return CorruptionStage::Critical;
        }
        CorruptionStage::None
    }

    /// The stage of the current value.
    #[inline]
    pub fn current_stage(&self) -> CorruptionStage {
        self.stage_for(self.current)
    }

    /// Rolls `stage` forward from the current value and reports whether it
    /// differs from the previously recorded stage.
    ///
    /// Returns `true` exactly on the frame the derived stage changes.
    pub fn update_stage(&mut self) -> bool {
        self.last_stage = self.stage;
        self.stage = self.current_stage();
        self.stage != self.last_stage
    }

    /// Adds `amount` corruption (may be negative), flooring at zero.
    pub fn add(&mut self, amount: f32) {
        self.current = (self.current + amount).max(0.0);
    }
}

impl Default for Corruption {
    /// A clean meter with the standard thresholds 30/70/90.
    fn default() -> Self {
        Self::new(0.0, 30.0, 70.0, 90.0)
    }
}

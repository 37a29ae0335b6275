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

/// An entity's life total.
///
/// Invariants: `0 <= current <= max`, and `max <= base_max` unless something
/// explicitly boosts it. `base_max` is the untouched baseline the corruption
/// system derives its cap reductions from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    /// Current hit points.
    pub current: f32,
    /// Effective maximum, possibly reduced by corruption.
    pub max: f32,
    /// The unmodified baseline maximum.
    pub base_max: f32,
}

impl Health {
    /// Creates a full health pool of `amount` points.
    pub fn full(amount: f32) -> Self {
        Self {
            current: amount,
            max: amount,
            base_max: amount,
        }
    }

    /// Whether the pool is exhausted.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Clamps `current` down to `max` after an external cap reduction.
    #[inline]
    pub fn clamp_to_max(&mut self) {
        if self.current > self.max {
            self.current = self.max;
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full(100.0)
    }
}

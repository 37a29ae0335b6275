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

/// Melee attack parameters.
///
/// An attack lands only when the target is within `range` and inside the
/// facing cone of half-angle `angle_degrees`. `timer` measures time since
/// the last swing; a new swing requires `timer.elapsed() >= cooldown`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attack {
    /// Damage dealt per landed hit.
    pub damage: f32,
    /// Maximum reach of a swing.
    pub range: f32,
    /// Half-angle of the facing cone, in degrees.
    pub angle_degrees: f32,
    /// Seconds between swings.
    pub cooldown: f32,
    /// Time since the last swing.
    pub timer: Stopwatch,
}

impl Attack {
    /// Creates an attack profile with a fresh (ready) timer.
    pub fn new(damage: f32, range: f32, angle_degrees: f32, cooldown: f32) -> Self {
        Self {
            damage,
            range,
            angle_degrees,
            cooldown,
            timer: Stopwatch::new(),
        }
    }

    /// Whether the cooldown window since the last swing has elapsed.
    #[inline]
    pub fn ready(&self) -> bool {
        self.timer.elapsed() >= self.cooldown
    }
}

impl Default for Attack {
    fn default() -> Self {
        Self::new(10.0, 2.0, 60.0, 1.0)
    }
}

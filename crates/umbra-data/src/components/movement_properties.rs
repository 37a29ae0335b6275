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

/// Movement tuning for an entity.
///
/// `speed_multiplier` exists for temporary effects; the speed everything
/// should actually use is [`MovementProperties::effective_speed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementProperties {
    /// Base movement speed, units per second.
    pub move_speed: f32,
    /// Turn rate, degrees per second.
    pub rotation_speed: f32,
    /// Acceleration, units per second squared.
    pub acceleration: f32,
    /// Deceleration, units per second squared.
    pub deceleration: f32,
    /// Multiplier applied on top of the base speed.
    pub speed_multiplier: f32,
}

impl MovementProperties {
    /// Creates movement properties with the given base speed and default
    /// tuning for the rest.
    pub fn with_speed(move_speed: f32) -> Self {
        Self {
            move_speed,
            ..Self::default()
        }
    }

    /// The speed after applying the multiplier.
    #[inline]
    pub fn effective_speed(&self) -> f32 {
        self.move_speed * self.speed_multiplier
    }
}

impl Default for MovementProperties {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            rotation_speed: 180.0,
            acceleration: 10.0,
            deceleration: 15.0,
            speed_multiplier: 1.0,
        }
    }
}

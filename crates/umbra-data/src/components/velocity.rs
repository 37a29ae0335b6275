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

use umbra_core::math::Vec3;

/// The motion state of an entity.
///
/// `linear` is in world units per second; `angular` encodes an axis-angle
/// rate (direction = rotation axis, magnitude = radians per second). The
/// movement system integrates both into the entity's `Transform` once per
/// frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Linear velocity, world units per second.
    pub linear: Vec3,
    /// Angular velocity: axis scaled by radians per second.
    pub angular: Vec3,
}

impl Velocity {
    /// Creates a velocity from linear and angular parts.
    pub fn new(linear: Vec3, angular: Vec3) -> Self {
        Self { linear, angular }
    }
}

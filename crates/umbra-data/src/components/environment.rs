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

//! Environmental threat components: corruption sources, dark tides, and
//! spatial distortions.

use umbra_core::math::Vec3;

/// A stationary source radiating corruption to nearby entities.
///
/// Power grows linearly over time (the environment system owns the growth
/// rate) and the radiated increment falls off linearly with distance inside
/// `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorruptionSource {
    /// Radiated corruption strength.
    pub power: f32,
    /// Influence radius in world units.
    pub radius: f32,
}

impl CorruptionSource {
    /// Creates a source with the given strength and reach.
    pub fn new(power: f32, radius: f32) -> Self {
        Self { power, radius }
    }
}

impl Default for CorruptionSource {
    fn default() -> Self {
        Self::new(20.0, 8.0)
    }
}

/// A world-wide escalation event.
///
/// Spawned by the environment system on a fixed interval; its presence
/// records that every corruption source was amplified and extra hostiles
/// were brought in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarkTide {
    /// How long the tide lasts, seconds.
    pub duration: f32,
    /// Factor applied to every corruption source's power.
    pub power_multiplier: f32,
    /// Factor applied to hostile spawn rates while the tide lasts.
    pub spawn_rate_multiplier: f32,
}

impl DarkTide {
    /// Creates a tide event record.
    pub fn new(duration: f32, power_multiplier: f32, spawn_rate_multiplier: f32) -> Self {
        Self {
            duration,
            power_multiplier,
            spawn_rate_multiplier,
        }
    }
}

impl Default for DarkTide {
    fn default() -> Self {
        Self::new(30.0, 1.5, 2.0)
    }
}

/// The flavors of spatial distortion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DistortionKind {
    /// Redirects gravity inside the radius.
    #[default]
    GravityShift,
    /// Slows time inside the radius.
    TimeDilation,
    /// A damaging rift.
    SpatialRift,
}

/// A timed area effect anchored at a point.
///
/// `duration` is the remaining lifetime; the environment system ages it by
/// dt and marks the carrying entity for destruction at zero. Only the
/// parameter matching `kind` is meaningful; the others keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialDistortion {
    /// Which effect this distortion applies.
    pub kind: DistortionKind,
    /// Anchor point of the effect.
    pub center: Vec3,
    /// Influence radius in world units.
    pub radius: f32,
    /// Effect strength.
    pub strength: f32,
    /// Remaining lifetime, seconds.
    pub duration: f32,
    /// GravityShift: the replacement gravity direction.
    pub gravity_direction: Vec3,
    /// TimeDilation: the time scale inside the radius.
    pub time_scale: f32,
    /// SpatialRift: damage dealt per second inside the radius.
    pub damage_per_second: f32,
}

impl Default for SpatialDistortion {
    fn default() -> Self {
        Self {
            kind: DistortionKind::GravityShift,
            center: Vec3::ZERO,
            radius: 5.0,
            strength: 1.0,
            duration: 10.0,
            gravity_direction: -Vec3::Y,
            time_scale: 1.0,
            damage_per_second: 10.0,
        }
    }
}

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

/// Third-person orbit camera parameters, attached to the player entity.
///
/// Yaw and pitch are in degrees and driven by mouse deltas; pitch is clamped
/// to `[min_pitch, max_pitch]` and yaw wraps into `[0, 360)`. `position` is
/// recomputed by the camera system every frame from the player transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// The computed eye position (output of the camera system).
    pub position: Vec3,
    /// Offset from the player position the camera orbits around.
    pub offset: Vec3,
    /// Orbit distance behind the pivot.
    pub distance: f32,
    /// Closest allowed orbit distance.
    pub min_distance: f32,
    /// Farthest allowed orbit distance.
    pub max_distance: f32,
    /// Mouse sensitivity, degrees per screen unit.
    pub sensitivity: f32,
    /// Pitch angle, degrees.
    pub pitch: f32,
    /// Yaw angle, degrees.
    pub yaw: f32,
    /// Lower pitch clamp, degrees.
    pub min_pitch: f32,
    /// Upper pitch clamp, degrees.
    pub max_pitch: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            offset: Vec3::new(0.0, 1.5, 0.0),
            distance: 3.0,
            min_distance: 2.0,
            max_distance: 10.0,
            sensitivity: 0.1,
            pitch: 0.0,
            yaw: 0.0,
            min_pitch: -30.0,
            max_pitch: 50.0,
        }
    }
}

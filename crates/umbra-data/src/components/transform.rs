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

use umbra_core::math::{Mat4, Quaternion, Vec3};

/// A component that describes an entity's position, rotation, and scale in
/// world space.
///
/// The `forward`/`right`/`up` axes are *derived* from `rotation` and cached.
/// They are only valid as long as `rotation` is unchanged: any code that
/// writes `rotation` directly must call [`Transform::refresh_axes`] (or go
/// through [`Transform::set_rotation`]) before anyone reads the axes again.
///
/// `gravity_direction` is the per-entity gravity used by the Distortion
/// ability; it is independent of the rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The position of the entity.
    pub position: Vec3,
    /// The rotation of the entity, as a unit quaternion.
    pub rotation: Quaternion,
    /// The scale of the entity.
    pub scale: Vec3,
    /// Derived: the local `-Z` axis in world space.
    pub forward: Vec3,
    /// Derived: the local `+X` axis in world space.
    pub right: Vec3,
    /// Derived: the local `+Y` axis in world space.
    pub up: Vec3,
    /// The direction gravity pulls this entity. Inverted by Distortion.
    pub gravity_direction: Vec3,
}

impl Transform {
    /// Creates a new `Transform` with the given position, rotation, and
    /// scale, with the derived axes already refreshed.
    pub fn new(position: Vec3, rotation: Quaternion, scale: Vec3) -> Self {
        let mut transform = Self {
            position,
            rotation,
            scale,
            forward: -Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            gravity_direction: -Vec3::Y,
        };
        transform.refresh_axes();
        transform
    }

    /// Creates a `Transform` at `position` with identity rotation and unit
    /// scale.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Recomputes the cached `forward`/`right`/`up` axes from `rotation`.
    pub fn refresh_axes(&mut self) {
        self.forward = self.rotation.rotate_vec3(-Vec3::Z);
        self.right = self.rotation.rotate_vec3(Vec3::X);
        self.up = self.rotation.rotate_vec3(Vec3::Y);
    }

    /// Sets the rotation and refreshes the derived axes in one step.
    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.rotation = rotation;
        self.refresh_axes();
    }

    /// The model-to-world matrix, composed in `Translate * Rotate * Scale`
    /// order.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_scale(self.scale)
    }
}

impl Default for Transform {
    /// The identity transform at the origin, facing `-Z`, gravity down.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quaternion::IDENTITY,
            scale: Vec3::ONE,
            forward: -Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            gravity_direction: -Vec3::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::math::{EPSILON, FRAC_PI_2};

    #[test]
    fn test_refresh_axes_tracks_rotation() {
        let mut transform = Transform::default();
        assert_eq!(transform.forward, -Vec3::Z);

        transform.set_rotation(Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2));
        // Quarter turn around +Y points the forward axis down -X.
        assert!(transform.forward.distance(-Vec3::X) < EPSILON * 10.0);
        assert!(transform.right.distance(-Vec3::Z) < EPSILON * 10.0);
        assert!(transform.up.distance(Vec3::Y) < EPSILON * 10.0);
    }

    #[test]
    fn test_model_matrix_applies_trs() {
        let transform = Transform::new(
            Vec3::new(0.0, 3.0, 0.0),
            Quaternion::IDENTITY,
            Vec3::splat(2.0),
        );
        let p = transform.model_matrix().transform_point(Vec3::X);
        assert!(p.distance(Vec3::new(2.0, 3.0, 0.0)) < EPSILON * 10.0);
    }
}

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

//! Velocity integration.

use umbra_core::math::Quaternion;
use umbra_data::components::{Transform, Velocity};
use umbra_data::{System, World};

/// Integrates `Velocity` into `Transform` once per frame.
///
/// Position integrates linearly; angular velocity is applied as an
/// incremental axis-angle rotation pre-multiplied onto the current rotation.
/// The quaternion is renormalized after every incremental multiply so long
/// sessions cannot accumulate drift, and the cached direction axes are
/// refreshed in the same step.
pub struct MovementSystem;

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        for entity in world.entity_ids() {
            let Some(velocity) = world.get::<Velocity>(entity).copied() else {
                continue;
            };
            let Some(transform) = world.get_mut::<Transform>(entity) else {
                continue;
            };

            transform.position += velocity.linear * dt;

            let angular_speed = velocity.angular.length();
            if angular_speed > 0.0 {
                let step =
                    Quaternion::from_axis_angle(velocity.angular.normalize(), angular_speed * dt);
                transform.set_rotation((step * transform.rotation).normalize());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use umbra_core::math::{Vec3, EPSILON, FRAC_PI_2};

    fn step(world: &mut World, dt: f32) {
        MovementSystem.update(world, dt);
    }

    #[test]
    fn test_constant_velocity_integrates_exactly() {
        let mut world = World::new();
        let entity = world.spawn((
            Transform::from_position(Vec3::new(1.0, 0.0, 0.0)),
            Velocity::new(Vec3::new(2.0, 0.0, -1.0), Vec3::ZERO),
        ));

        step(&mut world, 0.5);

        let transform = world.get::<Transform>(entity).expect("transform");
        assert_relative_eq!(transform.position.x, 2.0, epsilon = EPSILON);
        assert_relative_eq!(transform.position.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(transform.position.z, -0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_entities_missing_either_component_are_skipped() {
        let mut world = World::new();
        let no_velocity = world.spawn(Transform::from_position(Vec3::ONE));
        let _no_transform = world.spawn(Velocity::new(Vec3::X, Vec3::ZERO));

        step(&mut world, 1.0);

        let transform = world.get::<Transform>(no_velocity).expect("transform");
        assert_eq!(transform.position, Vec3::ONE);
    }

    #[test]
    fn test_angular_velocity_rotates_and_refreshes_axes() {
        let mut world = World::new();
        // Quarter turn per second around +Y.
        let entity = world.spawn((
            Transform::default(),
            Velocity::new(Vec3::ZERO, Vec3::Y * FRAC_PI_2),
        ));

        step(&mut world, 1.0);

        let transform = world.get::<Transform>(entity).expect("transform");
        // Forward (-Z) swings to -X under a +90° yaw.
        assert!(transform.forward.distance(-Vec3::X) < 1e-4);
    }

    #[test]
    fn test_rotation_stays_unit_length_over_many_steps() {
        let mut world = World::new();
        let entity = world.spawn((
            Transform::default(),
            Velocity::new(Vec3::ZERO, Vec3::new(0.3, 1.7, -0.4)),
        ));

        for _ in 0..10_000 {
            step(&mut world, 0.016);
        }

        let transform = world.get::<Transform>(entity).expect("transform");
        assert_relative_eq!(transform.rotation.magnitude(), 1.0, epsilon = 1e-4);
    }
}

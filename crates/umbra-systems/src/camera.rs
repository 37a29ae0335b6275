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

//! Third-person orbit camera framing.

use std::sync::Arc;

use umbra_core::input::InputSource;
use umbra_core::math::{degrees_to_radians, Quaternion, Vec3};
use umbra_data::components::{CameraRig, Player, Transform};
use umbra_data::{System, World};

/// Orbits the third-person camera around the player.
///
/// Mouse deltas steer yaw/pitch (pitch clamped, yaw wrapped into [0, 360));
/// the rig position is then recomputed from the player transform by rotating
/// the rig offset, pulled back by the orbit distance.
pub struct CameraSystem {
    input: Arc<dyn InputSource>,
}

impl CameraSystem {
    /// Creates the system over the given input snapshot provider.
    pub fn new(input: Arc<dyn InputSource>) -> Self {
        Self { input }
    }
}

impl System for CameraSystem {
    fn name(&self) -> &'static str {
        "camera"
    }

    fn update(&mut self, world: &mut World, _dt: f32) {
        let Some(player) = world.find_first::<Player>() else {
            return;
        };
        let Some(player_position) = world.get::<Transform>(player).map(|t| t.position) else {
            return;
        };

        let delta = self.input.mouse_delta();

        let Some(rig) = world.get_mut::<CameraRig>(player) else {
            return;
        };

        rig.yaw -= delta.x * rig.sensitivity;
        rig.pitch += delta.y * rig.sensitivity;
        rig.pitch = rig.pitch.clamp(rig.min_pitch, rig.max_pitch);
        if rig.yaw >= 360.0 {
            rig.yaw -= 360.0;
        }
        if rig.yaw < 0.0 {
            rig.yaw += 360.0;
        }

        let orbit = Quaternion::from_axis_angle(Vec3::Y, degrees_to_radians(rig.yaw))
            * Quaternion::from_axis_angle(Vec3::X, degrees_to_radians(rig.pitch));
        let arm = rig.offset - Vec3::Z * rig.distance;
        rig.position = player_position + orbit.rotate_vec3(arm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::input::PlayerAction;
    use umbra_core::math::Vec2;

    struct MouseOnly(Vec2);

    impl InputSource for MouseOnly {
        fn is_action_held(&self, _action: PlayerAction) -> bool {
            false
        }

        fn mouse_delta(&self) -> Vec2 {
            self.0
        }
    }

    fn player_with_rig(world: &mut World, position: Vec3) {
        world.spawn((
            Player,
            Transform::from_position(position),
            CameraRig::default(),
        ));
    }

    #[test]
    fn test_rig_follows_player_at_rest() {
        let mut world = World::new();
        let position = Vec3::new(4.0, 0.0, 2.0);
        player_with_rig(&mut world, position);

        let mut system = CameraSystem::new(Arc::new(MouseOnly(Vec2::ZERO)));
        system.update(&mut world, 0.016);

        let player = world.find_first::<Player>().expect("player");
        let rig = world.get::<CameraRig>(player).expect("rig");
        // Zero yaw/pitch: the eye sits at offset minus distance along Z.
        let expected = position + Vec3::new(0.0, 1.5, -3.0);
        assert!(rig.position.distance(expected) < 1e-4);
    }

    #[test]
    fn test_pitch_clamps_to_rig_limits() {
        let mut world = World::new();
        player_with_rig(&mut world, Vec3::ZERO);

        // A huge downward mouse sweep.
        let mut system = CameraSystem::new(Arc::new(MouseOnly(Vec2::new(0.0, 10_000.0))));
        system.update(&mut world, 0.016);

        let player = world.find_first::<Player>().expect("player");
        let rig = world.get::<CameraRig>(player).expect("rig");
        assert_eq!(rig.pitch, rig.max_pitch);
    }

    #[test]
    fn test_yaw_wraps_into_range() {
        let mut world = World::new();
        player_with_rig(&mut world, Vec3::ZERO);

        // sensitivity 0.1: a -100 unit delta adds 10 degrees per frame.
        let mut system = CameraSystem::new(Arc::new(MouseOnly(Vec2::new(-100.0, 0.0))));
        for _ in 0..40 {
            system.update(&mut world, 0.016);
        }

        let player = world.find_first::<Player>().expect("player");
        let rig = world.get::<CameraRig>(player).expect("rig");
        assert!((0.0..360.0).contains(&rig.yaw), "yaw stays wrapped");
    }

    #[test]
    fn test_no_player_is_a_quiet_noop() {
        let mut world = World::new();
        let mut system = CameraSystem::new(Arc::new(MouseOnly(Vec2::ZERO)));
        system.update(&mut world, 0.016);
    }
}

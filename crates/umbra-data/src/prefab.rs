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

//! Prefab factories: convenience constructors for the handful of entity
//! templates the game uses.
//!
//! Prefabs are outside the simulation proper; they only compose component
//! bundles. Mesh geometry is the render backend's business; prefabs leave
//! `MeshRenderer.mesh` unset and the platform layer fills the handle in
//! after registering geometry.

use log::info;
use umbra_core::math::Vec3;

use crate::components::{
    AbilityInput, Ai, Attack, CameraRig, CombatInput, Cooldown, Corruption, CorruptionSource,
    DarkEnergy, DistortionKind, Enemy, Health, MeshRenderer, MovementProperties, Player,
    SpatialDistortion, Transform, Velocity,
};
use crate::config::WorldConfig;
use crate::ecs::{EntityId, World};

/// Spawns the player at the origin with the full ability kit.
pub fn spawn_player(world: &mut World, config: &WorldConfig) -> EntityId {
    let corruption = Corruption::new(
        0.0,
        config.corruption.low_threshold,
        config.corruption.medium_threshold,
        config.corruption.high_threshold,
    );

    let player = world.spawn((
        Player,
        Transform::default(),
        Velocity::default(),
        MovementProperties::with_speed(config.player.move_speed),
        Health::full(config.player.health),
        DarkEnergy::new(config.energy.pool, config.energy.recovery_rate),
        corruption,
        AbilityInput::new(),
        Cooldown::new(),
        CombatInput::new(),
        CameraRig::default(),
        MeshRenderer::default(),
    ));
    world.insert(
        player,
        Attack::new(
            config.player.attack_damage,
            config.player.attack_range,
            config.player.attack_angle,
            config.player.attack_cooldown,
        ),
    );

    info!("spawned player {player}");
    player
}

/// Spawns a hostile dark creature at `position` with a three-point patrol
/// loop starting there.
pub fn spawn_dark_creature(world: &mut World, position: Vec3, config: &WorldConfig) -> EntityId {
    let creature = &config.creature;

    let ai = Ai {
        sight_range: creature.sight_range,
        chase_range: creature.chase_range,
        attack_range: creature.engage_range,
        chase_speed: creature.chase_speed,
        patrol_speed: creature.patrol_speed,
        patrol_points: vec![
            position,
            position + Vec3::new(5.0, 0.0, 0.0),
            position + Vec3::new(5.0, 0.0, 5.0),
        ],
        ..Ai::default()
    };

    let entity = world.spawn((
        Enemy,
        Transform::from_position(position),
        Velocity::default(),
        MovementProperties::with_speed(creature.move_speed),
        ai,
        Attack::new(
            creature.attack_damage,
            creature.attack_range,
            creature.attack_angle,
            creature.attack_cooldown,
        ),
        CombatInput::new(),
        Health::full(creature.health),
        // Red tint; geometry is registered by the platform layer.
        MeshRenderer::pending(Vec3::new(1.0, 0.0, 0.0)),
    ));

    info!("spawned dark creature {entity} at ({:.1}, {:.1}, {:.1})", position.x, position.y, position.z);
    entity
}

/// Spawns a stationary corruption source.
pub fn spawn_corruption_source(
    world: &mut World,
    position: Vec3,
    power: f32,
    radius: f32,
) -> EntityId {
    let entity = world.spawn((
        Transform::from_position(position),
        CorruptionSource::new(power, radius),
    ));
    info!(
        "spawned corruption source {entity} at ({:.1}, {:.1}, {:.1})",
        position.x, position.y, position.z
    );
    entity
}

/// Spawns a timed spatial distortion of the given kind.
pub fn spawn_spatial_distortion(
    world: &mut World,
    kind: DistortionKind,
    position: Vec3,
    radius: f32,
    strength: f32,
    duration: f32,
) -> EntityId {
    let mut distortion = SpatialDistortion {
        kind,
        center: position,
        radius,
        strength,
        duration,
        ..SpatialDistortion::default()
    };
    match kind {
        DistortionKind::GravityShift => distortion.gravity_direction = -Vec3::Y,
        DistortionKind::TimeDilation => distortion.time_scale = 0.5,
        DistortionKind::SpatialRift => distortion.damage_per_second = 10.0,
    }

    let entity = world.spawn((Transform::from_position(position), distortion));
    info!("spawned spatial distortion {entity}");
    entity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_prefab_carries_full_kit() {
        let mut world = World::new();
        let config = WorldConfig::default();
        let player = spawn_player(&mut world, &config);

        assert!(world.has::<Player>(player));
        assert!(world.has::<Transform>(player));
        assert!(world.has::<Velocity>(player));
        assert!(world.has::<Health>(player));
        assert!(world.has::<DarkEnergy>(player));
        assert!(world.has::<Corruption>(player));
        assert!(world.has::<AbilityInput>(player));
        assert!(world.has::<Cooldown>(player));
        assert!(world.has::<CombatInput>(player));
        assert!(world.has::<CameraRig>(player));
        assert!(world.has::<Attack>(player));

        let health = world.get::<Health>(player).expect("health");
        assert_eq!(health.current, 100.0);
        assert_eq!(health.base_max, 100.0);
    }

    #[test]
    fn test_creature_prefab_patrol_route_starts_at_spawn() {
        let mut world = World::new();
        let config = WorldConfig::default();
        let position = Vec3::new(10.0, 0.0, 0.0);
        let creature = spawn_dark_creature(&mut world, position, &config);

        let ai = world.get::<Ai>(creature).expect("ai");
        assert_eq!(ai.patrol_points.len(), 3);
        assert_eq!(ai.patrol_points[0], position);
        assert_eq!(ai.sight_range, 15.0);
        assert_eq!(ai.attack_range, 1.0);

        let health = world.get::<Health>(creature).expect("health");
        assert_eq!(health.base_max, 80.0);
        assert!(!world.has::<Player>(creature));
    }

    #[test]
    fn test_distortion_prefab_sets_kind_parameter() {
        let mut world = World::new();
        let rift = spawn_spatial_distortion(
            &mut world,
            DistortionKind::SpatialRift,
            Vec3::ZERO,
            6.0,
            1.0,
            12.0,
        );
        let distortion = world.get::<SpatialDistortion>(rift).expect("distortion");
        assert_eq!(distortion.kind, DistortionKind::SpatialRift);
        assert_eq!(distortion.damage_per_second, 10.0);
        assert_eq!(distortion.duration, 12.0);

        let dilation = spawn_spatial_distortion(
            &mut world,
            DistortionKind::TimeDilation,
            Vec3::ZERO,
            6.0,
            1.0,
            12.0,
        );
        let distortion = world.get::<SpatialDistortion>(dilation).expect("distortion");
        assert_eq!(distortion.time_scale, 0.5);
    }
}

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

//! The hostile-creature behavior state machine.

use log::info;

use umbra_core::math::{radians_to_degrees, Quaternion, Vec3};
use umbra_data::components::{
    Ai, AiState, Attack, CombatInput, MovementProperties, Player, Transform, Velocity,
};
use umbra_data::{EntityId, System, World};

/// Arrival radius for patrol waypoints.
const PATROL_ARRIVAL_RADIUS: f32 = 0.5;

/// Drives the hostile behavior machine: Idle/Patrol as the passive loop,
/// Chase/Attack as the engaged loop.
///
/// The player is re-resolved by tag every frame; the relation is a weak id,
/// never a stored reference, so a despawned player simply stops resolving
/// and every engaged creature falls back toward Idle. Sight and range checks
/// run unconditionally each frame and preempt the duration-based
/// transitions.
pub struct AiSystem;

impl System for AiSystem {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        let player = world.find_first::<Player>();

        for entity in world.entity_ids() {
            if world.has::<Ai>(entity) {
                update_entity(world, entity, player, dt);
            }
        }
    }
}

fn update_entity(world: &mut World, entity: EntityId, player: Option<EntityId>, dt: f32) {
    if let Some(ai) = world.get_mut::<Ai>(entity) {
        ai.state_timer.tick(dt);
    }
    // The attack window keeps counting across states, like a wall clock.
    if let Some(attack) = world.get_mut::<Attack>(entity) {
        attack.timer.tick(dt);
    }

    if !world.has::<Transform>(entity) || !world.has::<Velocity>(entity) {
        return;
    }

    let player_position =
        player.and_then(|id| world.get::<Transform>(id).map(|transform| transform.position));

    let Some(state) = world.get::<Ai>(entity).map(|ai| ai.state) else {
        return;
    };

    match state {
        AiState::Idle => idle_behavior(world, entity, player_position),
        AiState::Patrol => patrol_behavior(world, entity, player_position),
        AiState::Chase => chase_behavior(world, entity, player_position),
        AiState::Attack => attack_behavior(world, entity, player, player_position, dt),
    }
}

/// Stand still; after the idle duration move on to Patrol. Spotting the
/// player preempts the dwell transition.
fn idle_behavior(world: &mut World, entity: EntityId, player_position: Option<Vec3>) {
    if let Some(velocity) = world.get_mut::<Velocity>(entity) {
        velocity.linear = Vec3::ZERO;
    }

    if let Some(ai) = world.get_mut::<Ai>(entity) {
        if ai.state_timer.elapsed() >= ai.idle_duration {
            ai.transition_to(AiState::Patrol);
        }
    }

    try_spot_player(world, entity, player_position);
}

/// Walk the cyclic route at patrol speed, facing the heading; rest after the
/// patrol duration. Spotting the player preempts everything.
fn patrol_behavior(world: &mut World, entity: EntityId, player_position: Option<Vec3>) {
    let position = match world.get::<Transform>(entity) {
        Some(transform) => transform.position,
        None => return,
    };

    let target = {
        let Some(ai) = world.get_mut::<Ai>(entity) else {
            return;
        };
        if ai.patrol_points.is_empty() {
            None
        } else {
            // Arriving at the current waypoint advances the route on this
            // same update.
            if position.distance(ai.patrol_points[ai.patrol_index]) < PATROL_ARRIVAL_RADIUS {
                ai.advance_patrol_point();
            }
            Some((ai.patrol_points[ai.patrol_index], ai.patrol_speed))
        }
    };

    if let Some((target, patrol_speed)) = target {
        let direction = (target - position).normalize();
        if let Some(movement) = world.get_mut::<MovementProperties>(entity) {
            movement.move_speed = patrol_speed;
            let speed = movement.effective_speed();
            if let Some(velocity) = world.get_mut::<Velocity>(entity) {
                velocity.linear = direction * speed;
            }
            // Face the heading, flattened onto the walking plane.
            let flat_heading = Vec3::new(direction.x, 0.0, direction.z).normalize();
            if flat_heading != Vec3::ZERO {
                if let Some(transform) = world.get_mut::<Transform>(entity) {
                    transform.set_rotation(Quaternion::look_rotation(flat_heading, Vec3::Y));
                }
            }
        }
    }

    if let Some(ai) = world.get_mut::<Ai>(entity) {
        if ai.state_timer.elapsed() >= ai.patrol_duration {
            ai.transition_to(AiState::Idle);
        }
    }

    try_spot_player(world, entity, player_position);
}

/// Run at the player. Close enough hands over to Attack; losing too much
/// ground gives up back to Patrol; a missing player drops to Idle.
fn chase_behavior(world: &mut World, entity: EntityId, player_position: Option<Vec3>) {
    let Some(player_position) = player_position else {
        if let Some(ai) = world.get_mut::<Ai>(entity) {
            ai.transition_to(AiState::Idle);
        }
        return;
    };

    let position = match world.get::<Transform>(entity) {
        Some(transform) => transform.position,
        None => return,
    };
    let Some((attack_range, chase_range, chase_speed)) = world
        .get::<Ai>(entity)
        .map(|ai| (ai.attack_range, ai.chase_range, ai.chase_speed))
    else {
        return;
    };

    let to_player = player_position - position;
    let distance = to_player.length();

    if distance > attack_range {
        let direction = to_player.normalize();
        if let Some(movement) = world.get_mut::<MovementProperties>(entity) {
            movement.move_speed = chase_speed;
            let speed = movement.effective_speed();
            if let Some(velocity) = world.get_mut::<Velocity>(entity) {
                velocity.linear = direction * speed;
            }
        }
        if let Some(transform) = world.get_mut::<Transform>(entity) {
            transform.set_rotation(Quaternion::look_rotation(direction, Vec3::Y));
        }
    }

    if distance < attack_range {
        if let Some(ai) = world.get_mut::<Ai>(entity) {
            ai.transition_to(AiState::Attack);
            info!("{entity} is in striking range");
        }
    }

    if distance > chase_range {
        if let Some(ai) = world.get_mut::<Ai>(entity) {
            ai.transition_to(AiState::Patrol);
            info!("{entity} gave up the chase");
        }
    }
}

/// Hold position and swing when the window, reach, and facing all line up;
/// drift back to Chase when the player slips out of reach.
fn attack_behavior(
    world: &mut World,
    entity: EntityId,
    player: Option<EntityId>,
    player_position: Option<Vec3>,
    dt: f32,
) {
    let (Some(player), Some(player_position)) = (player, player_position) else {
        if let Some(ai) = world.get_mut::<Ai>(entity) {
            ai.transition_to(AiState::Idle);
        }
        return;
    };

    if let Some(velocity) = world.get_mut::<Velocity>(entity) {
        velocity.linear = Vec3::ZERO;
    }

    let Some(attack) = world.get::<Attack>(entity).copied() else {
        return;
    };
    if !world.has::<CombatInput>(entity) {
        return;
    }
    let Some((position, forward)) = world
        .get::<Transform>(entity)
        .map(|transform| (transform.position, transform.forward))
    else {
        return;
    };

    let to_player = player_position - position;
    let distance = to_player.length();

    if distance > attack.range {
        if let Some(ai) = world.get_mut::<Ai>(entity) {
            ai.state = AiState::Chase;
        }
        return;
    }

    if attack.ready() && distance <= attack.range {
        let direction = to_player.normalize();
        let off_angle = radians_to_degrees(forward.dot(direction).clamp(-1.0, 1.0).acos());

        if off_angle <= attack.angle_degrees {
            if let Some(combat) = world.get_mut::<CombatInput>(entity) {
                combat.request(player);
            }
            if let Some(attack) = world.get_mut::<Attack>(entity) {
                attack.timer.restart();
            }
        } else {
            // Off-cone: turn toward the target this tick instead of
            // swinging.
            let turn_rate = world
                .get::<MovementProperties>(entity)
                .map(|movement| (movement.effective_speed() * dt).clamp(0.0, 1.0))
                .unwrap_or(0.0);
            if let Some(transform) = world.get_mut::<Transform>(entity) {
                let target_rotation = Quaternion::look_rotation(direction, Vec3::Y);
                let rotation = Quaternion::slerp(transform.rotation, target_rotation, turn_rate);
                transform.set_rotation(rotation);
            }
        }
    }
}

/// The every-frame sight check shared by the passive states.
fn try_spot_player(world: &mut World, entity: EntityId, player_position: Option<Vec3>) {
    let Some(player_position) = player_position else {
        return;
    };
    let Some(position) = world.get::<Transform>(entity).map(|t| t.position) else {
        return;
    };
    if let Some(ai) = world.get_mut::<Ai>(entity) {
        if position.distance(player_position) <= ai.sight_range {
            ai.transition_to(AiState::Chase);
            info!("{entity} spotted the player, giving chase");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_data::components::Health;

    fn spawn_player_at(world: &mut World, position: Vec3) -> EntityId {
        world.spawn((
            Player,
            Transform::from_position(position),
            Health::full(100.0),
        ))
    }

    fn spawn_creature_at(world: &mut World, position: Vec3) -> EntityId {
        let ai = Ai {
            sight_range: 10.0,
            chase_range: 15.0,
            attack_range: 2.0,
            patrol_points: vec![position, position + Vec3::new(5.0, 0.0, 0.0)],
            ..Ai::default()
        };
        world.spawn((
            Transform::from_position(position),
            Velocity::default(),
            MovementProperties::with_speed(5.0),
            ai,
            Attack::new(15.0, 3.0, 60.0, 2.0),
            CombatInput::new(),
        ))
    }

    #[test]
    fn test_creature_beyond_sight_never_engages() {
        let mut world = World::new();
        let _player = spawn_player_at(&mut world, Vec3::new(100.0, 0.0, 0.0));
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);

        // Long enough to cycle Idle -> Patrol -> Idle several times.
        for _ in 0..600 {
            AiSystem.update(&mut world, 0.05);
            let state = world.get::<Ai>(creature).expect("ai").state;
            assert!(
                matches!(state, AiState::Idle | AiState::Patrol),
                "out-of-sight creature must stay in the passive loop, was {state:?}"
            );
        }
    }

    #[test]
    fn test_idle_spots_player_within_sight() {
        let mut world = World::new();
        let _player = spawn_player_at(&mut world, Vec3::new(5.0, 0.0, 0.0));
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);

        AiSystem.update(&mut world, 0.016);

        assert_eq!(world.get::<Ai>(creature).expect("ai").state, AiState::Chase);
    }

    #[test]
    fn test_idle_transitions_to_patrol_after_dwell() {
        let mut world = World::new();
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);

        // Default idle duration is 3 seconds; no player exists at all.
        for _ in 0..4 {
            AiSystem.update(&mut world, 1.0);
        }
        assert_eq!(
            world.get::<Ai>(creature).expect("ai").state,
            AiState::Patrol
        );
    }

    #[test]
    fn test_patrol_advances_waypoint_on_arrival_same_update() {
        let mut world = World::new();
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);
        {
            let ai = world.get_mut::<Ai>(creature).expect("ai");
            ai.transition_to(AiState::Patrol);
        }

        // Standing within the arrival radius of waypoint 0.
        AiSystem.update(&mut world, 0.016);

        let ai = world.get::<Ai>(creature).expect("ai");
        assert_eq!(ai.patrol_index, 1, "arrival advances the cyclic index");
        let velocity = world.get::<Velocity>(creature).expect("velocity");
        assert!(
            velocity.linear.length() > 0.0,
            "the creature walks toward the next waypoint"
        );
    }

    #[test]
    fn test_chase_hands_over_to_attack_in_range() {
        let mut world = World::new();
        let _player = spawn_player_at(&mut world, Vec3::new(1.0, 0.0, 0.0));
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);
        world
            .get_mut::<Ai>(creature)
            .expect("ai")
            .transition_to(AiState::Chase);

        AiSystem.update(&mut world, 0.016);

        assert_eq!(
            world.get::<Ai>(creature).expect("ai").state,
            AiState::Attack
        );
    }

    #[test]
    fn test_chase_gives_up_beyond_chase_range() {
        let mut world = World::new();
        let _player = spawn_player_at(&mut world, Vec3::new(20.0, 0.0, 0.0));
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);
        world
            .get_mut::<Ai>(creature)
            .expect("ai")
            .transition_to(AiState::Chase);

        AiSystem.update(&mut world, 0.016);

        assert_eq!(
            world.get::<Ai>(creature).expect("ai").state,
            AiState::Patrol
        );
    }

    #[test]
    fn test_chase_without_player_falls_back_to_idle() {
        let mut world = World::new();
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);
        world
            .get_mut::<Ai>(creature)
            .expect("ai")
            .transition_to(AiState::Chase);

        AiSystem.update(&mut world, 0.016);

        assert_eq!(world.get::<Ai>(creature).expect("ai").state, AiState::Idle);
    }

    #[test]
    fn test_attack_queues_combat_request_when_facing_and_ready() {
        let mut world = World::new();
        // Player straight ahead (-Z is the default forward).
        let player = spawn_player_at(&mut world, Vec3::new(0.0, 0.0, -1.5));
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);
        {
            let ai = world.get_mut::<Ai>(creature).expect("ai");
            ai.transition_to(AiState::Attack);
        }
        {
            // The window since the last swing is already open.
            let attack = world.get_mut::<Attack>(creature).expect("attack");
            attack.timer.tick(10.0);
        }

        AiSystem.update(&mut world, 0.016);

        let targets = world
            .get_mut::<CombatInput>(creature)
            .expect("combat input")
            .drain();
        assert_eq!(targets, vec![player]);
        let attack = world.get::<Attack>(creature).expect("attack");
        assert!(
            attack.timer.elapsed() < 1.0,
            "a landed swing restarts the window"
        );
    }

    #[test]
    fn test_attack_off_cone_rotates_instead_of_swinging() {
        let mut world = World::new();
        // Player directly behind (+Z).
        let _player = spawn_player_at(&mut world, Vec3::new(0.0, 0.0, 1.5));
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);
        world
            .get_mut::<Ai>(creature)
            .expect("ai")
            .transition_to(AiState::Attack);
        world
            .get_mut::<Attack>(creature)
            .expect("attack")
            .timer
            .tick(10.0);

        let forward_before = world.get::<Transform>(creature).expect("transform").forward;
        AiSystem.update(&mut world, 0.016);

        let combat = world.get::<CombatInput>(creature).expect("combat input");
        assert!(combat.is_empty(), "no swing while facing the wrong way");
        let forward_after = world.get::<Transform>(creature).expect("transform").forward;
        assert!(
            forward_before.distance(forward_after) > 0.0,
            "the creature turned toward its target"
        );
    }

    #[test]
    fn test_attack_out_of_reach_resumes_chase() {
        let mut world = World::new();
        let _player = spawn_player_at(&mut world, Vec3::new(0.0, 0.0, -8.0));
        let creature = spawn_creature_at(&mut world, Vec3::ZERO);
        world
            .get_mut::<Ai>(creature)
            .expect("ai")
            .transition_to(AiState::Attack);

        AiSystem.update(&mut world, 0.016);

        assert_eq!(world.get::<Ai>(creature).expect("ai").state, AiState::Chase);
    }
}

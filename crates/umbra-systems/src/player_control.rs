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

//! Player intent: movement, ability requests, and melee attacks.

use std::collections::HashSet;
use std::sync::Arc;

use umbra_core::input::{InputSource, PlayerAction};
use umbra_core::math::{radians_to_degrees, Vec3};
use umbra_core::AbilityKind;
use umbra_data::components::{
    AbilityInput, Attack, CombatInput, Enemy, MovementProperties, Player, Transform, Velocity,
};
use umbra_data::{System, World};

/// Physical-action-to-ability bindings.
const ABILITY_BINDINGS: [(PlayerAction, AbilityKind); 5] = [
    (PlayerAction::AbilityPerception, AbilityKind::Perception),
    (PlayerAction::AbilityManipulation, AbilityKind::Manipulation),
    (PlayerAction::AbilityDistortion, AbilityKind::Distortion),
    (PlayerAction::AbilityAssimilation, AbilityKind::Assimilation),
    (PlayerAction::AbilityPurification, AbilityKind::Purification),
];

/// Turns the input snapshot into player intent.
///
/// Movement actions write the player's velocity directly (units per second,
/// integrated later by the movement system). Ability and attack actions are
/// edge-triggered: the system keeps the previous frame's held set and only a
/// rising edge produces a request, so holding a key enqueues exactly one.
pub struct PlayerControlSystem {
    input: Arc<dyn InputSource>,
    held_last_frame: HashSet<PlayerAction>,
}

impl PlayerControlSystem {
    /// Creates the system over the given input snapshot provider.
    pub fn new(input: Arc<dyn InputSource>) -> Self {
        Self {
            input,
            held_last_frame: HashSet::new(),
        }
    }

    fn just_pressed(&self, action: PlayerAction) -> bool {
        self.input.is_action_held(action) && !self.held_last_frame.contains(&action)
    }

    fn remember_held(&mut self) {
        self.held_last_frame.clear();
        for (action, _) in ABILITY_BINDINGS {
            if self.input.is_action_held(action) {
                self.held_last_frame.insert(action);
            }
        }
        if self.input.is_action_held(PlayerAction::Attack) {
            self.held_last_frame.insert(PlayerAction::Attack);
        }
    }

    fn handle_movement(&self, world: &mut World, player: umbra_data::EntityId) {
        let Some((forward, right)) = world
            .get::<Transform>(player)
            .map(|transform| (transform.forward, transform.right))
        else {
            return;
        };
        let speed = world
            .get::<MovementProperties>(player)
            .map(|movement| movement.effective_speed())
            .unwrap_or(0.0);

        let mut direction = Vec3::ZERO;
        if self.input.is_action_held(PlayerAction::MoveForward) {
            direction += forward;
        }
        if self.input.is_action_held(PlayerAction::MoveBackward) {
            direction -= forward;
        }
        if self.input.is_action_held(PlayerAction::MoveRight) {
            direction += right;
        }
        if self.input.is_action_held(PlayerAction::MoveLeft) {
            direction -= right;
        }

        if let Some(velocity) = world.get_mut::<Velocity>(player) {
            velocity.linear = if direction.length() > 0.0 {
                direction.normalize() * speed
            } else {
                Vec3::ZERO
            };
        }
    }

    fn handle_abilities(&self, world: &mut World, player: umbra_data::EntityId) {
        for (action, kind) in ABILITY_BINDINGS {
            if self.just_pressed(action) {
                if let Some(input) = world.get_mut::<AbilityInput>(player) {
                    input.request(kind);
                }
            }
        }
    }

    /// A rising-edge attack queues combat requests against every enemy
    /// inside the player's reach and facing cone, then restarts the swing
    /// window.
    fn handle_attack(&self, world: &mut World, player: umbra_data::EntityId, dt: f32) {
        if let Some(attack) = world.get_mut::<Attack>(player) {
            attack.timer.tick(dt);
        }
        if !self.just_pressed(PlayerAction::Attack) {
            return;
        }
        let Some(attack) = world.get::<Attack>(player).copied() else {
            return;
        };
        if !attack.ready() || !world.has::<CombatInput>(player) {
            return;
        }
        let Some((position, forward)) = world
            .get::<Transform>(player)
            .map(|transform| (transform.position, transform.forward))
        else {
            return;
        };

        let targets: Vec<_> = world
            .iter::<Enemy>()
            .filter_map(|(enemy, _)| {
                let enemy_position = world.get::<Transform>(enemy)?.position;
                let to_enemy = enemy_position - position;
                if to_enemy.length() > attack.range {
                    return None;
                }
                let off_angle =
                    radians_to_degrees(forward.dot(to_enemy.normalize()).clamp(-1.0, 1.0).acos());
                (off_angle <= attack.angle_degrees).then_some(enemy)
            })
            .collect();

        if targets.is_empty() {
            return;
        }
        if let Some(combat) = world.get_mut::<CombatInput>(player) {
            for target in targets {
                combat.request(target);
            }
        }
        if let Some(attack) = world.get_mut::<Attack>(player) {
            attack.timer.restart();
        }
    }
}

impl System for PlayerControlSystem {
    fn name(&self) -> &'static str {
        "player_control"
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        if let Some(player) = world.find_first::<Player>() {
            self.handle_movement(world, player);
            self.handle_abilities(world, player);
            self.handle_attack(world, player, dt);
        }
        self.remember_held();
    }
}

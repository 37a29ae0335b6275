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

//! Damage resolution: direct attack requests and rift area damage.

use log::info;

use umbra_data::components::{
    Attack, CombatInput, DistortionKind, Health, SpatialDistortion, Transform,
};
use umbra_data::{EntityId, System, World};

/// Resolves the frame's damage.
///
/// Two sources, in order: queued attack requests (drained from every
/// attacker's `CombatInput`), then area damage from active rift distortions.
/// Damage floors health at zero; the frame a pool reaches zero its entity is
/// marked for destruction exactly once; removal itself happens in the
/// world's end-of-frame sweep, never here.
pub struct CombatSystem;

impl System for CombatSystem {
    fn name(&self) -> &'static str {
        "combat"
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        // Direct requests.
        for attacker in world.entity_ids() {
            if !world.has::<Attack>(attacker) || !world.has::<CombatInput>(attacker) {
                continue;
            }
            let Some(damage) = world.get::<Attack>(attacker).map(|attack| attack.damage) else {
                continue;
            };
            let targets = match world.get_mut::<CombatInput>(attacker) {
                Some(input) => input.drain(),
                None => continue,
            };

            for target in targets {
                // A target despawned earlier in the frame (or queued with a
                // stale id) is silently skipped.
                if !world.is_alive(target) {
                    continue;
                }
                if apply_damage(world, target, damage) {
                    info!("{attacker} hit {target} for {damage:.0}");
                }
            }
        }

        // Rift area damage, proportional to dt, to every other entity in
        // radius. Brute-force distance scan; entity counts stay small.
        for source in world.entity_ids() {
            let Some(distortion) = world.get::<SpatialDistortion>(source) else {
                continue;
            };
            if distortion.kind != DistortionKind::SpatialRift {
                continue;
            }
            let (radius, dps) = (distortion.radius, distortion.damage_per_second);
            let Some(center) = world.get::<Transform>(source).map(|t| t.position) else {
                continue;
            };

            for victim in world.entity_ids() {
                if victim == source {
                    continue;
                }
                let in_radius = world
                    .get::<Transform>(victim)
                    .is_some_and(|t| t.position.distance(center) <= radius);
                if in_radius && world.has::<Health>(victim) {
                    apply_damage(world, victim, dps * dt);
                }
            }
        }
    }
}

/// Subtracts `damage` from the target's health, flooring at zero.
///
/// Returns whether any damage was applied (the target had a health pool).
/// Crossing to zero marks the entity for destruction; an already-depleted
/// target is never marked a second time.
pub fn apply_damage(world: &mut World, target: EntityId, damage: f32) -> bool {
    let Some(health) = world.get_mut::<Health>(target) else {
        return false;
    };

    let before = health.current;
    health.current = (health.current - damage).max(0.0);
    let died = before > 0.0 && health.current <= 0.0;

    if died {
        info!("{target} was defeated");
        world.mark_for_despawn(target);
    }
    true
}

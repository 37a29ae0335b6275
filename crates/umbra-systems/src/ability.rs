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

//! Ability activation: energy accounting, cooldowns, and per-kind effects.

use log::{info, warn};
use thiserror::Error;

use umbra_core::ability::{
    CORRUPTION_PER_ENERGY, DISTORTION_CORRUPTION_SURCHARGE, PURIFICATION_CLEANSE,
};
use umbra_core::AbilityKind;
use umbra_data::components::{AbilityInput, Cooldown, Corruption, DarkEnergy, Transform};
use umbra_data::{EntityId, System, World};

/// Why an activation attempt was rejected.
///
/// These are expected, user-facing soft failures: the system logs them and
/// moves on, no state is left half-mutated and nothing ever panics.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AbilityError {
    /// The entity cannot channel abilities at all.
    #[error("entity lacks the dark energy or corruption component")]
    MissingComponents,
    /// The energy pool cannot cover the cost.
    #[error("insufficient dark energy: need {required:.0}, have {available:.0}")]
    InsufficientEnergy {
        /// The cost of the requested ability.
        required: f32,
        /// The energy actually available.
        available: f32,
    },
    /// The per-kind effect had nothing to act on. The energy is still spent.
    #[error("the {0} effect has no valid target on this entity")]
    EffectUnavailable(&'static str),
}

/// Regenerates dark energy, advances cooldowns, and resolves queued ability
/// requests.
///
/// Request resolution order is queue insertion order. A request on cooldown
/// is skipped silently; otherwise activation deducts the energy cost
/// unconditionally once the affordability check passes, runs the per-kind
/// effect, and on success feeds corruption back and arms the cooldown. A
/// failed activation never refunds energy, never arms a cooldown, and never
/// adds corruption.
pub struct AbilitySystem;

impl System for AbilitySystem {
    fn name(&self) -> &'static str {
        "ability"
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        for entity in world.entity_ids() {
            // Energy regenerates continuously, clamped to the pool cap. The
            // recovery rate itself is corruption's to modulate.
            if let Some(energy) = world.get_mut::<DarkEnergy>(entity) {
                energy.current = (energy.current + energy.recovery_rate * dt).min(energy.max);
            }

            if let Some(cooldown) = world.get_mut::<Cooldown>(entity) {
                cooldown.tick(dt);
            }

            let requests = match world.get_mut::<AbilityInput>(entity) {
                Some(input) => input.drain(),
                None => continue,
            };

            for kind in requests {
                let on_cooldown = world
                    .get::<Cooldown>(entity)
                    .is_some_and(|c| c.is_on_cooldown(kind));
                if on_cooldown {
                    continue;
                }

                match activate_ability(world, entity, kind) {
                    Ok(()) => {
                        if let Some(cooldown) = world.get_mut::<Cooldown>(entity) {
                            cooldown.set(kind, kind.cooldown_duration());
                        }
                    }
                    Err(AbilityError::InsufficientEnergy {
                        required,
                        available,
                    }) => {
                        info!(
                            "{entity} cannot afford {}: need {required:.0}, have {available:.0}",
                            kind.name()
                        );
                    }
                    Err(err) => {
                        warn!("{entity} failed to activate {}: {err}", kind.name());
                    }
                }
            }
        }
    }
}

/// Attempts to activate `kind` on `entity`.
///
/// On success the energy cost has been deducted, the effect applied, and the
/// corruption feedback added; the caller is responsible for arming the
/// cooldown. On failure after the cost check, the energy stays spent (the
/// channeling itself consumed it) but no corruption is added.
pub fn activate_ability(
    world: &mut World,
    entity: EntityId,
    kind: AbilityKind,
) -> Result<(), AbilityError> {
    if !world.has::<DarkEnergy>(entity) || !world.has::<Corruption>(entity) {
        return Err(AbilityError::MissingComponents);
    }

    let cost = kind.energy_cost();
    let available = world
        .get::<DarkEnergy>(entity)
        .map(|energy| energy.current)
        .ok_or(AbilityError::MissingComponents)?;

    if available < cost {
        return Err(AbilityError::InsufficientEnergy {
            required: cost,
            available,
        });
    }

    // The check passed; the cost is committed before the effect runs.
    if let Some(energy) = world.get_mut::<DarkEnergy>(entity) {
        energy.current -= cost;
    }

    apply_effect(world, entity, kind)?;

    if let Some(corruption) = world.get_mut::<Corruption>(entity) {
        let feedback = cost * CORRUPTION_PER_ENERGY;
        corruption.add(feedback);
        info!(
            "{entity} activated {}: cost {cost:.0}, corruption +{feedback:.1} (now {:.1})",
            kind.name(),
            corruption.current
        );
    }

    Ok(())
}

fn apply_effect(world: &mut World, entity: EntityId, kind: AbilityKind) -> Result<(), AbilityError> {
    match kind {
        AbilityKind::Perception => {
            info!("{entity} perceives the hidden");
            Ok(())
        }
        AbilityKind::Manipulation => {
            info!("{entity} reaches out to move the distant");
            Ok(())
        }
        AbilityKind::Assimilation => {
            info!("{entity} bends a creature's will");
            Ok(())
        }
        AbilityKind::Distortion => {
            let Some(transform) = world.get_mut::<Transform>(entity) else {
                return Err(AbilityError::EffectUnavailable("distortion"));
            };
            transform.gravity_direction = -transform.gravity_direction;
            let gravity = transform.gravity_direction;
            info!(
                "{entity} inverted gravity to ({:.1}, {:.1}, {:.1})",
                gravity.x, gravity.y, gravity.z
            );

            // The warped pull exacts a flat corruption surcharge on top of
            // the activation feedback.
            if let Some(corruption) = world.get_mut::<Corruption>(entity) {
                corruption.add(DISTORTION_CORRUPTION_SURCHARGE);
            }
            Ok(())
        }
        AbilityKind::Purification => {
            let Some(corruption) = world.get_mut::<Corruption>(entity) else {
                return Err(AbilityError::EffectUnavailable("purification"));
            };
            corruption.add(-PURIFICATION_CLEANSE);
            info!(
                "{entity} purified corruption down to {:.1}",
                corruption.current
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::math::Vec3;

    fn caster(world: &mut World, energy: f32) -> EntityId {
        world.spawn((
            Transform::default(),
            DarkEnergy::new(energy, 0.0),
            Corruption::default(),
            AbilityInput::new(),
            Cooldown::new(),
        ))
    }

    fn request_and_run(world: &mut World, entity: EntityId, kind: AbilityKind, dt: f32) {
        world
            .get_mut::<AbilityInput>(entity)
            .expect("ability input")
            .request(kind);
        AbilitySystem.update(world, dt);
    }

    #[test]
    fn test_insufficient_energy_changes_nothing() {
        let mut world = World::new();
        let entity = caster(&mut world, 25.0);

        // Distortion costs 30: the request must fail without side effects.
        request_and_run(&mut world, entity, AbilityKind::Distortion, 0.0);

        let energy = world.get::<DarkEnergy>(entity).expect("energy");
        assert_eq!(energy.current, 25.0, "failed activation refuses the cost");
        let corruption = world.get::<Corruption>(entity).expect("corruption");
        assert_eq!(corruption.current, 0.0, "no corruption on failure");
        let cooldown = world.get::<Cooldown>(entity).expect("cooldown");
        assert!(!cooldown.is_on_cooldown(AbilityKind::Distortion));
    }

    #[test]
    fn test_successful_activation_pays_and_corrupts_and_arms_cooldown() {
        let mut world = World::new();
        let entity = caster(&mut world, 100.0);

        request_and_run(&mut world, entity, AbilityKind::Perception, 0.0);

        let energy = world.get::<DarkEnergy>(entity).expect("energy");
        assert_eq!(energy.current, 90.0);
        let corruption = world.get::<Corruption>(entity).expect("corruption");
        assert_eq!(corruption.current, 10.0 * CORRUPTION_PER_ENERGY);
        let cooldown = world.get::<Cooldown>(entity).expect("cooldown");
        assert!(cooldown.is_on_cooldown(AbilityKind::Perception));
    }

    #[test]
    fn test_activation_never_leaves_energy_negative() {
        let mut world = World::new();
        let entity = caster(&mut world, 50.0);

        // Purification costs exactly 50.
        request_and_run(&mut world, entity, AbilityKind::Purification, 0.0);
        let energy = world.get::<DarkEnergy>(entity).expect("energy");
        assert_eq!(energy.current, 0.0);

        // A second attempt finds an empty pool and is rejected.
        request_and_run(&mut world, entity, AbilityKind::Perception, 0.0);
        let energy = world.get::<DarkEnergy>(entity).expect("energy");
        assert!(energy.current >= 0.0);
    }

    #[test]
    fn test_purification_scenario() {
        // DarkEnergy 50, Corruption 20: Purification drains the pool to 0,
        // cleanses 15, then the activation feedback adds 50 * 0.1 back.
        let mut world = World::new();
        let entity = caster(&mut world, 50.0);
        world
            .get_mut::<Corruption>(entity)
            .expect("corruption")
            .current = 20.0;

        request_and_run(&mut world, entity, AbilityKind::Purification, 0.0);

        let energy = world.get::<DarkEnergy>(entity).expect("energy");
        assert_eq!(energy.current, 0.0);
        let corruption = world.get::<Corruption>(entity).expect("corruption");
        let expected = 20.0 - PURIFICATION_CLEANSE + 50.0 * CORRUPTION_PER_ENERGY;
        assert!((corruption.current - expected).abs() < 1e-5);
    }

    #[test]
    fn test_distortion_inverts_gravity_and_adds_surcharge() {
        let mut world = World::new();
        let entity = caster(&mut world, 100.0);

        request_and_run(&mut world, entity, AbilityKind::Distortion, 0.0);

        let transform = world.get::<Transform>(entity).expect("transform");
        assert_eq!(transform.gravity_direction, Vec3::Y, "gravity flipped up");
        let corruption = world.get::<Corruption>(entity).expect("corruption");
        let expected = 30.0 * CORRUPTION_PER_ENERGY + DISTORTION_CORRUPTION_SURCHARGE;
        assert!((corruption.current - expected).abs() < 1e-5);
    }

    #[test]
    fn test_request_on_cooldown_is_skipped_without_cost() {
        let mut world = World::new();
        let entity = caster(&mut world, 100.0);

        request_and_run(&mut world, entity, AbilityKind::Perception, 0.0);
        let after_first = world.get::<DarkEnergy>(entity).expect("energy").current;

        // Still cooling down: the second request must be a silent no-op.
        request_and_run(&mut world, entity, AbilityKind::Perception, 0.0);
        let after_second = world.get::<DarkEnergy>(entity).expect("energy").current;
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_queue_ends_frame_empty_and_multiple_kinds_resolve() {
        let mut world = World::new();
        let entity = caster(&mut world, 100.0);

        {
            let input = world.get_mut::<AbilityInput>(entity).expect("input");
            input.request(AbilityKind::Perception);
            input.request(AbilityKind::Manipulation);
        }
        AbilitySystem.update(&mut world, 0.0);

        let energy = world.get::<DarkEnergy>(entity).expect("energy");
        assert_eq!(energy.current, 70.0, "both activations were paid");
        assert!(world
            .get::<AbilityInput>(entity)
            .expect("input")
            .is_empty());
    }

    #[test]
    fn test_energy_regenerates_up_to_cap() {
        let mut world = World::new();
        let entity = world.spawn((DarkEnergy::new(100.0, 5.0), Corruption::default()));
        world.get_mut::<DarkEnergy>(entity).expect("energy").current = 95.0;

        AbilitySystem.update(&mut world, 2.0);

        let energy = world.get::<DarkEnergy>(entity).expect("energy");
        assert_eq!(energy.current, 100.0, "regeneration clamps at max");
    }

    #[test]
    fn test_entity_without_kit_reports_missing_components() {
        let mut world = World::new();
        let bare = world.spawn(Transform::default());
        assert_eq!(
            activate_ability(&mut world, bare, AbilityKind::Perception),
            Err(AbilityError::MissingComponents)
        );
    }
}

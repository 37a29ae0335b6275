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

//! The staged corruption severity model.

use log::info;

use umbra_data::components::{Corruption, CorruptionStage, DarkEnergy, Health};
use umbra_data::{EntityId, System, World};

/// Seconds between applications of the periodic stage effects.
const EFFECT_INTERVAL: f32 = 1.0;

/// Maximum health-cap reduction at the top of the Medium band.
const MEDIUM_MAX_HEALTH_REDUCTION: f32 = 0.1;
/// Maximum health-cap reduction at the top of the High/Critical band.
const HIGH_MAX_HEALTH_REDUCTION: f32 = 0.3;
/// Maximum energy-recovery reduction (all bands interpolate toward this).
const MAX_RECOVERY_REDUCTION: f32 = 0.3;
/// Health drained per application in the High stage, as a share of base max.
const HIGH_DRAIN_SHARE: f32 = 0.01;
/// Health drained per application in the Critical stage.
const CRITICAL_DRAIN_SHARE: f32 = 0.1;

/// Drives the staged corruption severity model.
///
/// Two independent cadences: staging is re-derived every tick (emitting a
/// log notification exactly on transition edges), while the numeric effects
/// of the current stage apply once per elapsed second on the component's own
/// effect timer.
pub struct CorruptionSystem;

impl CorruptionSystem {
    /// Creates the system.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CorruptionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for CorruptionSystem {
    fn name(&self) -> &'static str {
        "corruption"
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        for entity in world.entity_ids() {
            let fire_effects = {
                let Some(corruption) = world.get_mut::<Corruption>(entity) else {
                    continue;
                };

                if corruption.update_stage() {
                    info!(
                        "{entity} corruption stage {} -> {}",
                        corruption.last_stage.name(),
                        corruption.stage.name()
                    );
                }

                corruption.effect_timer.tick(dt);
                if corruption.effect_timer.elapsed() >= EFFECT_INTERVAL {
                    corruption.effect_timer.restart();
                    true
                } else {
                    false
                }
            };

            if fire_effects {
                apply_stage_effects(world, entity);
            }
        }
    }
}

/// Applies one application of the current stage's numeric effect.
fn apply_stage_effects(world: &mut World, entity: EntityId) {
    let Some(corruption) = world.get::<Corruption>(entity) else {
        return;
    };
    let stage = corruption.current_stage();
    let current = corruption.current;
    let (low, medium, high) = (
        corruption.low_threshold,
        corruption.medium_threshold,
        corruption.high_threshold,
    );

    match stage {
        CorruptionStage::None => {}
        CorruptionStage::Low => {
            // Cosmetic only: visual distortion is the renderer's business.
        }
        CorruptionStage::Medium => {
            let ratio = ((current - low) / (medium - low)).clamp(0.0, 1.0);
            reduce_caps(world, entity, MEDIUM_MAX_HEALTH_REDUCTION * ratio, ratio);
        }
        CorruptionStage::High => {
            let ratio = ((current - medium) / (high - medium)).clamp(0.0, 1.0);
            drain_health(world, entity, HIGH_DRAIN_SHARE);
            reduce_caps(world, entity, HIGH_MAX_HEALTH_REDUCTION * ratio, ratio);
        }
        CorruptionStage::Critical => {
            // Same interpolation range as High, harsher drain.
            let ratio = ((current - medium) / (high - medium)).clamp(0.0, 1.0);
            drain_health(world, entity, CRITICAL_DRAIN_SHARE);
            reduce_caps(world, entity, HIGH_MAX_HEALTH_REDUCTION * ratio, ratio);
        }
    }
}

/// Reduces the health cap by `health_share` of base max and the energy
/// recovery rate by `ratio` of the maximum recovery reduction, clamping
/// current values down to the new caps.
fn reduce_caps(world: &mut World, entity: EntityId, health_share: f32, ratio: f32) {
    if let Some(health) = world.get_mut::<Health>(entity) {
        health.max = health.base_max * (1.0 - health_share);
        health.clamp_to_max();
    }
    if let Some(energy) = world.get_mut::<DarkEnergy>(entity) {
        energy.recovery_rate = energy.base_recovery_rate * (1.0 - MAX_RECOVERY_REDUCTION * ratio);
        if energy.current > energy.max {
            energy.current = energy.max;
        }
    }
}

/// Drains `share` of base-max health, flooring at zero.
fn drain_health(world: &mut World, entity: EntityId, share: f32) {
    if let Some(health) = world.get_mut::<Health>(entity) {
        health.current = (health.current - health.base_max * share).max(0.0);
    }
}

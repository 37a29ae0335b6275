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

//! Environmental escalation: dark tides, corruption sources, distortions.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use umbra_core::math::Vec3;
use umbra_core::time::IntervalTimer;
use umbra_data::components::{Corruption, CorruptionSource, DarkTide, SpatialDistortion, Transform};
use umbra_data::{prefab, System, World, WorldConfig};

/// Drives the world's escalating environmental pressure.
///
/// Three responsibilities: the recurring dark-tide event (amplify every
/// corruption source, spawn a batch of hostiles at random positions),
/// per-frame corruption-source growth and radiation with linear distance
/// falloff, and aging of spatial distortions (expiry marks the carrier for
/// the end-of-frame sweep).
pub struct EnvironmentSystem {
    config: WorldConfig,
    tide_timer: IntervalTimer,
    rng: StdRng,
}

impl EnvironmentSystem {
    /// Creates the system. `rng_seed` makes tide spawn positions
    /// reproducible.
    pub fn new(config: WorldConfig, rng_seed: u64) -> Self {
        let tide_timer = IntervalTimer::new(config.environment.dark_tide_interval);
        Self {
            config,
            tide_timer,
            rng: StdRng::seed_from_u64(rng_seed),
        }
    }

    /// Unleashes a dark tide: records the event entity, amplifies every
    /// corruption source, and spawns the hostile batch.
    fn unleash_dark_tide(&mut self, world: &mut World) {
        let env = &self.config.environment;
        world.spawn(DarkTide::new(
            env.tide_duration,
            env.tide_power_multiplier,
            env.tide_spawn_rate_multiplier,
        ));

        for entity in world.entity_ids() {
            if let Some(source) = world.get_mut::<CorruptionSource>(entity) {
                source.power *= env.tide_power_multiplier;
            }
        }

        let half_extent = env.spawn_half_extent;
        for _ in 0..env.tide_spawn_count {
            let position = Vec3::new(
                self.rng.gen_range(-half_extent..half_extent),
                0.0,
                self.rng.gen_range(-half_extent..half_extent),
            );
            prefab::spawn_dark_creature(world, position, &self.config);
        }

        info!(
            "a dark tide surges: sources amplified x{:.1}, {} hostiles spawned",
            env.tide_power_multiplier, env.tide_spawn_count
        );
    }

    /// Grows each source and radiates corruption to everything in radius,
    /// attenuated linearly with distance.
    fn radiate_sources(&self, world: &mut World, dt: f32) {
        let growth = self.config.environment.source_growth_per_second;

        for entity in world.entity_ids() {
            if !world.has::<CorruptionSource>(entity) {
                continue;
            }
            let Some(center) = world.get::<Transform>(entity).map(|t| t.position) else {
                continue;
            };
            let (power, radius) = {
                let Some(source) = world.get_mut::<CorruptionSource>(entity) else {
                    continue;
                };
                source.power += growth * dt;
                (source.power, source.radius)
            };

            for other in world.entity_ids() {
                if other == entity {
                    continue;
                }
                let Some(distance) = world
                    .get::<Transform>(other)
                    .map(|t| t.position.distance(center))
                else {
                    continue;
                };
                if distance > radius {
                    continue;
                }
                if let Some(corruption) = world.get_mut::<Corruption>(other) {
                    let effect = power * (1.0 - distance / radius);
                    corruption.add(effect * dt);
                }
            }
        }
    }

    /// Ages every distortion once per frame; expired ones are marked for the
    /// sweep.
    fn age_distortions(&self, world: &mut World, dt: f32) {
        for entity in world.entity_ids() {
            let expired = {
                let Some(distortion) = world.get_mut::<SpatialDistortion>(entity) else {
                    continue;
                };
                distortion.duration -= dt;
                distortion.duration <= 0.0
            };
            if expired {
                world.mark_for_despawn(entity);
                info!("spatial distortion {entity} dissipated");
            }
        }
    }
}

impl System for EnvironmentSystem {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        if self.tide_timer.tick(dt) {
            self.unleash_dark_tide(world);
        }
        self.radiate_sources(world, dt);
        self.age_distortions(world, dt);
    }
}

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

//! Headless frame driver for the Umbra simulation.
//!
//! Owns the frame contract: once per loop iteration it calls
//! `world.update(dt)` followed by `world.apply_despawns()`, with `dt` the
//! wall-clock seconds since the previous iteration. Windowing, input devices,
//! and GPU work live behind the `umbra-core` boundary traits; this binary
//! plugs in the inert/discarding implementations so the simulation can run
//! anywhere.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::info;
use rand::RngCore;

use umbra_core::input::InertInput;
use umbra_core::math::Vec3;
use umbra_core::render::DiscardRenderer;
use umbra_data::{prefab, World, WorldConfig};
use umbra_systems::install_default_pipeline;

/// Where the optional tuning override lives.
const CONFIG_PATH: &str = "config/umbra.ron";

/// Frame cap for headless runs, overridable via `UMBRA_FRAMES`.
const DEFAULT_FRAME_CAP: u64 = 600;

/// Target pacing for the headless loop.
const TARGET_FRAME_TIME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frame_cap: u64 = match std::env::var("UMBRA_FRAMES") {
        Ok(value) => value
            .parse()
            .context("UMBRA_FRAMES must be a frame count")?,
        Err(_) => DEFAULT_FRAME_CAP,
    };

    let config = WorldConfig::load(CONFIG_PATH);
    let mut world = World::new();

    install_default_pipeline(
        &mut world,
        Arc::new(InertInput),
        Box::new(DiscardRenderer::default()),
        &config,
        rand::thread_rng().next_u64(),
    );

    build_initial_scene(&mut world, &config);
    info!(
        "simulation ready: {} entities, running {frame_cap} frames",
        world.entity_count()
    );

    let mut last_frame = Instant::now();
    for _ in 0..frame_cap {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        world.update(dt);
        world.apply_despawns();

        let elapsed = last_frame.elapsed();
        if elapsed < TARGET_FRAME_TIME {
            std::thread::sleep(TARGET_FRAME_TIME - elapsed);
        }
    }

    info!(
        "simulation finished with {} entities alive",
        world.entity_count()
    );
    Ok(())
}

/// The starting scene: the player at the origin, two corruption sources
/// flanking the field, and four dark creatures around the perimeter.
fn build_initial_scene(world: &mut World, config: &WorldConfig) {
    prefab::spawn_player(world, config);

    prefab::spawn_corruption_source(world, Vec3::new(10.0, 0.0, 10.0), 15.0, 8.0);
    prefab::spawn_corruption_source(world, Vec3::new(-10.0, 0.0, -10.0), 12.0, 6.0);

    prefab::spawn_dark_creature(world, Vec3::new(10.0, 0.0, 0.0), config);
    prefab::spawn_dark_creature(world, Vec3::new(-10.0, 0.0, 0.0), config);
    prefab::spawn_dark_creature(world, Vec3::new(0.0, 0.0, 10.0), config);
    prefab::spawn_dark_creature(world, Vec3::new(0.0, 0.0, -10.0), config);
}

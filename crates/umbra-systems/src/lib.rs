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

//! # Umbra Systems
//!
//! The per-frame gameplay pipeline. Each system is one stage; the order they
//! are registered in is a first-class design decision because all mutation
//! is synchronous and later stages read what earlier stages wrote within the
//! same frame (player control fills the intent queues that the ability and
//! combat systems drain, the AI writes combat intent the combat system
//! resolves, and so on).
//!
//! [`install_default_pipeline`] wires the canonical order:
//! Movement, Camera, PlayerControl, Ability, Corruption, Combat, Ai,
//! Environment, Render.

#![warn(missing_docs)]

use std::sync::Arc;

use umbra_core::input::InputSource;
use umbra_core::render::RenderBackend;
use umbra_data::{World, WorldConfig};

pub mod ability;
pub mod ai;
pub mod camera;
pub mod combat;
pub mod corruption;
pub mod environment;
pub mod movement;
pub mod player_control;
pub mod render;

pub use ability::{AbilityError, AbilitySystem};
pub use ai::AiSystem;
pub use camera::CameraSystem;
pub use combat::CombatSystem;
pub use corruption::CorruptionSystem;
pub use environment::EnvironmentSystem;
pub use movement::MovementSystem;
pub use player_control::PlayerControlSystem;
pub use render::RenderSystem;

/// Registers the full pipeline on `world` in the canonical order.
///
/// `rng_seed` feeds the environment system's spawn randomization so headless
/// runs can be made reproducible.
pub fn install_default_pipeline(
    world: &mut World,
    input: Arc<dyn InputSource>,
    backend: Box<dyn RenderBackend>,
    config: &WorldConfig,
    rng_seed: u64,
) {
    world.add_system(Box::new(MovementSystem));
    world.add_system(Box::new(CameraSystem::new(input.clone())));
    world.add_system(Box::new(PlayerControlSystem::new(input)));
    world.add_system(Box::new(AbilitySystem));
    world.add_system(Box::new(CorruptionSystem::new()));
    world.add_system(Box::new(CombatSystem));
    world.add_system(Box::new(AiSystem));
    world.add_system(Box::new(EnvironmentSystem::new(config.clone(), rng_seed)));
    world.add_system(Box::new(RenderSystem::new(backend)));
}

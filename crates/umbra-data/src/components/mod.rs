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

//! The closed set of gameplay components.
//!
//! Components are plain data records; the only behavior they carry is small
//! derived-value helpers (effective speed, corruption staging, cooldown
//! queries). Everything that *changes* component state lives in the systems.

mod ability_input;
mod ai;
mod attack;
mod camera_rig;
mod combat_input;
mod cooldown;
mod corruption;
mod dark_energy;
mod environment;
mod health;
mod mesh_renderer;
mod movement_properties;
mod tags;
mod transform;
mod velocity;

pub use ability_input::AbilityInput;
pub use ai::{Ai, AiState};
pub use attack::Attack;
pub use camera_rig::CameraRig;
pub use combat_input::CombatInput;
pub use cooldown::Cooldown;
pub use corruption::{Corruption, CorruptionStage};
pub use dark_energy::DarkEnergy;
pub use environment::{CorruptionSource, DarkTide, DistortionKind, SpatialDistortion};
pub use health::Health;
pub use mesh_renderer::MeshRenderer;
pub use movement_properties::MovementProperties;
pub use tags::{Enemy, Player};
pub use transform::Transform;
pub use velocity::Velocity;

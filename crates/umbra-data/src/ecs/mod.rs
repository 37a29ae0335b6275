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

//! The Umbra entity-component runtime.
//!
//! The design dissociates an entity's identity from the physical storage of
//! its component data: identities are generation-checked [`EntityId`]s managed
//! by an internal slot store, while component data lives in one parallel
//! arena per component kind, indexed by entity slot. The component set is
//! closed at compile time (see [`ComponentKind`]), which gives O(1) typed
//! lookup without any reflective type identity.
//!
//! Entity destruction is a two-phase contract: systems may only *request*
//! destruction via [`World::mark_for_despawn`]; the actual sweep happens in
//! [`World::apply_despawns`], which the frame driver calls once per frame
//! after [`World::update`]. Every system therefore observes a stable entity
//! set for the whole frame.
//!
//! The primary entry point for interacting with the ECS is the [`World`]
//! struct.

mod bundle;
mod entity;
mod entity_store;
mod store;
mod system;
mod world;

pub use bundle::ComponentBundle;
pub use entity::EntityId;
pub use store::{Arena, Component, ComponentKind, ComponentStore};
pub use system::System;
pub use world::World;

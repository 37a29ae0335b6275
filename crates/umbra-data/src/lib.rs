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

//! # Umbra Data
//!
//! The data layer of the Umbra simulation: the entity-component world, the
//! closed set of gameplay components, prefab factories, and the RON-loadable
//! tuning configuration.

#![warn(missing_docs)]

pub mod components;
pub mod config;
pub mod ecs;
pub mod prefab;

pub use config::WorldConfig;
pub use ecs::{Component, ComponentBundle, ComponentKind, EntityId, System, World};

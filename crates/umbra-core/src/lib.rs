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

//! # Umbra Core
//!
//! Foundational crate for the Umbra simulation: math primitives, simulation
//! time helpers, the closed ability catalogue, and the boundary traits the
//! core uses to talk to its platform collaborators (input and rendering).
//!
//! Nothing in this crate knows about entities or the frame pipeline; it is
//! the shared vocabulary every other crate builds on.

#![warn(missing_docs)]

pub mod ability;
pub mod input;
pub mod math;
pub mod render;
pub mod time;

pub use ability::AbilityKind;
pub use time::{IntervalTimer, Stopwatch};

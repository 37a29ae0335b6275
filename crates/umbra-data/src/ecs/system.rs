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

use crate::ecs::World;

/// A stage of the per-frame pipeline.
///
/// Systems are registered on the [`World`] in a caller-determined order that
/// is fixed thereafter; `World::update` runs each one exactly once per frame
/// in that order. All mutation is synchronous, so everything a system writes
/// is visible to every system that runs after it in the same frame.
///
/// Systems must never remove entities directly; they request destruction
/// with [`World::mark_for_despawn`] and rely on the end-of-frame sweep.
pub trait System {
    /// A short name for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Advances this system by one frame.
    fn update(&mut self, world: &mut World, dt: f32);
}

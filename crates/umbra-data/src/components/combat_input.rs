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

use crate::ecs::EntityId;

/// Per-frame queue of attack requests.
///
/// Targets are weak `EntityId` references: their validity is only guaranteed
/// within the frame they were queued, since destruction is deferred to the
/// frame-end sweep. The combat system silently skips ids that no longer
/// resolve. Always ends the frame empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CombatInput {
    targets: Vec<EntityId>,
}

impl CombatInput {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an attack against `target`.
    pub fn request(&mut self, target: EntityId) {
        self.targets.push(target);
    }

    /// Takes every queued target, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.targets)
    }

    /// Whether any targets are queued.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

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

//! Internal entity slot management and ID recycling.

use crate::ecs::entity::EntityId;

/// Internal manager for entity slots.
///
/// The `EntityStore` maintains a dense list of entity handles plus a liveness
/// flag. It handles entity creation and recycling of indices via a free list;
/// generations are bumped on recycle so stale `EntityId`s never resolve.
#[derive(Debug, Default, Clone)]
pub(crate) struct EntityStore {
    /// One slot per index ever allocated. Each entry holds the current
    /// `EntityId` (including generation) and whether that entity is alive.
    slots: Vec<(EntityId, bool)>,
    /// Indices available for reuse, enabling O(1) allocation for
    /// previously despawned entities.
    free: Vec<u32>,
}

impl EntityStore {
    /// Creates a new, empty `EntityStore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new or recycled `EntityId`.
    ///
    /// If there are indices on the free list, one is popped and its
    /// generation incremented; otherwise a fresh slot is appended.
    pub fn create(&mut self) -> EntityId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.0.generation += 1;
            slot.1 = true;
            slot.0
        } else {
            let id = EntityId {
                index: self.slots.len() as u32,
                generation: 0,
            };
            self.slots.push((id, true));
            id
        }
    }

    /// Whether `id` refers to a live entity (index in range, generation
    /// current, not yet released).
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.slots
            .get(id.index as usize)
            .is_some_and(|(slot_id, alive)| *alive && *slot_id == id)
    }

    /// Releases a live entity's slot, returning whether anything was freed.
    /// The index goes on the free list; the generation is bumped on reuse.
    pub fn release(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.slots[id.index as usize].1 = false;
        self.free.push(id.index);
        true
    }

    /// Returns the live `EntityId` occupying `index`, if any.
    pub fn id_at(&self, index: usize) -> Option<EntityId> {
        self.slots
            .get(index)
            .and_then(|(id, alive)| alive.then_some(*id))
    }

    /// Iterates over all live entity ids in slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots
            .iter()
            .filter_map(|(id, alive)| alive.then_some(*id))
    }

    /// The number of live entities.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|(_, alive)| *alive).count()
    }
}

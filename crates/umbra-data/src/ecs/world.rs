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

use log::debug;

use crate::ecs::entity_store::EntityStore;
use crate::ecs::{Component, ComponentBundle, ComponentStore, EntityId, System};

/// The central container for the entire ECS: all entities, their components,
/// and the ordered system pipeline.
///
/// The `World` owns everything exclusively. Cross-entity relations are plain
/// [`EntityId`]s resolved through the world on every access, which keeps them
/// weak: once the referenced entity has been swept, the id stops resolving.
#[derive(Default)]
pub struct World {
    entities: EntityStore,
    store: ComponentStore,
    systems: Vec<Box<dyn System>>,
    /// Entities flagged for removal this frame, swept by `apply_despawns`.
    pending_despawns: Vec<EntityId>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Entity lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Spawns a new entity with no components.
    ///
    /// Ids are never reused within a run: recycling an index bumps its
    /// generation, so the full id value stays unique.
    pub fn spawn_empty(&mut self) -> EntityId {
        self.entities.create()
    }

    /// Spawns a new entity with the given component bundle.
    pub fn spawn<B: ComponentBundle>(&mut self, bundle: B) -> EntityId {
        let entity = self.spawn_empty();
        bundle.insert_into(self, entity);
        entity
    }

    /// Whether `entity` refers to a live (not yet swept) entity.
    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.entities.is_alive(entity)
    }

    /// Flags an entity for removal at the end of the frame.
    ///
    /// The entity and all its components stay fully accessible until
    /// [`World::apply_despawns`] runs; marking twice coalesces into one
    /// removal. Returns `false` for dead or stale ids.
    pub fn mark_for_despawn(&mut self, entity: EntityId) -> bool {
        if !self.entities.is_alive(entity) {
            return false;
        }
        if !self.pending_despawns.contains(&entity) {
            self.pending_despawns.push(entity);
        }
        true
    }

    /// Sweeps every entity flagged since the last sweep, dropping their
    /// components and recycling their slots. Returns how many entities were
    /// removed.
    ///
    /// This is the second half of the deferred-destruction contract and is
    /// called by the frame driver after `update`, never by systems.
    pub fn apply_despawns(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending_despawns);
        let mut removed = 0;
        for entity in pending {
            if self.entities.release(entity) {
                self.store.clear_entity(entity.index as usize);
                removed += 1;
            }
        }
        if removed > 0 {
            debug!("swept {removed} despawned entities");
        }
        removed
    }

    /// The number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.live_count()
    }

    /// A snapshot of every live entity id, in slot order.
    ///
    /// Systems iterate over this snapshot; since destruction is deferred,
    /// every id in it stays valid for the remainder of the frame.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.entities.iter_live().collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Component access
    // ─────────────────────────────────────────────────────────────────────

    /// Attaches `value` to `entity`, replacing any component of the same
    /// kind already present. Returns `false` (and drops the value) if the
    /// entity is dead or stale.
    pub fn insert<T: Component>(&mut self, entity: EntityId, value: T) -> bool {
        if !self.entities.is_alive(entity) {
            return false;
        }
        T::arena_mut(&mut self.store).insert(entity.index as usize, value);
        true
    }

    /// Returns a reference to `entity`'s component of kind `T`.
    ///
    /// `None` for a missing component, dead entity, or stale id; callers
    /// treat all three as "skip this entity", never as an error.
    pub fn get<T: Component>(&self, entity: EntityId) -> Option<&T> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        T::arena(&self.store).get(entity.index as usize)
    }

    /// Returns a mutable reference to `entity`'s component of kind `T`.
    pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        T::arena_mut(&mut self.store).get_mut(entity.index as usize)
    }

    /// Whether `entity` carries a component of kind `T`.
    pub fn has<T: Component>(&self, entity: EntityId) -> bool {
        self.entities.is_alive(entity) && T::arena(&self.store).contains(entity.index as usize)
    }

    /// Detaches and returns `entity`'s component of kind `T`, if present.
    pub fn remove<T: Component>(&mut self, entity: EntityId) -> Option<T> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        T::arena_mut(&mut self.store).remove(entity.index as usize)
    }

    /// Iterates `(EntityId, &T)` over every live entity carrying `T`,
    /// in slot order.
    pub fn iter<T: Component>(&self) -> impl Iterator<Item = (EntityId, &T)> {
        let entities = &self.entities;
        T::arena(&self.store)
            .iter()
            .filter_map(move |(index, value)| entities.id_at(index).map(|id| (id, value)))
    }

    /// The first live entity carrying `T`, if any. Convenient for
    /// singleton-like components such as the player tag.
    pub fn find_first<T: Component>(&self) -> Option<EntityId> {
        self.iter::<T>().next().map(|(id, _)| id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // System pipeline
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a system to the pipeline. Registration order is execution
    /// order, fixed for the lifetime of the world.
    pub fn add_system(&mut self, system: Box<dyn System>) {
        debug!("registered system `{}`", system.name());
        self.systems.push(system);
    }

    /// Runs every registered system once, in registration order.
    ///
    /// The system list is moved out for the duration of the pass so each
    /// system can receive `&mut World`; systems registered during an update
    /// join the pipeline from the next frame on.
    pub fn update(&mut self, dt: f32) {
        let mut systems = std::mem::take(&mut self.systems);
        for system in systems.iter_mut() {
            system.update(self, dt);
        }
        let added_during_update = std::mem::replace(&mut self.systems, systems);
        self.systems.extend(added_during_update);
    }
}

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

//! Component storage: one parallel arena per component kind.
//!
//! The component set is closed: the [`components!`] invocation at the bottom
//! of this file enumerates every kind once and generates the
//! [`ComponentKind`] tag, the [`ComponentStore`] with one [`Arena`] per kind,
//! and the [`Component`] impl that maps each type to its arena. Lookup is a
//! direct slot access by entity index, with no type registry and no runtime
//! type identity.

use crate::components::{
    AbilityInput, Ai, Attack, CameraRig, CombatInput, Cooldown, Corruption, CorruptionSource,
    DarkEnergy, DarkTide, Enemy, Health, MeshRenderer, MovementProperties, Player,
    SpatialDistortion, Transform, Velocity,
};

/// Sparse storage for a single component kind, indexed by entity slot index.
///
/// A `None` slot means the entity (or former entity) at that index does not
/// carry this component. The arena grows lazily on insert.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Arena<T> {
    /// Stores `value` at `index`, returning the previous value if the slot
    /// was occupied. Replacing silently is intentional: adding a component of
    /// a kind already present swaps the instance, it is not an error.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(value)
    }

    /// Returns a reference to the value at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Returns a mutable reference to the value at `index`, if present.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    /// Removes and returns the value at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(|slot| slot.take())
    }

    /// Whether the slot at `index` is occupied.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Iterates over occupied slots as `(index, &value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }
}

/// A marker trait tying a component type to its arena in the closed store.
///
/// Implemented exclusively by the [`components!`] macro; user code interacts
/// with components through the `World` API, never through this trait
/// directly.
pub trait Component: 'static + Send + Sync + Sized {
    /// The compile-time tag for this component kind.
    const KIND: ComponentKind;

    /// Borrows this kind's arena out of the store.
    fn arena(store: &ComponentStore) -> &Arena<Self>;

    /// Mutably borrows this kind's arena out of the store.
    fn arena_mut(store: &mut ComponentStore) -> &mut Arena<Self>;
}

macro_rules! components {
    ($( $field:ident : $ty:ident => $kind:ident ),+ $(,)?) => {
        /// The closed enumeration of every component kind in the simulation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ComponentKind {
            $(
                #[doc = concat!("Tag for [`", stringify!($ty), "`].")]
                $kind,
            )+
        }

        impl ComponentKind {
            /// Every component kind, in declaration order.
            pub const ALL: &'static [ComponentKind] = &[
                $( ComponentKind::$kind, )+
            ];
        }

        /// The world's component storage: one arena per kind, all indexed by
        /// entity slot index. Accessed through the `World` API.
        #[derive(Debug, Default)]
        pub struct ComponentStore {
            $( pub(crate) $field: Arena<$ty>, )+
        }

        impl ComponentStore {
            /// Drops every component stored for the entity slot at `index`.
            /// Called by the despawn sweep.
            pub(crate) fn clear_entity(&mut self, index: usize) {
                $( self.$field.remove(index); )+
            }
        }

        $(
            impl Component for $ty {
                const KIND: ComponentKind = ComponentKind::$kind;

                #[inline]
                fn arena(store: &ComponentStore) -> &Arena<Self> {
                    &store.$field
                }

                #[inline]
                fn arena_mut(store: &mut ComponentStore) -> &mut Arena<Self> {
                    &mut store.$field
                }
            }
        )+
    };
}

components! {
    transform: Transform => Transform,
    velocity: Velocity => Velocity,
    health: Health => Health,
    dark_energy: DarkEnergy => DarkEnergy,
    corruption: Corruption => Corruption,
    cooldown: Cooldown => Cooldown,
    ai: Ai => Ai,
    attack: Attack => Attack,
    ability_input: AbilityInput => AbilityInput,
    combat_input: CombatInput => CombatInput,
    movement: MovementProperties => MovementProperties,
    corruption_source: CorruptionSource => CorruptionSource,
    dark_tide: DarkTide => DarkTide,
    spatial_distortion: SpatialDistortion => SpatialDistortion,
    mesh_renderer: MeshRenderer => MeshRenderer,
    camera_rig: CameraRig => CameraRig,
    player: Player => Player,
    enemy: Enemy => Enemy,
}

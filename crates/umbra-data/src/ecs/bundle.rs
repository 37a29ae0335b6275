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

use crate::ecs::{Component, EntityId, World};

/// A collection of components that can be spawned together as a single unit.
///
/// Implemented for every component type and for tuples of components, so
/// `world.spawn((Transform::default(), Velocity::default()))` works the same
/// as spawning one component. Duplicate kinds within a tuple follow the
/// insert-replaces rule: the last element of that kind wins.
pub trait ComponentBundle {
    /// Inserts every component of the bundle onto `entity`.
    fn insert_into(self, world: &mut World, entity: EntityId);
}

impl<C: Component> ComponentBundle for C {
    fn insert_into(self, world: &mut World, entity: EntityId) {
        world.insert(entity, self);
    }
}

macro_rules! tuple_bundle {
    ($( $name:ident ),+) => {
        impl<$( $name: Component ),+> ComponentBundle for ($( $name, )+) {
            #[allow(non_snake_case)]
            fn insert_into(self, world: &mut World, entity: EntityId) {
                let ($( $name, )+) = self;
                $( world.insert(entity, $name); )+
            }
        }
    };
}

tuple_bundle!(C1);
tuple_bundle!(C1, C2);
tuple_bundle!(C1, C2, C3);
tuple_bundle!(C1, C2, C3, C4);
tuple_bundle!(C1, C2, C3, C4, C5);
tuple_bundle!(C1, C2, C3, C4, C5, C6);
tuple_bundle!(C1, C2, C3, C4, C5, C6, C7);
tuple_bundle!(C1, C2, C3, C4, C5, C6, C7, C8);
tuple_bundle!(C1, C2, C3, C4, C5, C6, C7, C8, C9);
tuple_bundle!(C1, C2, C3, C4, C5, C6, C7, C8, C9, C10);
tuple_bundle!(C1, C2, C3, C4, C5, C6, C7, C8, C9, C10, C11);
tuple_bundle!(C1, C2, C3, C4, C5, C6, C7, C8, C9, C10, C11, C12);

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

use umbra_core::math::Vec3;
use umbra_core::render::MeshHandle;

/// The render payload of an entity.
///
/// `mesh` is a single-owner handle into the render backend's geometry arena;
/// it is released exactly once, when the component is dropped with its
/// entity. `None` means "nothing registered yet"; the render system skips
/// such entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshRenderer {
    /// The geometry to draw, if registered with the backend.
    pub mesh: Option<MeshHandle>,
    /// Flat albedo color.
    pub color: Vec3,
    /// Whether the entity is drawn at all.
    pub visible: bool,
}

impl MeshRenderer {
    /// Creates a visible renderer for `mesh` with the given color.
    pub fn new(mesh: MeshHandle, color: Vec3) -> Self {
        Self {
            mesh: Some(mesh),
            color,
            visible: true,
        }
    }

    /// Creates a renderer with no geometry yet, tinted `color`.
    pub fn pending(color: Vec3) -> Self {
        Self {
            mesh: None,
            color,
            visible: true,
        }
    }
}

impl Default for MeshRenderer {
    /// No geometry, white tint, visible.
    fn default() -> Self {
        Self::pending(Vec3::ONE)
    }
}

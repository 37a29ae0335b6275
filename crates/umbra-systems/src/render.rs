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

//! Read-only frame extraction for the render boundary.

use umbra_core::render::{CameraPose, FrameSnapshot, RenderBackend, RenderInstance};
use umbra_data::components::{CameraRig, MeshRenderer, Player, Transform};
use umbra_data::{System, World};

/// Read-only extraction at the render boundary.
///
/// Collects every visible `MeshRenderer` + `Transform` pair into resolved
/// draw instances, pairs them with the player's camera pose, and hands the
/// snapshot to the injected backend. Fire-and-forget: the simulation never
/// observes backend failures and mutates nothing here.
pub struct RenderSystem {
    backend: Box<dyn RenderBackend>,
}

impl RenderSystem {
    /// Creates the system over the given backend.
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self { backend }
    }
}

impl System for RenderSystem {
    fn name(&self) -> &'static str {
        "render"
    }

    fn update(&mut self, world: &mut World, _dt: f32) {
        let mut instances = Vec::new();
        for (entity, renderer) in world.iter::<MeshRenderer>() {
            if !renderer.visible {
                continue;
            }
            let Some(mesh) = renderer.mesh else {
                continue;
            };
            let Some(transform) = world.get::<Transform>(entity) else {
                continue;
            };
            instances.push(RenderInstance {
                model: transform.model_matrix(),
                color: renderer.color,
                mesh,
            });
        }

        let camera = world.find_first::<Player>().and_then(|player| {
            let rig = world.get::<CameraRig>(player)?;
            let target = world.get::<Transform>(player)?.position + rig.offset;
            Some(CameraPose {
                position: rig.position,
                target,
            })
        });

        self.backend.submit_frame(&FrameSnapshot { instances, camera });
    }
}

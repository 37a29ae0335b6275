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

//! The render collaborator boundary.
//!
//! The simulation core extracts a read-only snapshot of everything visible
//! once per frame and hands it to a [`RenderBackend`]. Geometry construction,
//! GPU buffers, shaders, and draw calls all live on the far side of this
//! trait; the core only speaks in handles and transforms.

use crate::math::{Mat4, Vec3};

/// An opaque, single-owner reference to mesh geometry registered with the
/// render backend.
///
/// The handle is an arena index on the backend side. The entity holding it
/// owns the geometry; dropping the owning component releases the slot, so
/// the release happens exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// One visible object, fully resolved for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderInstance {
    /// The model-to-world matrix.
    pub model: Mat4,
    /// Flat albedo color.
    pub color: Vec3,
    /// The geometry to draw.
    pub mesh: MeshHandle,
}

/// The camera framing for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// The eye position in world space.
    pub position: Vec3,
    /// The point the camera looks at.
    pub target: Vec3,
}

/// Everything the backend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// All visible instances, in extraction order.
    pub instances: Vec<RenderInstance>,
    /// The active camera, if any entity provides one.
    pub camera: Option<CameraPose>,
}

/// The drawing half of the collaborator contract.
///
/// Submission is fire-and-forget: the core neither retries nor observes
/// backend failures.
pub trait RenderBackend {
    /// Accepts one frame's worth of extracted state.
    fn submit_frame(&mut self, frame: &FrameSnapshot);
}

/// A backend that discards every frame. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct DiscardRenderer {
    frames_submitted: u64,
}

impl DiscardRenderer {
    /// Number of frames submitted so far.
    pub fn frames_submitted(&self) -> u64 {
        self.frames_submitted
    }
}

impl RenderBackend for DiscardRenderer {
    fn submit_frame(&mut self, _frame: &FrameSnapshot) {
        self.frames_submitted += 1;
    }
}

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

//! The input collaborator boundary.
//!
//! The simulation core never sees raw device events. A platform backend
//! (SDL, winit, a test stub) implements [`InputSource`] and exposes the
//! logical action state as a point-in-time snapshot, valid for one frame.
//! Edge detection (pressed-this-frame) is the consumer's responsibility,
//! since the boundary deliberately carries no event history.

use crate::math::Vec2;

/// Logical player actions the simulation understands.
///
/// The mapping from physical keys/buttons to these actions lives entirely
/// on the platform side of the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Move toward the facing direction.
    MoveForward,
    /// Move away from the facing direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Melee attack.
    Attack,
    /// Channel the Perception ability.
    AbilityPerception,
    /// Channel the Manipulation ability.
    AbilityManipulation,
    /// Channel the Distortion ability.
    AbilityDistortion,
    /// Channel the Assimilation ability.
    AbilityAssimilation,
    /// Channel the Purification ability.
    AbilityPurification,
    /// Request to leave the game.
    ExitGame,
}

/// A one-frame snapshot of the player's input state.
///
/// Implementations must be cheap to query; the pipeline may ask for the same
/// action several times within a frame and expects a consistent answer.
pub trait InputSource {
    /// Whether the given logical action is currently held.
    fn is_action_held(&self, action: PlayerAction) -> bool;

    /// The mouse movement accumulated since the previous frame, in
    /// screen-space units (+x right, +y down).
    fn mouse_delta(&self) -> Vec2;
}

/// An input source reporting no activity. Useful for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct InertInput;

impl InputSource for InertInput {
    fn is_action_held(&self, _action: PlayerAction) -> bool {
        false
    }

    fn mouse_delta(&self) -> Vec2 {
        Vec2::ZERO
    }
}

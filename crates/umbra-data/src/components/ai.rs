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
use umbra_core::time::Stopwatch;

/// The states of the hostile-creature behavior machine.
///
/// Idle and Patrol form the passive loop; Chase and Attack the engaged loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    /// Standing still, waiting out the idle duration.
    #[default]
    Idle,
    /// Walking the cyclic patrol route.
    Patrol,
    /// Pursuing the player.
    Chase,
    /// In range, swinging at the player.
    Attack,
}

/// Behavior data for non-player entities.
///
/// `state_timer` restarts on every state transition. `patrol_points` is an
/// ordered cyclic route; `patrol_index` wraps modulo its length.
#[derive(Debug, Clone, PartialEq)]
pub struct Ai {
    /// The current behavior state.
    pub state: AiState,
    /// Time spent in the current state.
    pub state_timer: Stopwatch,
    /// Distance at which the player is noticed.
    pub sight_range: f32,
    /// Distance beyond which pursuit is abandoned.
    pub chase_range: f32,
    /// Distance at which Chase hands over to Attack.
    pub attack_range: f32,
    /// Walking speed on the patrol route.
    pub patrol_speed: f32,
    /// Running speed while pursuing.
    pub chase_speed: f32,
    /// Seconds to stand idle before patrolling again.
    pub idle_duration: f32,
    /// Seconds to patrol before resting.
    pub patrol_duration: f32,
    /// The cyclic patrol route; may be empty (the creature then idles in
    /// place when told to patrol).
    pub patrol_points: Vec<Vec3>,
    /// The route point currently walked toward.
    pub patrol_index: usize,
}

impl Ai {
    /// Moves into `state` and restarts the state timer.
    pub fn transition_to(&mut self, state: AiState) {
        self.state = state;
        self.state_timer.restart();
    }

    /// Advances the patrol index cyclically. No-op on an empty route.
    pub fn advance_patrol_point(&mut self) {
        if !self.patrol_points.is_empty() {
            self.patrol_index = (self.patrol_index + 1) % self.patrol_points.len();
        }
    }
}

impl Default for Ai {
    fn default() -> Self {
        Self {
            state: AiState::Idle,
            state_timer: Stopwatch::new(),
            sight_range: 10.0,
            chase_range: 15.0,
            attack_range: 2.0,
            patrol_speed: 2.0,
            chase_speed: 4.0,
            idle_duration: 3.0,
            patrol_duration: 5.0,
            patrol_points: Vec::new(),
            patrol_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_restarts_timer() {
        let mut ai = Ai::default();
        ai.state_timer.tick(2.5);
        ai.transition_to(AiState::Chase);
        assert_eq!(ai.state, AiState::Chase);
        assert_eq!(ai.state_timer.elapsed(), 0.0);
    }

    #[test]
    fn test_patrol_index_wraps() {
        let mut ai = Ai {
            patrol_points: vec![Vec3::ZERO, Vec3::X, Vec3::Z],
            ..Ai::default()
        };
        ai.advance_patrol_point();
        ai.advance_patrol_point();
        ai.advance_patrol_point();
        assert_eq!(ai.patrol_index, 0, "index wraps modulo route length");
    }

    #[test]
    fn test_advance_on_empty_route_is_noop() {
        let mut ai = Ai::default();
        ai.advance_patrol_point();
        assert_eq!(ai.patrol_index, 0);
    }
}

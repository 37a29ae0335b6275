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

/// The resource pool abilities are paid from.
///
/// Regenerates at `recovery_rate` per second (applied by the ability system),
/// clamped to `max`. Corruption only ever *reduces* the recovery rate, so
/// `recovery_rate <= base_recovery_rate` holds throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarkEnergy {
    /// Current energy.
    pub current: f32,
    /// Maximum energy.
    pub max: f32,
    /// Effective regeneration, units per second.
    pub recovery_rate: f32,
    /// The unmodified baseline regeneration.
    pub base_recovery_rate: f32,
}

impl DarkEnergy {
    /// Creates a full pool of `amount` with the given baseline recovery.
    pub fn new(amount: f32, recovery_rate: f32) -> Self {
        Self {
            current: amount,
            max: amount,
            recovery_rate,
            base_recovery_rate: recovery_rate,
        }
    }
}

impl Default for DarkEnergy {
    fn default() -> Self {
        Self::new(100.0, 5.0)
    }
}

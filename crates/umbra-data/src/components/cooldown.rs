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

use std::collections::HashMap;

use umbra_core::AbilityKind;

/// Remaining cooldown seconds per ability.
///
/// Entries decrease monotonically under `tick` and floor at zero; an ability
/// is "on cooldown" iff its remaining time is greater than zero.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cooldown {
    remaining: HashMap<AbilityKind, f32>,
}

impl Cooldown {
    /// Creates an empty cooldown table (nothing on cooldown).
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the cooldown window for `kind`.
    pub fn set(&mut self, kind: AbilityKind, duration: f32) {
        self.remaining.insert(kind, duration);
    }

    /// Advances every active entry by `dt` seconds, flooring at zero.
    pub fn tick(&mut self, dt: f32) {
        for remaining in self.remaining.values_mut() {
            if *remaining > 0.0 {
                *remaining = (*remaining - dt).max(0.0);
            }
        }
    }

    /// Whether `kind` is still cooling down.
    pub fn is_on_cooldown(&self, kind: AbilityKind) -> bool {
        self.remaining.get(&kind).is_some_and(|r| *r > 0.0)
    }

    /// The remaining window for `kind`, zero when ready.
    pub fn remaining(&self, kind: AbilityKind) -> f32 {
        self.remaining.get(&kind).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_expires_monotonically() {
        let mut cooldown = Cooldown::new();
        cooldown.set(AbilityKind::Perception, 2.0);
        assert!(cooldown.is_on_cooldown(AbilityKind::Perception));

        cooldown.tick(1.0);
        assert!(cooldown.is_on_cooldown(AbilityKind::Perception));

        cooldown.tick(1.0);
        assert!(!cooldown.is_on_cooldown(AbilityKind::Perception));

        // Stays ready once expired.
        cooldown.tick(1.0);
        assert!(!cooldown.is_on_cooldown(AbilityKind::Perception));
        assert_eq!(cooldown.remaining(AbilityKind::Perception), 0.0);
    }

    #[test]
    fn test_unset_ability_is_ready() {
        let cooldown = Cooldown::new();
        assert!(!cooldown.is_on_cooldown(AbilityKind::Purification));
    }

    #[test]
    fn test_entries_tick_independently() {
        let mut cooldown = Cooldown::new();
        cooldown.set(AbilityKind::Perception, 1.0);
        cooldown.set(AbilityKind::Purification, 3.0);

        cooldown.tick(1.5);
        assert!(!cooldown.is_on_cooldown(AbilityKind::Perception));
        assert!(cooldown.is_on_cooldown(AbilityKind::Purification));
    }
}

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

//! The closed catalogue of rift-bearer abilities and their design constants.

use serde::{Deserialize, Serialize};

/// The five abilities a rift-bearer can channel.
///
/// Each has a fixed dark-energy cost and cooldown duration; activating any of
/// them feeds corruption back into the caster proportionally to the energy
/// spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Reveals hidden elements of the world.
    Perception,
    /// Telekinetically moves objects.
    Manipulation,
    /// Inverts the caster's gravity, at an extra corruption price.
    Distortion,
    /// Bends a hostile creature to the caster's will.
    Assimilation,
    /// Burns accumulated corruption away.
    Purification,
}

impl AbilityKind {
    /// Every ability, in catalogue order.
    pub const ALL: [AbilityKind; 5] = [
        AbilityKind::Perception,
        AbilityKind::Manipulation,
        AbilityKind::Distortion,
        AbilityKind::Assimilation,
        AbilityKind::Purification,
    ];

    /// The dark-energy cost of activating this ability.
    #[inline]
    pub fn energy_cost(self) -> f32 {
        match self {
            AbilityKind::Perception => 10.0,
            AbilityKind::Manipulation => 20.0,
            AbilityKind::Distortion => 30.0,
            AbilityKind::Assimilation => 40.0,
            AbilityKind::Purification => 50.0,
        }
    }

    /// The cooldown applied after a successful activation, in seconds.
    #[inline]
    pub fn cooldown_duration(self) -> f32 {
        match self {
            AbilityKind::Perception => 2.0,
            AbilityKind::Manipulation => 3.0,
            AbilityKind::Distortion => 5.0,
            AbilityKind::Assimilation => 8.0,
            AbilityKind::Purification => 10.0,
        }
    }

    /// A short display name for logging.
    pub fn name(self) -> &'static str {
        match self {
            AbilityKind::Perception => "perception",
            AbilityKind::Manipulation => "manipulation",
            AbilityKind::Distortion => "distortion",
            AbilityKind::Assimilation => "assimilation",
            AbilityKind::Purification => "purification",
        }
    }
}

/// Corruption gained per point of dark energy spent on a successful
/// activation.
pub const CORRUPTION_PER_ENERGY: f32 = 0.1;

/// Flat corruption surcharge for the gravity-inverting Distortion effect.
pub const DISTORTION_CORRUPTION_SURCHARGE: f32 = 5.0;

/// Corruption removed by a successful Purification.
pub const PURIFICATION_CLEANSE: f32 = 15.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_ascend_with_catalogue_order() {
        let costs: Vec<f32> = AbilityKind::ALL.iter().map(|a| a.energy_cost()).collect();
        assert!(costs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cooldowns_are_positive() {
        assert!(AbilityKind::ALL
            .iter()
            .all(|a| a.cooldown_duration() > 0.0));
    }
}

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

//! Gameplay tuning configuration.
//!
//! Every knob defaults to the shipped balance values; a RON file can override
//! any subset of them. Loading is a soft operation: a missing or invalid
//! file logs a warning and falls back to the defaults, it never aborts.

use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

/// Dark-energy tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// Player pool size.
    pub pool: f32,
    /// Baseline regeneration, units per second.
    pub recovery_rate: f32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            pool: 100.0,
            recovery_rate: 5.0,
        }
    }
}

/// Corruption staging thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorruptionConfig {
    /// Upper bound of the Low band.
    pub low_threshold: f32,
    /// Upper bound of the Medium band.
    pub medium_threshold: f32,
    /// Upper bound of the High band.
    pub high_threshold: f32,
}

impl Default for CorruptionConfig {
    fn default() -> Self {
        Self {
            low_threshold: 30.0,
            medium_threshold: 70.0,
            high_threshold: 90.0,
        }
    }
}

/// Environment escalation tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Seconds between dark tides.
    pub dark_tide_interval: f32,
    /// Lifetime of a tide event.
    pub tide_duration: f32,
    /// Factor applied to every corruption source's power on a tide.
    pub tide_power_multiplier: f32,
    /// Spawn-rate factor recorded on the tide event.
    pub tide_spawn_rate_multiplier: f32,
    /// Hostiles spawned per tide.
    pub tide_spawn_count: u32,
    /// Corruption-source power growth, units per second.
    pub source_growth_per_second: f32,
    /// Half-extent of the square tide spawns land in, centered on origin.
    pub spawn_half_extent: f32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            dark_tide_interval: 120.0,
            tide_duration: 30.0,
            tide_power_multiplier: 1.5,
            tide_spawn_rate_multiplier: 2.0,
            tide_spawn_count: 5,
            source_growth_per_second: 0.1,
            spawn_half_extent: 50.0,
        }
    }
}

/// Player prefab stats.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Starting (and maximum) health.
    pub health: f32,
    /// Base movement speed.
    pub move_speed: f32,
    /// Melee damage.
    pub attack_damage: f32,
    /// Melee reach.
    pub attack_range: f32,
    /// Melee facing cone half-angle, degrees.
    pub attack_angle: f32,
    /// Seconds between melee swings.
    pub attack_cooldown: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            health: 100.0,
            move_speed: 7.0,
            attack_damage: 25.0,
            attack_range: 3.0,
            attack_angle: 60.0,
            attack_cooldown: 0.8,
        }
    }
}

/// Hostile-creature prefab stats.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CreatureConfig {
    /// Starting (and maximum) health.
    pub health: f32,
    /// Base movement speed cap.
    pub move_speed: f32,
    /// Distance at which the player is noticed.
    pub sight_range: f32,
    /// Distance beyond which pursuit is abandoned.
    pub chase_range: f32,
    /// Distance at which pursuit hands over to attacking.
    pub engage_range: f32,
    /// Pursuit speed.
    pub chase_speed: f32,
    /// Patrol speed.
    pub patrol_speed: f32,
    /// Melee damage.
    pub attack_damage: f32,
    /// Melee reach.
    pub attack_range: f32,
    /// Melee facing cone half-angle, degrees.
    pub attack_angle: f32,
    /// Seconds between melee swings.
    pub attack_cooldown: f32,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            health: 80.0,
            move_speed: 7.0,
            sight_range: 15.0,
            chase_range: 25.0,
            engage_range: 1.0,
            chase_speed: 1.0,
            patrol_speed: 1.5,
            attack_damage: 15.0,
            attack_range: 3.0,
            attack_angle: 60.0,
            attack_cooldown: 2.0,
        }
    }
}

/// The aggregate of every tuning section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Dark-energy tuning.
    pub energy: EnergyConfig,
    /// Corruption staging thresholds.
    pub corruption: CorruptionConfig,
    /// Environment escalation tuning.
    pub environment: EnvironmentConfig,
    /// Player prefab stats.
    pub player: PlayerConfig,
    /// Hostile-creature prefab stats.
    pub creature: CreatureConfig,
}

impl WorldConfig {
    /// Loads a RON override file, falling back to the defaults if the file
    /// is absent or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => match ron::from_str(&text) {
                Ok(config) => {
                    info!("loaded tuning config from {}", path.display());
                    config
                }
                Err(err) => {
                    warn!(
                        "invalid tuning config {}: {err}; using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_balance_values() {
        let config = WorldConfig::default();
        assert_eq!(config.corruption.low_threshold, 30.0);
        assert_eq!(config.corruption.medium_threshold, 70.0);
        assert_eq!(config.corruption.high_threshold, 90.0);
        assert_eq!(config.environment.dark_tide_interval, 120.0);
        assert_eq!(config.environment.tide_spawn_count, 5);
        assert_eq!(config.creature.health, 80.0);
        assert_eq!(config.energy.recovery_rate, 5.0);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config: WorldConfig =
            ron::from_str("(corruption: (low_threshold: 20.0))").expect("valid RON");
        assert_eq!(config.corruption.low_threshold, 20.0);
        assert_eq!(config.corruption.medium_threshold, 70.0);
        assert_eq!(config.player.health, 100.0);
    }
}

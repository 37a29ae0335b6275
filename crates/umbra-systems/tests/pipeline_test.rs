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

//! Whole-pipeline integration: the fixed system order running through
//! `World::update` + `World::apply_despawns`, the way the frame driver does.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::Arc;

use umbra_core::ability::{CORRUPTION_PER_ENERGY, DISTORTION_CORRUPTION_SURCHARGE};
use umbra_core::input::{InertInput, InputSource, PlayerAction};
use umbra_core::math::{Vec2, Vec3};
use umbra_core::render::DiscardRenderer;
use umbra_data::components::{Ai, AiState, Corruption, DarkEnergy, Health, Player, Transform};
use umbra_data::{prefab, World, WorldConfig};
use umbra_systems::install_default_pipeline;

/// An input stub whose held set can be edited between frames.
struct ScriptedInput {
    held: RefCell<HashSet<PlayerAction>>,
}

impl ScriptedInput {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            held: RefCell::new(HashSet::new()),
        })
    }

    fn press(&self, action: PlayerAction) {
        self.held.borrow_mut().insert(action);
    }
}

impl InputSource for ScriptedInput {
    fn is_action_held(&self, action: PlayerAction) -> bool {
        self.held.borrow().contains(&action)
    }

    fn mouse_delta(&self) -> Vec2 {
        Vec2::ZERO
    }
}

fn run_frames(world: &mut World, frames: u32, dt: f32) {
    for _ in 0..frames {
        world.update(dt);
        world.apply_despawns();
    }
}

#[test]
fn test_creature_closes_in_and_wounds_the_player() {
    let mut world = World::new();
    let config = WorldConfig::default();
    install_default_pipeline(
        &mut world,
        Arc::new(InertInput),
        Box::new(DiscardRenderer::default()),
        &config,
        42,
    );

    let player = prefab::spawn_player(&mut world, &config);
    let creature = prefab::spawn_dark_creature(&mut world, Vec3::new(0.0, 0.0, 6.0), &config);

    // Twelve simulated seconds: enough to spot, close the six units at
    // chase speed 1, and land at least one swing (cooldown 2s).
    run_frames(&mut world, 240, 0.05);

    let ai = world.get::<Ai>(creature).expect("creature alive");
    assert!(
        matches!(ai.state, AiState::Chase | AiState::Attack),
        "the creature engaged, was {:?}",
        ai.state
    );

    let health = world.get::<Health>(player).expect("player alive");
    assert!(
        health.current < 100.0,
        "the player took melee damage, still at {}",
        health.current
    );
}

#[test]
fn test_ability_press_flows_through_the_frame() {
    let mut world = World::new();
    let config = WorldConfig::default();
    let input = ScriptedInput::new();
    install_default_pipeline(
        &mut world,
        input.clone(),
        Box::new(DiscardRenderer::default()),
        &config,
        42,
    );
    let player = prefab::spawn_player(&mut world, &config);

    input.press(PlayerAction::AbilityDistortion);
    world.update(0.0);
    world.apply_despawns();

    // Player control enqueued the request and the ability system drained it
    // within the same frame: energy paid, gravity flipped, corruption fed.
    let energy = world.get::<DarkEnergy>(player).expect("energy");
    assert_eq!(energy.current, 70.0);
    let transform = world.get::<Transform>(player).expect("transform");
    assert_eq!(transform.gravity_direction, Vec3::Y);
    let corruption = world.get::<Corruption>(player).expect("corruption");
    let expected = 30.0 * CORRUPTION_PER_ENERGY + DISTORTION_CORRUPTION_SURCHARGE;
    assert!((corruption.current - expected).abs() < 1e-4);

    // Holding the key across further frames must not re-trigger.
    world.update(0.0);
    world.apply_despawns();
    let energy = world.get::<DarkEnergy>(player).expect("energy");
    assert_eq!(energy.current, 70.0);
}

#[test]
fn test_dark_tide_escalates_a_running_world() {
    let mut world = World::new();
    let mut config = WorldConfig::default();
    config.environment.dark_tide_interval = 1.0;
    install_default_pipeline(
        &mut world,
        Arc::new(InertInput),
        Box::new(DiscardRenderer::default()),
        &config,
        42,
    );
    let player = prefab::spawn_player(&mut world, &config);
    prefab::spawn_corruption_source(&mut world, Vec3::new(2.0, 0.0, 0.0), 10.0, 8.0);

    let before = world.entity_count();
    // 1.5 simulated seconds crosses the shortened tide interval.
    run_frames(&mut world, 30, 0.05);

    assert!(
        world.entity_count() >= before + 5,
        "the tide brought in the hostile batch"
    );

    // Standing two units from a radius-eight source, the player soaked up
    // radiated corruption every frame.
    let corruption = world.get::<Corruption>(player).expect("corruption");
    assert!(
        corruption.current > 0.0,
        "corruption radiated onto the player"
    );
}

#[test]
fn test_depleted_entities_leave_the_world_after_the_sweep() {
    let mut world = World::new();
    let config = WorldConfig::default();
    install_default_pipeline(
        &mut world,
        Arc::new(InertInput),
        Box::new(DiscardRenderer::default()),
        &config,
        42,
    );
    let player = prefab::spawn_player(&mut world, &config);
    // A creature standing inside the player's reach, one hit from death.
    let creature = prefab::spawn_dark_creature(&mut world, Vec3::new(0.0, 0.0, -1.0), &config);
    world
        .get_mut::<Health>(creature)
        .expect("creature health")
        .current = 1.0;

    // Queue the kill directly on the player's combat intent.
    {
        use umbra_data::components::CombatInput;
        world
            .get_mut::<CombatInput>(player)
            .expect("combat input")
            .request(creature);
    }

    world.update(0.016);
    assert!(
        world.is_alive(creature),
        "marked entities survive until the sweep"
    );
    world.apply_despawns();
    assert!(!world.is_alive(creature));
    assert!(world.find_first::<Player>().is_some());
}

//! Entity spawning
//!
//! Obstacles spawn on an interval that shortens with level; collectibles on a
//! longer fixed one. Every spawn takes a weighted draw from the catalog,
//! builds a fresh node and drops it at a random lane on the far spawn plane.

use glam::Vec3;
use rand::Rng;

use super::catalog;
use super::factory;
use super::state::{Entity, EntityKind, GameState};
use crate::consts::*;

/// Spawn one obstacle at a random lane on the spawn plane
pub fn spawn_obstacle(state: &mut GameState) {
    let kind = catalog::pick_obstacle(&mut state.rng);
    let lane_x = state.rng.random_range(-LANE_HALF_WIDTH..LANE_HALF_WIDTH);

    let mut node = factory::obstacle_node(kind);
    node.transform.position = Vec3::new(lane_x, WATER_Y, SPAWN_Z);
    let node = state.scene.insert(node);

    state.obstacles.push(Entity {
        node,
        kind: EntityKind::Obstacle(kind),
    });
}

/// Spawn one collectible at a random lane on the spawn plane
pub fn spawn_collectible(state: &mut GameState) {
    let kind = catalog::pick_collectible(&mut state.rng);
    let lane_x = state.rng.random_range(-LANE_HALF_WIDTH..LANE_HALF_WIDTH);

    let mut node = factory::collectible_node(kind);
    node.transform.position = Vec3::new(lane_x, WATER_Y, SPAWN_Z);
    let node = state.scene.insert(node);

    state.collectibles.push(Entity {
        node,
        kind: EntityKind::Collectible(kind),
    });
}

/// Advance both spawn accumulators and fire any due spawns
pub fn update(state: &mut GameState, dt: f32) {
    state.obstacle_spawn_ms += dt * 1000.0;
    if state.obstacle_spawn_ms > state.spawn_interval_ms() {
        state.obstacle_spawn_ms = 0.0;
        spawn_obstacle(state);

        // Higher levels may push a second obstacle into the same tick
        let double_chance =
            (DOUBLE_SPAWN_STEP * (state.level - 1) as f32).min(DOUBLE_SPAWN_MAX);
        if double_chance > 0.0 && state.rng.random::<f32>() < double_chance {
            spawn_obstacle(state);
        }
    }

    state.collectible_spawn_ms += dt * 1000.0;
    if state.collectible_spawn_ms > COLLECTIBLE_INTERVAL_MS {
        state.collectible_spawn_ms = 0.0;
        spawn_collectible(state);
    }
}

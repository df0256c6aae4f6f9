//! Per-frame simulation tick
//!
//! One tick runs the whole pipeline in order: player movement, spawning,
//! entity motion and lifecycle, collision and scoring, then progression.
//! Everything is dt-scaled, so the sim behaves the same at any refresh rate.

use glam::Vec2;

use super::spawn;
use super::state::{EntityKind, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::lerp_angle;

/// Held directional input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase != GamePhase::Running {
        return;
    }

    state.elapsed_secs += dt;
    if state.banner_secs > 0.0 {
        state.banner_secs = (state.banner_secs - dt).max(0.0);
    }

    move_player(state, input, dt);
    spawn::update(state, dt);
    advance_entities(state, dt);
    resolve_collisions(state);
    update_progression(state, dt);
    sync_player_node(state);
}

/// Translate the player along held axes, then ease the facing toward the
/// last direction pressed and clamp to the lane corridor.
fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    use std::f32::consts::{FRAC_PI_2, PI};

    let step = PLAYER_SPEED * dt;
    let player = &mut state.player;

    // Fixed processing order; the last held key wins the facing target
    if input.up {
        player.pos.z -= step;
        player.target_facing = PI;
    }
    if input.down {
        player.pos.z += step;
        player.target_facing = 0.0;
    }
    if input.left {
        player.pos.x -= step;
        player.target_facing = FRAC_PI_2;
    }
    if input.right {
        player.pos.x += step;
        player.target_facing = -FRAC_PI_2;
    }

    player.pos.x = player.pos.x.clamp(-LANE_HALF_WIDTH, LANE_HALF_WIDTH);
    player.pos.z = player.pos.z.clamp(-LANE_HALF_DEPTH, LANE_HALF_DEPTH);

    player.facing = lerp_angle(
        player.facing,
        player.target_facing,
        FACING_LERP_RATE * dt,
    );
}

/// Drift all entities toward the camera and despawn the ones past it.
///
/// Collectibles move at a per-type multiple of the flow and bob on the
/// surface; the bob is visual only and never enters the collision check.
fn advance_entities(state: &mut GameState, dt: f32) {
    let drift = state.river_speed * dt;

    for entity in &state.obstacles {
        if let Some(node) = state.scene.get_mut(entity.node) {
            node.transform.position.z += drift;
        }
    }

    for (index, entity) in state.collectibles.iter().enumerate() {
        let EntityKind::Collectible(kind) = entity.kind else {
            continue;
        };
        if let Some(node) = state.scene.get_mut(entity.node) {
            node.transform.position.z += drift * kind.def().speed_mult;
            let phase = state.elapsed_secs * BOB_FREQ + index as f32 * BOB_PHASE_STEP;
            node.transform.position.y = WATER_Y + phase.sin() * BOB_AMP;
        }
    }

    // Despawn anything that floated behind the camera. Reverse order keeps
    // the remaining indices valid while removing in place.
    for index in (0..state.obstacles.len()).rev() {
        if past_despawn_plane(state, index, false) {
            state.despawn_obstacle(index);
        }
    }
    for index in (0..state.collectibles.len()).rev() {
        if past_despawn_plane(state, index, true) {
            state.despawn_collectible(index);
        }
    }
}

fn past_despawn_plane(state: &GameState, index: usize, collectible: bool) -> bool {
    let node = if collectible {
        state.collectibles[index].node
    } else {
        state.obstacles[index].node
    };
    state
        .scene
        .get(node)
        .map(|n| n.transform.position.z > DESPAWN_Z)
        // A missing node has nothing left to render; drop the record too
        .unwrap_or(true)
}

/// Horizontal (x/z) distance from the player to an entity's node
fn player_distance(state: &GameState, node: crate::scene::NodeId) -> Option<f32> {
    let node = state.scene.get(node)?;
    let entity_xz = Vec2::new(node.transform.position.x, node.transform.position.z);
    let player_xz = Vec2::new(state.player.pos.x, state.player.pos.z);
    Some(entity_xz.distance(player_xz))
}

/// Distance-threshold hits: obstacles cost a life, collectibles score.
///
/// Each entity is removed inside its own loop iteration, so one tick can
/// register at most one hit per entity.
fn resolve_collisions(state: &mut GameState) {
    for index in (0..state.obstacles.len()).rev() {
        let entity = state.obstacles[index];
        let Some(distance) = player_distance(state, entity.node) else {
            continue;
        };
        if distance < HIT_RADIUS {
            let EntityKind::Obstacle(kind) = entity.kind else {
                continue;
            };
            state.despawn_obstacle(index);
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::ObstacleHit {
                kind,
                lives_left: state.lives,
            });

            if state.lives == 0 && state.phase == GamePhase::Running {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver { score: state.score });
            }
        }
    }

    // The run ended this tick; nothing more to pick up
    if state.phase != GamePhase::Running {
        return;
    }

    for index in (0..state.collectibles.len()).rev() {
        let entity = state.collectibles[index];
        let Some(distance) = player_distance(state, entity.node) else {
            continue;
        };
        if distance < HIT_RADIUS {
            let EntityKind::Collectible(kind) = entity.kind else {
                continue;
            };
            let points = kind.def().points;
            state.despawn_collectible(index);
            state.score += points;
            state.events.push(GameEvent::Collected { kind, points });
        }
    }
}

/// Level-up timer, driven by simulated time so the tick is the only writer
fn update_progression(state: &mut GameState, dt: f32) {
    state.level_timer += dt;
    while state.level_timer >= LEVEL_UP_SECS {
        state.level_timer -= LEVEL_UP_SECS;
        state.level += 1;
        state.river_speed += RIVER_SPEED_STEP;
        state.banner_secs = BANNER_SECS;
        state.events.push(GameEvent::LevelUp { level: state.level });
    }
}

/// Mirror the player record into its scene node
fn sync_player_node(state: &mut GameState) {
    let player = state.player;
    if let Some(node) = state.scene.get_mut(player.node) {
        node.transform.position = player.pos;
        node.transform.rotation.y = player.facing;
    }
}

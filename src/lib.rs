//! Otter River - an arcade river dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, progression)
//! - `scene`: Retained node store consumed by the external 3D renderer
//! - `leaderboard`: Local top-10 scores, persisted to LocalStorage
//! - `hud`: Read-only text derivation for the DOM HUD

pub mod hud;
pub mod leaderboard;
pub mod scene;
pub mod sim;

pub use leaderboard::Leaderboard;

/// Game configuration constants
pub mod consts {
    /// Reference simulation timestep (tuning assumes ~60 Hz; all motion is dt-scaled)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Lane corridor half-extent along x
    pub const LANE_HALF_WIDTH: f32 = 20.0;
    /// Lane corridor half-extent along z
    pub const LANE_HALF_DEPTH: f32 = 49.0;

    /// Water surface height; the player and all entities float here
    pub const WATER_Y: f32 = 0.0;
    /// Far plane where new entities appear
    pub const SPAWN_Z: f32 = -60.0;
    /// Entities past this z have floated behind the camera
    pub const DESPAWN_Z: f32 = 10.0;

    /// Player start depth within the corridor
    pub const PLAYER_START_Z: f32 = 30.0;
    /// Player translation speed (units/sec)
    pub const PLAYER_SPEED: f32 = 18.0;
    /// Facing interpolation rate (per second)
    pub const FACING_LERP_RATE: f32 = 6.0;

    /// Player-to-entity collision distance (strict less-than)
    pub const HIT_RADIUS: f32 = 1.5;

    /// Lives at the start of a run
    pub const START_LIVES: u8 = 3;

    /// River flow speed at level 1 (units/sec)
    pub const RIVER_SPEED_BASE: f32 = 9.0;
    /// Flow speed gained per level-up
    pub const RIVER_SPEED_STEP: f32 = 3.0;

    /// Seconds between level-ups
    pub const LEVEL_UP_SECS: f32 = 60.0;
    /// Level banner lifetime (solid, then fade)
    pub const BANNER_SECS: f32 = 1.5;
    /// Tail of the banner lifetime spent fading out
    pub const BANNER_FADE_SECS: f32 = 0.5;

    /// Obstacle spawn interval at level 1 (ms)
    pub const OBSTACLE_INTERVAL_BASE_MS: f32 = 2000.0;
    /// Interval reduction per level (ms)
    pub const OBSTACLE_INTERVAL_STEP_MS: f32 = 200.0;
    /// Interval floor (ms)
    pub const OBSTACLE_INTERVAL_MIN_MS: f32 = 600.0;
    /// Same-tick second obstacle chance gained per level past the first
    pub const DOUBLE_SPAWN_STEP: f32 = 0.08;
    /// Cap on the same-tick second obstacle chance
    pub const DOUBLE_SPAWN_MAX: f32 = 0.5;
    /// Collectible spawn interval (ms, not level-scaled)
    pub const COLLECTIBLE_INTERVAL_MS: f32 = 3500.0;

    /// Collectible bob frequency (radians/sec)
    pub const BOB_FREQ: f32 = 3.0;
    /// Collectible bob amplitude
    pub const BOB_AMP: f32 = 0.35;
    /// Bob phase offset between neighbouring list entries
    pub const BOB_PHASE_STEP: f32 = 0.9;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Interpolate `from` toward `to` along the shortest angular path.
///
/// `t` is clamped to [0, 1]; 1 snaps straight to the target.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    use std::f32::consts::{PI, TAU};

    let t = t.clamp(0.0, 1.0);
    let mut delta = normalize_angle(to) - normalize_angle(from);
    if delta > PI {
        delta -= TAU;
    } else if delta < -PI {
        delta += TAU;
    }
    normalize_angle(from + delta * t)
}

//! Game state and entity records
//!
//! Everything the tick mutates lives here. The state owns the scene so that
//! entity despawn can touch the node store and the active list in one place;
//! an entity is never in one without the other.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::f32::consts::PI;

use super::catalog::{CollectibleKind, ObstacleKind};
use super::factory;
use crate::consts::*;
use crate::scene::{NodeId, Scene};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen showing, nothing simulated yet
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended; waiting for score submission / restart
    GameOver,
}

/// Category tag carried by every spawned entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    Collectible(CollectibleKind),
}

/// A spawned entity: scene node handle plus catalog tag
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    pub node: NodeId,
    pub kind: EntityKind,
}

/// The player avatar. Exactly one exists per session.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec3,
    /// Current yaw (radians; 0 faces downstream, toward the camera)
    pub facing: f32,
    /// Yaw recorded from the most recent direction input
    pub target_facing: f32,
    pub node: NodeId,
}

/// What happened during the most recent tick, for the HUD/shell layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ObstacleHit { kind: ObstacleKind, lives_left: u8 },
    Collected { kind: CollectibleKind, points: u32 },
    LevelUp { level: u32 },
    GameOver { score: u32 },
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    /// Simulated seconds since the run started
    pub elapsed_secs: f32,
    /// Units/sec the river pushes entities toward the camera
    pub river_speed: f32,
    /// Seconds accumulated toward the next level-up
    pub level_timer: f32,
    /// Remaining lifetime of the "Level N!" banner (0 = hidden)
    pub banner_secs: f32,
    /// ms since the last obstacle spawn
    pub obstacle_spawn_ms: f32,
    /// ms since the last collectible spawn
    pub collectible_spawn_ms: f32,
    pub player: Player,
    pub obstacles: Vec<Entity>,
    pub collectibles: Vec<Entity>,
    /// Retained nodes the external renderer draws each frame
    pub scene: Scene,
    /// Events recorded by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session on the start screen
    pub fn new(seed: u64) -> Self {
        let mut scene = Scene::new();

        let mut node = factory::player_node();
        let pos = Vec3::new(0.0, WATER_Y, PLAYER_START_Z);
        node.transform.position = pos;
        // The canoe points upstream at launch
        node.transform.rotation.y = PI;
        let node = scene.insert(node);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            score: 0,
            lives: START_LIVES,
            level: 1,
            elapsed_secs: 0.0,
            river_speed: RIVER_SPEED_BASE,
            level_timer: 0.0,
            banner_secs: 0.0,
            obstacle_spawn_ms: 0.0,
            collectible_spawn_ms: 0.0,
            player: Player {
                pos,
                facing: PI,
                target_facing: PI,
                node,
            },
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            scene,
            events: Vec::new(),
        }
    }

    /// Begin gameplay (`startGame`). No-op unless on the start screen.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
        }
    }

    /// Tear down the session and re-enter gameplay (`restartGame`)
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed);
        self.start();
    }

    /// Obstacle spawn interval derived from the current level
    pub fn spawn_interval_ms(&self) -> f32 {
        (OBSTACLE_INTERVAL_BASE_MS - OBSTACLE_INTERVAL_STEP_MS * (self.level - 1) as f32)
            .max(OBSTACLE_INTERVAL_MIN_MS)
    }

    /// Remove an obstacle from the scene and the active list together
    pub(crate) fn despawn_obstacle(&mut self, index: usize) {
        let entity = self.obstacles.remove(index);
        self.scene.remove(entity.node);
    }

    /// Remove a collectible from the scene and the active list together
    pub(crate) fn despawn_collectible(&mut self, index: usize) {
        let entity = self.collectibles.remove(index);
        self.scene.remove(entity.node);
    }
}

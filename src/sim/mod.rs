//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - dt-scaled movement (no hidden frame-rate coupling)
//! - No rendering or platform dependencies beyond the scene facade

pub mod catalog;
pub mod factory;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catalog::{
    COLLECTIBLES, CollectibleDef, CollectibleKind, OBSTACLES, ObstacleDef, ObstacleKind,
};
pub use state::{Entity, EntityKind, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};

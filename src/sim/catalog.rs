//! Static obstacle and collectible tables
//!
//! Each table is fixed at compile time and its spawn probabilities sum to 1.0
//! (locked by test). Selection is a cumulative weighted draw over the table in
//! declaration order, with an explicit fallback to the last entry for the
//! float-accumulation sliver at the top of the range.

use rand::Rng;
use rand_pcg::Pcg32;

/// Obstacle taxonomy. Discriminants index [`OBSTACLES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Rock,
    Log,
    Boat,
    Island,
    Shark,
}

/// Collectible taxonomy. Discriminants index [`COLLECTIBLES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    Normal,
    Rainbow,
    Golden,
    Emerald,
    Diamond,
    Clam,
    Seahorse,
    Jellyfish,
    Starfish,
}

/// Immutable obstacle descriptor
#[derive(Debug, Clone, Copy)]
pub struct ObstacleDef {
    pub kind: ObstacleKind,
    /// 0xRRGGBB tint of the primary part
    pub color: u32,
    /// Uniform node scale
    pub scale: f32,
    pub probability: f32,
}

/// Immutable collectible descriptor
#[derive(Debug, Clone, Copy)]
pub struct CollectibleDef {
    pub kind: CollectibleKind,
    /// 0xRRGGBB tint of the primary part
    pub color: u32,
    /// Score credited on pickup
    pub points: u32,
    /// Multiple of the river flow speed this type drifts at
    pub speed_mult: f32,
    /// Uniform node scale
    pub scale: f32,
    pub probability: f32,
}

pub const OBSTACLES: &[ObstacleDef] = &[
    ObstacleDef { kind: ObstacleKind::Rock, color: 0x7a7a7a, scale: 1.0, probability: 0.35 },
    ObstacleDef { kind: ObstacleKind::Log, color: 0x8b5a2b, scale: 1.2, probability: 0.25 },
    ObstacleDef { kind: ObstacleKind::Boat, color: 0xc0392b, scale: 1.5, probability: 0.15 },
    ObstacleDef { kind: ObstacleKind::Island, color: 0xd2b48c, scale: 2.0, probability: 0.10 },
    ObstacleDef { kind: ObstacleKind::Shark, color: 0x5d6d7e, scale: 1.0, probability: 0.15 },
];

pub const COLLECTIBLES: &[CollectibleDef] = &[
    CollectibleDef { kind: CollectibleKind::Normal, color: 0xe67e22, points: 1, speed_mult: 1.0, scale: 1.0, probability: 0.40 },
    CollectibleDef { kind: CollectibleKind::Rainbow, color: 0x9b59b6, points: 2, speed_mult: 1.2, scale: 1.0, probability: 0.15 },
    CollectibleDef { kind: CollectibleKind::Golden, color: 0xf1c40f, points: 5, speed_mult: 1.5, scale: 0.9, probability: 0.08 },
    CollectibleDef { kind: CollectibleKind::Emerald, color: 0x2ecc71, points: 8, speed_mult: 1.7, scale: 0.9, probability: 0.06 },
    CollectibleDef { kind: CollectibleKind::Diamond, color: 0xaee8f5, points: 10, speed_mult: 2.0, scale: 0.8, probability: 0.04 },
    CollectibleDef { kind: CollectibleKind::Clam, color: 0xf5e6d3, points: 3, speed_mult: 0.5, scale: 1.1, probability: 0.10 },
    CollectibleDef { kind: CollectibleKind::Seahorse, color: 0xf7dc6f, points: 4, speed_mult: 0.8, scale: 0.9, probability: 0.07 },
    CollectibleDef { kind: CollectibleKind::Jellyfish, color: 0xf1a7c1, points: 2, speed_mult: 0.6, scale: 1.0, probability: 0.06 },
    CollectibleDef { kind: CollectibleKind::Starfish, color: 0xfa8072, points: 5, speed_mult: 0.4, scale: 1.0, probability: 0.04 },
];

impl ObstacleKind {
    /// Catalog entry for this kind
    #[inline]
    pub fn def(self) -> &'static ObstacleDef {
        &OBSTACLES[self as usize]
    }
}

impl CollectibleKind {
    /// Catalog entry for this kind
    #[inline]
    pub fn def(self) -> &'static CollectibleDef {
        &COLLECTIBLES[self as usize]
    }

    /// Clams sit low and drift slowly instead of swimming
    pub fn is_clam(self) -> bool {
        self == CollectibleKind::Clam
    }

    /// Non-fish pickups with bespoke factory shapes
    pub fn is_special(self) -> bool {
        matches!(
            self,
            CollectibleKind::Clam
                | CollectibleKind::Seahorse
                | CollectibleKind::Jellyfish
                | CollectibleKind::Starfish
        )
    }
}

/// Weighted draw over the obstacle table
pub fn pick_obstacle(rng: &mut Pcg32) -> ObstacleKind {
    let roll: f32 = rng.random();
    let mut cumulative = 0.0;
    for def in OBSTACLES {
        cumulative += def.probability;
        if roll < cumulative {
            return def.kind;
        }
    }
    OBSTACLES[OBSTACLES.len() - 1].kind
}

/// Weighted draw over the collectible table
pub fn pick_collectible(rng: &mut Pcg32) -> CollectibleKind {
    let roll: f32 = rng.random();
    let mut cumulative = 0.0;
    for def in COLLECTIBLES {
        cumulative += def.probability;
        if roll < cumulative {
            return def.kind;
        }
    }
    COLLECTIBLES[COLLECTIBLES.len() - 1].kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_probabilities_sum_to_one() {
        let obstacle_total: f32 = OBSTACLES.iter().map(|d| d.probability).sum();
        assert!((obstacle_total - 1.0).abs() < 1e-4, "got {obstacle_total}");

        let collectible_total: f32 = COLLECTIBLES.iter().map(|d| d.probability).sum();
        assert!((collectible_total - 1.0).abs() < 1e-4, "got {collectible_total}");
    }

    #[test]
    fn test_defs_indexed_by_discriminant() {
        for (index, def) in OBSTACLES.iter().enumerate() {
            assert_eq!(def.kind as usize, index);
            assert_eq!(def.kind.def().kind, def.kind);
        }
        for (index, def) in COLLECTIBLES.iter().enumerate() {
            assert_eq!(def.kind as usize, index);
            assert_eq!(def.kind.def().kind, def.kind);
        }
    }

    #[test]
    fn test_special_flags() {
        assert!(CollectibleKind::Clam.is_clam());
        assert!(!CollectibleKind::Normal.is_clam());

        assert!(CollectibleKind::Jellyfish.is_special());
        assert!(CollectibleKind::Starfish.is_special());
        assert!(!CollectibleKind::Diamond.is_special());
    }

    #[test]
    fn test_weighted_draw_converges() {
        const DRAWS: u32 = 100_000;

        let mut rng = Pcg32::seed_from_u64(7);
        let mut counts: HashMap<ObstacleKind, u32> = HashMap::new();
        for _ in 0..DRAWS {
            *counts.entry(pick_obstacle(&mut rng)).or_default() += 1;
        }
        for def in OBSTACLES {
            let freq = counts.get(&def.kind).copied().unwrap_or(0) as f32 / DRAWS as f32;
            assert!(
                (freq - def.probability).abs() < 0.02,
                "{:?}: expected ~{}, observed {}",
                def.kind,
                def.probability,
                freq
            );
        }

        let mut counts: HashMap<CollectibleKind, u32> = HashMap::new();
        for _ in 0..DRAWS {
            *counts.entry(pick_collectible(&mut rng)).or_default() += 1;
        }
        for def in COLLECTIBLES {
            let freq = counts.get(&def.kind).copied().unwrap_or(0) as f32 / DRAWS as f32;
            assert!(
                (freq - def.probability).abs() < 0.02,
                "{:?}: expected ~{}, observed {}",
                def.kind,
                def.probability,
                freq
            );
        }
    }

    #[test]
    fn test_diamond_is_worth_ten() {
        assert_eq!(CollectibleKind::Diamond.def().points, 10);
    }
}

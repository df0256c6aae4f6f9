//! Entity factory: catalog entry to renderable node
//!
//! Every spawn composes fresh primitive parts into one node, tinted with the
//! catalog color and pre-scaled by the catalog scale factor. Nodes never share
//! parts, so each entity can be destroyed independently.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::catalog::{CollectibleKind, ObstacleKind};
use crate::scene::{MeshPart, Node, Primitive};

const CANOE_BROWN: u32 = 0x8b4513;
const OTTER_BROWN: u32 = 0xa0522d;
const CABIN_WHITE: u32 = 0xecf0f1;
const TRUNK_BROWN: u32 = 0x8b5a2b;
const PALM_GREEN: u32 = 0x2e8b57;
const PEARL_WHITE: u32 = 0xfdfefe;

/// The canoe-and-otter avatar. Built once per session.
pub fn player_node() -> Node {
    Node::with_parts(vec![
        // Hull lies along the facing axis (z)
        MeshPart::new(
            Primitive::Capsule {
                radius: 0.6,
                length: 2.4,
            },
            CANOE_BROWN,
        )
        .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
        MeshPart::new(Primitive::Sphere { radius: 0.45 }, OTTER_BROWN).at(Vec3::new(
            0.0, 0.55, 0.1,
        )),
        MeshPart::new(Primitive::Sphere { radius: 0.28 }, OTTER_BROWN).at(Vec3::new(
            0.0, 1.0, -0.2,
        )),
    ])
}

/// Assemble the visual node for an obstacle kind
pub fn obstacle_node(kind: ObstacleKind) -> Node {
    let def = kind.def();
    let parts = match kind {
        ObstacleKind::Rock => vec![
            MeshPart::new(
                Primitive::Polyhedron {
                    radius: 1.2,
                    detail: 0,
                },
                def.color,
            )
            .scaled(Vec3::new(1.0, 0.7, 1.0)),
        ],
        ObstacleKind::Log => vec![
            // Lies across the river
            MeshPart::new(
                Primitive::Cylinder {
                    radius: 0.5,
                    height: 3.0,
                },
                def.color,
            )
            .rotated(Vec3::new(0.0, 0.0, FRAC_PI_2)),
        ],
        ObstacleKind::Boat => vec![
            MeshPart::new(
                Primitive::Box {
                    width: 1.2,
                    height: 0.8,
                    depth: 3.0,
                },
                def.color,
            ),
            MeshPart::new(
                Primitive::Box {
                    width: 1.0,
                    height: 0.8,
                    depth: 1.2,
                },
                CABIN_WHITE,
            )
            .at(Vec3::new(0.0, 0.8, -0.5)),
        ],
        ObstacleKind::Island => vec![
            MeshPart::new(
                Primitive::Cone {
                    radius: 2.5,
                    height: 1.2,
                },
                def.color,
            ),
            MeshPart::new(
                Primitive::Cylinder {
                    radius: 0.15,
                    height: 1.6,
                },
                TRUNK_BROWN,
            )
            .at(Vec3::new(0.3, 1.2, 0.0)),
            MeshPart::new(Primitive::Sphere { radius: 0.7 }, PALM_GREEN).at(Vec3::new(
                0.3, 2.2, 0.0,
            )),
        ],
        ObstacleKind::Shark => vec![
            // Body points upstream, fin breaks the surface
            MeshPart::new(
                Primitive::Capsule {
                    radius: 0.5,
                    length: 2.2,
                },
                def.color,
            )
            .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
            MeshPart::new(
                Primitive::Cone {
                    radius: 0.35,
                    height: 0.9,
                },
                def.color,
            )
            .at(Vec3::new(0.0, 0.6, 0.2)),
        ],
    };

    let mut node = Node::with_parts(parts);
    node.transform.scale = Vec3::splat(def.scale);
    node
}

/// Assemble the visual node for a collectible kind
pub fn collectible_node(kind: CollectibleKind) -> Node {
    let def = kind.def();
    let parts = match kind {
        CollectibleKind::Clam => vec![
            MeshPart::new(Primitive::Sphere { radius: 0.6 }, def.color)
                .scaled(Vec3::new(1.0, 0.35, 1.0)),
            MeshPart::new(Primitive::Sphere { radius: 0.6 }, def.color)
                .scaled(Vec3::new(1.0, 0.35, 1.0))
                .at(Vec3::new(0.0, 0.25, -0.15))
                .rotated(Vec3::new(-0.5, 0.0, 0.0)),
            MeshPart::new(Primitive::Sphere { radius: 0.15 }, PEARL_WHITE)
                .at(Vec3::new(0.0, 0.2, 0.0)),
        ],
        CollectibleKind::Seahorse => vec![
            MeshPart::new(
                Primitive::Capsule {
                    radius: 0.25,
                    length: 0.9,
                },
                def.color,
            ),
            MeshPart::new(
                Primitive::Cone {
                    radius: 0.1,
                    height: 0.4,
                },
                def.color,
            )
            .at(Vec3::new(0.0, 0.55, -0.25))
            .rotated(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            MeshPart::new(Primitive::Sphere { radius: 0.16 }, def.color)
                .at(Vec3::new(0.0, -0.65, 0.15)),
        ],
        CollectibleKind::Jellyfish => {
            let mut parts = vec![
                MeshPart::new(Primitive::Sphere { radius: 0.55 }, def.color)
                    .scaled(Vec3::new(1.0, 0.6, 1.0)),
            ];
            for i in 0..3 {
                let angle = i as f32 / 3.0 * TAU;
                parts.push(
                    MeshPart::new(
                        Primitive::Capsule {
                            radius: 0.05,
                            length: 0.7,
                        },
                        def.color,
                    )
                    .at(Vec3::new(angle.cos() * 0.3, -0.5, angle.sin() * 0.3)),
                );
            }
            parts
        }
        CollectibleKind::Starfish => {
            let mut parts = vec![MeshPart::new(Primitive::Sphere { radius: 0.3 }, def.color)
                .scaled(Vec3::new(1.0, 0.4, 1.0))];
            for i in 0..5 {
                let angle = i as f32 / 5.0 * TAU;
                parts.push(
                    MeshPart::new(
                        Primitive::Cone {
                            radius: 0.18,
                            height: 0.6,
                        },
                        def.color,
                    )
                    .at(Vec3::new(angle.cos() * 0.45, 0.0, angle.sin() * 0.45))
                    .rotated(Vec3::new(FRAC_PI_2, -angle, 0.0)),
                );
            }
            parts
        }
        // Plain fish shapes; the tint carries the rarity
        _ => vec![
            MeshPart::new(Primitive::Sphere { radius: 0.45 }, def.color)
                .scaled(Vec3::new(0.8, 0.9, 1.3)),
            MeshPart::new(
                Primitive::Cone {
                    radius: 0.25,
                    height: 0.5,
                },
                def.color,
            )
            .at(Vec3::new(0.0, 0.0, 0.7))
            .rotated(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
        ],
    };

    let mut node = Node::with_parts(parts);
    node.transform.scale = Vec3::splat(def.scale);
    node
}

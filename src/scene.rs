//! Retained scene facade for the external renderer
//!
//! The crate renders nothing itself. Gameplay maintains a retained set of
//! nodes (groups of primitive meshes with position/rotation/scale); once per
//! frame the host renderer walks the flattened [`Scene::draw_list`] and issues
//! its own `render(scene, camera)` call.

use glam::{EulerRot, Mat3, Vec3};

/// Primitive mesh shapes the external renderer can construct
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    Cylinder { radius: f32, height: f32 },
    Cone { radius: f32, height: f32 },
    Capsule { radius: f32, length: f32 },
    /// Icosahedron-based polyhedron (detail 0 = raw icosahedron)
    Polyhedron { radius: f32, detail: u8 },
    Circle { radius: f32 },
}

/// One tinted primitive inside a node, offset in the node's local space
#[derive(Debug, Clone)]
pub struct MeshPart {
    pub primitive: Primitive,
    /// 0xRRGGBB tint
    pub color: u32,
    pub offset: Vec3,
    /// Euler rotation (YXZ order), radians
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl MeshPart {
    pub fn new(primitive: Primitive, color: u32) -> Self {
        Self {
            primitive,
            color,
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn at(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// Node transform; rotation is a YXZ Euler triple in radians
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Handle to a node owned by a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// A renderable node: a group of primitive parts under one transform
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub transform: Transform,
    pub parts: Vec<MeshPart>,
}

impl Node {
    pub fn with_parts(parts: Vec<MeshPart>) -> Self {
        Self {
            transform: Transform::default(),
            parts,
        }
    }
}

/// A world-space part instance, ready for the host renderer
#[derive(Debug, Clone)]
pub struct DrawInstance {
    pub primitive: Primitive,
    pub color: u32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// Retained node store (flat; nodes group their parts, no deeper nesting)
#[derive(Debug)]
pub struct Scene {
    nodes: Vec<(NodeId, Node)>,
    next_id: u32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a node, returning its handle
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push((id, node));
        id
    }

    /// Remove a node. Returns false if the handle was already gone.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.nodes.iter().position(|(nid, _)| *nid == id) {
            Some(index) => {
                self.nodes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|(nid, _)| *nid == id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|(nid, _)| *nid == id)
            .map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|(nid, _)| *nid == id)
            .map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flatten every node into world-space instances, in insertion order.
    ///
    /// Part offsets are rotated and scaled by the node transform; rotations
    /// compose additively, which is enough for the yaw-only gameplay nodes.
    pub fn draw_list(&self) -> Vec<DrawInstance> {
        let mut instances = Vec::with_capacity(self.nodes.len() * 2);
        for (_, node) in &self.nodes {
            let t = &node.transform;
            let basis = Mat3::from_euler(EulerRot::YXZ, t.rotation.y, t.rotation.x, t.rotation.z);
            for part in &node.parts {
                instances.push(DrawInstance {
                    primitive: part.primitive,
                    color: part.color,
                    position: t.position + basis * (part.offset * t.scale),
                    rotation: t.rotation + part.rotation,
                    scale: t.scale * part.scale,
                });
            }
        }
        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut scene = Scene::new();
        let a = scene.insert(Node::with_parts(vec![MeshPart::new(
            Primitive::Sphere { radius: 1.0 },
            0xff0000,
        )]));
        let b = scene.insert(Node::default());
        assert_eq!(scene.len(), 2);
        assert!(scene.contains(a));

        assert!(scene.remove(a));
        assert!(!scene.contains(a));
        assert!(scene.contains(b));
        assert_eq!(scene.len(), 1);

        // Removing twice is a no-op
        assert!(!scene.remove(a));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut scene = Scene::new();
        let a = scene.insert(Node::default());
        scene.remove(a);
        let b = scene.insert(Node::default());
        assert_ne!(a, b);
    }

    #[test]
    fn test_draw_list_applies_node_transform() {
        let mut scene = Scene::new();
        let mut node = Node::with_parts(vec![
            MeshPart::new(Primitive::Sphere { radius: 1.0 }, 0x123456)
                .at(Vec3::new(1.0, 0.0, 0.0)),
        ]);
        node.transform.position = Vec3::new(10.0, 0.0, 5.0);
        node.transform.scale = Vec3::splat(2.0);
        scene.insert(node);

        let instances = scene.draw_list();
        assert_eq!(instances.len(), 1);
        // Offset scaled by the node scale, then translated
        assert!((instances[0].position - Vec3::new(12.0, 0.0, 5.0)).length() < 1e-5);
        assert_eq!(instances[0].scale, Vec3::splat(2.0));
        assert_eq!(instances[0].color, 0x123456);
    }

    #[test]
    fn test_draw_list_rotates_offsets() {
        use std::f32::consts::FRAC_PI_2;

        let mut scene = Scene::new();
        let mut node = Node::with_parts(vec![
            MeshPart::new(Primitive::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            }, 0xffffff)
            .at(Vec3::new(0.0, 0.0, 1.0)),
        ]);
        // Quarter turn about y maps +z onto +x
        node.transform.rotation.y = FRAC_PI_2;
        scene.insert(node);

        let instances = scene.draw_list();
        assert!((instances[0].position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }
}

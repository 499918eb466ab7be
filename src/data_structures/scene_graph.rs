//! Scene nodes, ready-handle slots and the renderable scene description.
//!
//! The backdrop scene is a flat, fixed node set: meshes and lights plus an
//! optional background texture. Later components (the animation driver and
//! the scroll updater) mutate node transforms through shared handles that a
//! [`NodeSlot`] publishes exactly once, when the node enters the graph.

use std::{cell::RefCell, rc::Rc};

use cgmath::Vector3;
use log::warn;

use crate::data_structures::{
    mesh::{Color, Geometry, Material},
    texture::Texture,
};

/// A drawable scene entity combining shape, appearance and a transform.
///
/// `rotation` is Euler angles in radians per axis, accumulated without
/// wraparound.
#[derive(Clone, Debug)]
pub struct MeshNode {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub geometry: Rc<Geometry>,
    pub material: Rc<Material>,
}

impl MeshNode {
    pub fn new(position: Vector3<f32>, geometry: Rc<Geometry>, material: Rc<Material>) -> Self {
        Self {
            position,
            rotation: Vector3::new(0.0, 0.0, 0.0),
            geometry,
            material,
        }
    }
}

/// A retained, shared reference to a mesh node.
pub type NodeHandle = Rc<RefCell<MeshNode>>;

/// A publish-once slot for a node's ready handle.
///
/// Components that mutate a node enroll against the slot before the node
/// exists; until the handle is published their updates are silently skipped.
/// The handle is published exactly once and stays valid until teardown.
#[derive(Clone, Default)]
pub struct NodeSlot {
    inner: Rc<RefCell<Option<NodeHandle>>>,
}

impl NodeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the ready handle. A second publish is a caller bug and is
    /// ignored so that components holding the first handle stay consistent.
    pub fn publish(&self, node: NodeHandle) {
        let mut slot = self.inner.borrow_mut();
        if slot.is_some() {
            warn!("node handle published twice, keeping the first handle");
            return;
        }
        *slot = Some(node);
    }

    pub fn get(&self) -> Option<NodeHandle> {
        self.inner.borrow().clone()
    }

    pub fn is_published(&self) -> bool {
        self.inner.borrow().is_some()
    }
}

/// A light source in the backdrop scene.
#[derive(Clone, Debug)]
pub enum Light {
    Point {
        color: Color,
        position: Vector3<f32>,
    },
    Ambient {
        color: Color,
    },
}

/// The renderable scene description the host draws every frame.
#[derive(Default)]
pub struct SceneGraph {
    pub meshes: Vec<NodeHandle>,
    pub lights: Vec<Light>,
    pub background: Option<Rc<Texture>>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mesh node and hand back its shared handle.
    pub fn add_mesh(&mut self, node: MeshNode) -> NodeHandle {
        let handle = Rc::new(RefCell::new(node));
        self.meshes.push(handle.clone());
        handle
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Install the background texture. The first texture observed wins;
    /// later installs are ignored.
    pub fn set_background(&mut self, texture: Rc<Texture>) {
        if self.background.is_some() {
            warn!("scene background installed twice, keeping the first texture");
            return;
        }
        self.background = Some(texture);
    }
}

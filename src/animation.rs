//! Per-frame animation hooks.
//!
//! The host invokes [`Animator::advance_frame`] once for every rendered
//! frame of its display refresh loop. Each enrolled hook mutates one node
//! through its ready-handle slot; hooks whose node has not been published
//! yet are skipped silently, so continuously animated nodes can be enrolled
//! before their textures resolve.

use crate::data_structures::scene_graph::{MeshNode, NodeSlot};

/// A per-node frame callback, invoked once per rendered frame.
pub type FrameHook = Box<dyn FnMut(&mut MeshNode)>;

/// Registry of per-frame hooks over publish-once node slots.
#[derive(Default)]
pub struct Animator {
    hooks: Vec<(NodeSlot, FrameHook)>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll `hook` to run once per frame against the node in `slot`.
    pub fn enroll(&mut self, slot: NodeSlot, hook: impl FnMut(&mut MeshNode) + 'static) {
        self.hooks.push((slot, Box::new(hook)));
    }

    /// Run every hook whose node handle has been published.
    pub fn advance_frame(&mut self) {
        for (slot, hook) in &mut self.hooks {
            if let Some(node) = slot.get() {
                hook(&mut node.borrow_mut());
            }
        }
    }
}

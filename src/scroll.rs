//! Scroll event stream and the scroll-linked transform updater.
//!
//! The host document is the scroll source: on every DOM scroll event it
//! computes the scroll offset (the negated distance scrolled, 0 before any
//! scrolling) and calls [`ScrollStream::emit`]. Each subscription receives
//! one synthetic initial event with offset 0 at subscription time, so one
//! update pass runs even if the user never scrolls. Subscriptions are
//! registered against a cancellation token and are removed from the stream
//! when it fires, not merely gated.

use std::{cell::RefCell, rc::Rc};

use cgmath::Vector3;
use log::debug;

use crate::{
    camera::CameraSlot, data_structures::scene_graph::NodeSlot, lifecycle::CancellationToken,
};

/// Per-event moon rotation increment, independent of scroll distance.
pub const MOON_SCROLL_SPIN: Vector3<f32> = Vector3::new(0.05, 0.075, 0.05);
/// Per-event avatar rotation increment, independent of scroll distance.
pub const AVATAR_SCROLL_SPIN: Vector3<f32> = Vector3::new(0.0, 0.01, 0.01);
/// Camera dolly factor: `position.z = top * CAMERA_DOLLY_RATE`.
pub const CAMERA_DOLLY_RATE: f32 = -0.01;
/// Camera pan/yaw factor applied to `position.x` and `rotation.y`.
pub const CAMERA_PAN_RATE: f32 = -0.0002;

type Listener = Rc<dyn Fn(f32)>;

/// Fan-out point for the host document's scroll events.
#[derive(Default)]
pub struct ScrollStream {
    listeners: Rc<RefCell<Vec<(u64, Listener)>>>,
    next_id: std::cell::Cell<u64>,
}

impl ScrollStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until `token` fires, then deliver the synthetic
    /// initial event with offset 0.
    ///
    /// Subscribing with an already-fired token is a no-op: the listener is
    /// never registered and never called.
    pub fn subscribe(&self, token: &CancellationToken, listener: impl Fn(f32) + 'static) {
        if token.is_cancelled() {
            return;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.listeners.borrow_mut().push((id, listener.clone()));

        let listeners = self.listeners.clone();
        token.on_cancel(move || {
            debug!("scroll subscription {id} removed on teardown");
            listeners.borrow_mut().retain(|(lid, _)| *lid != id);
        });

        // Initial synthetic event: arms the subscription with offset 0.
        listener(0.0);
    }

    /// Deliver the current scroll offset to every live subscription.
    pub fn emit(&self, top: f32) {
        // Snapshot so a listener may subscribe or cancel during delivery.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(top);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Applies the scroll policy to the camera and the two scroll-reactive nodes.
///
/// The moon/avatar increments accumulate by a fixed constant per event, so
/// after N events their rotation is N times the step regardless of the
/// offsets observed. The camera transform is an absolute function of the
/// latest offset: replaying the same `top` yields the same camera state.
pub struct ScrollUpdater {
    camera: CameraSlot,
    moon: NodeSlot,
    avatar: NodeSlot,
}

impl ScrollUpdater {
    pub fn new(camera: CameraSlot, moon: NodeSlot, avatar: NodeSlot) -> Self {
        Self {
            camera,
            moon,
            avatar,
        }
    }

    /// Process one scroll event carrying offset `top`.
    ///
    /// Unpublished handles and a missing camera are expected transient
    /// states and skip their step silently.
    pub fn on_scroll(&self, top: f32) {
        if let Some(moon) = self.moon.get() {
            moon.borrow_mut().rotation += MOON_SCROLL_SPIN;
        }
        if let Some(avatar) = self.avatar.get() {
            avatar.borrow_mut().rotation += AVATAR_SCROLL_SPIN;
        }
        if let Some(camera) = self.camera.latest() {
            let mut camera = camera.borrow_mut();
            camera.position.z = top * CAMERA_DOLLY_RATE;
            camera.position.x = top * CAMERA_PAN_RATE;
            camera.rotation.y = top * CAMERA_PAN_RATE;
        }
    }
}

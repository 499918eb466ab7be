//! The host-owned camera and the latest-value camera slot.
//!
//! The rendering host owns the camera; the scroll updater only ever holds a
//! non-owning reference, read fresh on each event. Because the camera may
//! not exist yet when the scroll subscription starts, the reference lives in
//! a [`CameraSlot`]: a single mutable "most recent camera" holder the host
//! overwrites whenever its camera changes.

use std::{cell::RefCell, rc::Rc};

use cgmath::Vector3;

/// View transform state: position and Euler rotation in radians.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
}

impl Camera {
    pub fn new(position: Vector3<f32>) -> Self {
        Self {
            position,
            rotation: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// A shared reference to the host's camera.
pub type CameraHandle = Rc<RefCell<Camera>>;

/// Latest-value holder for the host-provided camera.
///
/// `provide` overwrites, `latest` reads; consumers treat an empty slot as
/// "camera not ready yet" and skip their update.
#[derive(Clone, Default)]
pub struct CameraSlot {
    inner: Rc<RefCell<Option<CameraHandle>>>,
}

impl CameraSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provide(&self, camera: CameraHandle) {
        *self.inner.borrow_mut() = Some(camera);
    }

    pub fn latest(&self) -> Option<CameraHandle> {
        self.inner.borrow().clone()
    }
}

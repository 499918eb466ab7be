//! High level backdrop composition and lifecycle wiring.
//!
//! [`Backdrop`] assembles the fixed scene (torus, lights, star field) at
//! construction, installs the texture-gated nodes (avatar cube, moon) as
//! their loads resolve, and wires the per-frame animation hooks and the
//! scroll subscription. The host drives it through four surfaces:
//!
//! 1. [`Backdrop::scene`] — the renderable scene description, drawn every frame
//! 2. [`Backdrop::advance_frame`] — invoked once per rendered frame
//! 3. [`Backdrop::subscribe_scroll`] / [`Backdrop::provide_camera`] — scroll
//!    events in, latest camera in
//! 4. [`Backdrop::teardown`] — invoked exactly once when the view is destroyed

use std::{cell::RefCell, rc::Rc};

use cgmath::Vector3;
use log::debug;
use rand::RngExt;

use crate::{
    animation::Animator,
    camera::{CameraHandle, CameraSlot},
    data_structures::{
        mesh::{Color, Geometry, Material},
        registry::{RegistryError, SharedResources},
        scene_graph::{Light, MeshNode, NodeSlot, SceneGraph},
        texture::Texture,
    },
    lifecycle::CancellationToken,
    resources::{ResourceError, load_texture, load_texture_pair},
    scroll::{ScrollStream, ScrollUpdater},
};

/// Per-frame torus rotation increment.
pub const TORUS_FRAME_SPIN: Vector3<f32> = Vector3::new(0.01, 0.005, 0.01);
/// Per-frame moon rotation.x increment.
pub const MOON_FRAME_SPIN_X: f32 = 0.005;

/// Number of star meshes generated at construction.
pub const STAR_COUNT: usize = 200;
/// Stars are placed uniformly in a cube of this edge length centered at origin.
pub const STAR_SPREAD: f32 = 100.0;

const STAR_GEOMETRY_ID: &str = "star";
const STAR_MATERIAL_ID: &str = "star_material";

/// The reactive backdrop scene behind the host document.
///
/// Cheap to clone; clones share the same scene, slots and cancellation
/// token, which is what the async attach methods rely on.
#[derive(Clone)]
pub struct Backdrop {
    scene: Rc<RefCell<SceneGraph>>,
    shared: Rc<SharedResources>,
    animator: Rc<RefCell<Animator>>,
    token: CancellationToken,
    camera: CameraSlot,
    torus: NodeSlot,
    moon: NodeSlot,
    avatar: NodeSlot,
}

impl Backdrop {
    /// Build the fixed scene: torus, point + ambient lights and the star
    /// field, with the torus and moon animation hooks enrolled.
    ///
    /// The moon hook is enrolled before the moon exists; it stays a silent
    /// no-op until [`install_moon`](Self::install_moon) publishes the handle.
    pub fn new() -> Result<Self, RegistryError> {
        let mut scene = SceneGraph::new();
        let mut shared = SharedResources::new();
        let mut animator = Animator::new();

        let torus_slot = NodeSlot::new();
        let moon_slot = NodeSlot::new();
        let avatar_slot = NodeSlot::new();

        let torus = scene.add_mesh(MeshNode::new(
            Vector3::new(0.0, 0.0, 0.0),
            Rc::new(Geometry::Torus {
                radius: 10.0,
                tube: 3.0,
                radial_segments: 16,
                tubular_segments: 100,
            }),
            Rc::new(Material::standard(Color::hex(0xff6347))),
        ));
        torus_slot.publish(torus);

        scene.add_light(Light::Point {
            color: Color::WHITE,
            position: Vector3::new(5.0, 5.0, 5.0),
        });
        scene.add_light(Light::Ambient {
            color: Color::WHITE,
        });

        shared.register_geometry(
            STAR_GEOMETRY_ID,
            Geometry::Sphere {
                radius: 0.25,
                width_segments: 24,
                height_segments: 24,
            },
        );
        shared.register_material(STAR_MATERIAL_ID, Material::standard(Color::WHITE));
        let star_geometry = shared.resolve_geometry(STAR_GEOMETRY_ID)?;
        let star_material = shared.resolve_material(STAR_MATERIAL_ID)?;
        let mut rng = rand::rng();
        let half_spread = STAR_SPREAD / 2.0;
        for _ in 0..STAR_COUNT {
            let position = Vector3::new(
                rng.random_range(-half_spread..=half_spread),
                rng.random_range(-half_spread..=half_spread),
                rng.random_range(-half_spread..=half_spread),
            );
            scene.add_mesh(MeshNode::new(
                position,
                star_geometry.clone(),
                star_material.clone(),
            ));
        }

        animator.enroll(torus_slot.clone(), |node| {
            node.rotation += TORUS_FRAME_SPIN;
        });
        animator.enroll(moon_slot.clone(), |node| {
            node.rotation.x += MOON_FRAME_SPIN_X;
        });

        Ok(Self {
            scene: Rc::new(RefCell::new(scene)),
            shared: Rc::new(shared),
            animator: Rc::new(RefCell::new(animator)),
            token: CancellationToken::new(),
            camera: CameraSlot::new(),
            torus: torus_slot,
            moon: moon_slot,
            avatar: avatar_slot,
        })
    }

    /// The renderable scene description for the host to draw.
    pub fn scene(&self) -> Rc<RefCell<SceneGraph>> {
        self.scene.clone()
    }

    /// Shared geometry/material instances backing the star field.
    pub fn shared_resources(&self) -> &SharedResources {
        &self.shared
    }

    /// The teardown token guarding this backdrop's subscriptions.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Record the host's camera as the most recent one; the scroll updater
    /// reads it fresh on every event.
    pub fn provide_camera(&self, camera: CameraHandle) {
        self.camera.provide(camera);
    }

    /// Subscribe the scroll-linked updater to the host's scroll stream.
    ///
    /// Delivers the synthetic initial event (offset 0) immediately, so one
    /// update pass runs even before any user scrolling.
    pub fn subscribe_scroll(&self, stream: &ScrollStream) {
        let updater = ScrollUpdater::new(self.camera.clone(), self.moon.clone(), self.avatar.clone());
        stream.subscribe(&self.token, move |top| updater.on_scroll(top));
    }

    /// Advance all per-frame animation hooks by one rendered frame.
    pub fn advance_frame(&self) {
        if self.token.is_cancelled() {
            return;
        }
        self.animator.borrow_mut().advance_frame();
    }

    /// Load the avatar texture and insert the avatar cube once it resolves.
    pub async fn attach_avatar(&self, url: &str) -> Result<(), ResourceError> {
        let texture = load_texture(url, false).await?;
        self.install_avatar(texture);
        Ok(())
    }

    /// Load the moon's colour and normal maps together and insert the moon
    /// sphere once *both* resolve. If either load fails the moon never
    /// appears; the rest of the scene is unaffected.
    pub async fn attach_moon(&self, color_url: &str, normal_url: &str) -> Result<(), ResourceError> {
        let (map, normal_map) = load_texture_pair(color_url, normal_url).await?;
        self.install_moon(map, normal_map);
        Ok(())
    }

    /// Load the background image and install it on the scene once.
    pub async fn attach_background(&self, url: &str) -> Result<(), ResourceError> {
        let texture = load_texture(url, false).await?;
        self.install_background(texture);
        Ok(())
    }

    /// Insert the avatar cube and publish its ready handle.
    ///
    /// Inserted at most once; resolutions arriving after teardown or after a
    /// previous install are dropped.
    pub fn install_avatar(&self, texture: Texture) {
        if self.token.is_cancelled() || self.avatar.is_published() {
            debug!("avatar install skipped (torn down or already present)");
            return;
        }
        let node = self.scene.borrow_mut().add_mesh(MeshNode::new(
            Vector3::new(2.0, 0.0, -5.0),
            Rc::new(Geometry::Box {
                width: 3.0,
                height: 3.0,
                depth: 3.0,
            }),
            Rc::new(Material::Basic {
                map: Rc::new(texture),
            }),
        ));
        self.avatar.publish(node);
    }

    /// Insert the moon sphere and publish its ready handle, which also arms
    /// the per-frame moon hook enrolled at construction.
    pub fn install_moon(&self, map: Texture, normal_map: Texture) {
        if self.token.is_cancelled() || self.moon.is_published() {
            debug!("moon install skipped (torn down or already present)");
            return;
        }
        let node = self.scene.borrow_mut().add_mesh(MeshNode::new(
            Vector3::new(-10.0, 0.0, 30.0),
            Rc::new(Geometry::Sphere {
                radius: 3.0,
                width_segments: 32,
                height_segments: 32,
            }),
            Rc::new(Material::Standard {
                color: Color::WHITE,
                map: Some(Rc::new(map)),
                normal_map: Some(Rc::new(normal_map)),
            }),
        ));
        self.moon.publish(node);
    }

    /// Install the background texture; the first one observed wins.
    pub fn install_background(&self, texture: Texture) {
        if self.token.is_cancelled() {
            debug!("background install skipped after teardown");
            return;
        }
        self.scene.borrow_mut().set_background(Rc::new(texture));
    }

    /// Ready handle of the continuously spinning torus.
    pub fn torus(&self) -> NodeSlot {
        self.torus.clone()
    }

    /// Ready-handle slot of the moon; empty until both moon textures resolve.
    pub fn moon(&self) -> NodeSlot {
        self.moon.clone()
    }

    /// Ready-handle slot of the avatar cube; empty until its texture resolves.
    pub fn avatar(&self) -> NodeSlot {
        self.avatar.clone()
    }

    /// Destroy the backdrop: fires the cancellation token once, removing the
    /// scroll subscription synchronously. Late scroll events and late
    /// texture resolutions become no-ops.
    pub fn teardown(&self) {
        self.token.cancel();
    }
}

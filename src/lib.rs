//! backdrop-ngin
//!
//! A lightweight, cross-platform backdrop engine for scrollable pages. This
//! crate composes an animated 3-D scene (meshes, lights, textures) behind a
//! host document and keeps it reactive: conditional nodes appear as their
//! textures resolve, designated nodes spin every rendered frame, and the
//! camera follows the document's scroll position. Rendering itself is the
//! host's job; the crate emits a scene description and decoded textures.
//!
//! High-level modules
//! - `camera`: the host-owned camera and the latest-value camera slot
//! - `data_structures`: engine data models (geometries, materials, textures, nodes)
//! - `backdrop`: high level scene composition and lifecycle wiring
//! - `animation`: per-frame hooks for continuously animated nodes
//! - `scroll`: the scroll event stream and scroll-linked transform updater
//! - `lifecycle`: the cancellation token guarding teardown
//! - `resources`: helpers to load external images into textures
//!

pub mod animation;
pub mod backdrop;
pub mod camera;
pub mod data_structures;
pub mod lifecycle;
pub mod resources;
pub mod scroll;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;

//! Engine data structures: geometries, materials, textures and scene nodes.
//!
//! This module contains the core data types for scene representation:
//!
//! - `mesh` contains parametric geometry and material definitions
//! - `texture` contains the decoded image texture type
//! - `registry` shares geometry/material instances across nodes by id
//! - `scene_graph` holds the renderable node set and the ready-handle slots

pub mod mesh;
pub mod registry;
pub mod scene_graph;
pub mod texture;

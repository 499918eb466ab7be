//! Shared geometry/material instances, looked up by id.
//!
//! Several nodes can reference one geometry or material instance instead of
//! duplicating it (the star field shares one sphere and one material across
//! all its meshes). Entries are written once during scene construction and
//! read-only afterwards; resolving an id that was never registered is a
//! configuration error, not a runtime condition.

use std::{collections::HashMap, rc::Rc};

use log::warn;
use thiserror::Error;

use crate::data_structures::mesh::{Geometry, Material};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no geometry registered under id `{0}`")]
    UnknownGeometry(String),
    #[error("no material registered under id `{0}`")]
    UnknownMaterial(String),
}

/// Identifier-keyed store of shared scene resources.
#[derive(Default)]
pub struct SharedResources {
    geometries: HashMap<String, Rc<Geometry>>,
    materials: HashMap<String, Rc<Material>>,
}

impl SharedResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a geometry under `id` and return the shared instance.
    ///
    /// Registration is write-once: a second registration under the same id
    /// keeps the first instance so that nodes already referencing it stay
    /// consistent.
    pub fn register_geometry(&mut self, id: &str, geometry: Geometry) -> Rc<Geometry> {
        if let Some(existing) = self.geometries.get(id) {
            warn!("geometry id `{id}` registered twice, keeping the first instance");
            return existing.clone();
        }
        let shared = Rc::new(geometry);
        self.geometries.insert(id.to_string(), shared.clone());
        shared
    }

    /// Register a material under `id` and return the shared instance.
    pub fn register_material(&mut self, id: &str, material: Material) -> Rc<Material> {
        if let Some(existing) = self.materials.get(id) {
            warn!("material id `{id}` registered twice, keeping the first instance");
            return existing.clone();
        }
        let shared = Rc::new(material);
        self.materials.insert(id.to_string(), shared.clone());
        shared
    }

    /// Resolve a shared geometry; repeated calls return the same instance.
    pub fn resolve_geometry(&self, id: &str) -> Result<Rc<Geometry>, RegistryError> {
        self.geometries
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownGeometry(id.to_string()))
    }

    /// Resolve a shared material; repeated calls return the same instance.
    pub fn resolve_material(&self, id: &str) -> Result<Rc<Material>, RegistryError> {
        self.materials
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownMaterial(id.to_string()))
    }
}

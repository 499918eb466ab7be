//! Parametric geometry and material definitions.
//!
//! The backdrop scene is declared from primitive shapes rather than loaded
//! model files, so a geometry is a parameter set the host tessellates and a
//! material is a small appearance description referencing decoded textures.

use std::rc::Rc;

use crate::data_structures::texture::Texture;

/// A parametric shape the rendering host tessellates on upload.
///
/// Segment counts are tessellation hints, kept verbatim from the scene
/// description so visually identical nodes stay identical across hosts.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
}

/// Linear RGB colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Build a colour from a packed `0xRRGGBB` value.
    pub fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
        }
    }
}

/// Surface appearance for a mesh node.
///
/// `Standard` is lit and may pair a colour map with a normal map; `Basic` is
/// unlit and renders its texture as-is.
#[derive(Clone, Debug)]
pub enum Material {
    Standard {
        color: Color,
        map: Option<Rc<Texture>>,
        normal_map: Option<Rc<Texture>>,
    },
    Basic {
        map: Rc<Texture>,
    },
}

impl Material {
    /// A plain lit material with no texture maps.
    pub fn standard(color: Color) -> Self {
        Self::Standard {
            color,
            map: None,
            normal_map: None,
        }
    }
}

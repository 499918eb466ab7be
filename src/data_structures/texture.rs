//! Decoded image textures.
//!
//! This module provides [`Texture`], a decoded RGBA image keyed by its source
//! URL, ready for the rendering host to upload. Textures are created once per
//! load, never mutated afterwards, and dropped with the scene.

use anyhow::*;
use image::{ImageFormat, RgbaImage, load_from_memory_with_format};

/// A decoded image resource usable as surface appearance input to a material.
///
/// The engine stops at decoded pixels; GPU upload (and the sRGB/linear
/// format decision the `is_normal_map` flag informs) belongs to the host.
#[derive(Clone, Debug)]
pub struct Texture {
    /// The URL or path the image was loaded from.
    pub source: String,
    pub pixels: RgbaImage,
    /// Normal maps carry linear data and must not be sampled as sRGB.
    pub is_normal_map: bool,
}

impl Texture {
    /// Decode a texture from raw byte data (image file contents).
    ///
    /// # Arguments
    ///
    /// * `bytes` represent raw image file data (PNG, JPEG, etc.)
    /// * `source` is the URL/path the bytes came from, kept as the texture key
    /// * `format` is an optional file format hint (e.g., "png"). If None, auto-detect.
    /// * `is_normal_map` toggles between sRGB (false) and linear (true) color space
    pub fn from_bytes(
        bytes: &[u8],
        source: &str,
        format: Option<&str>,
        is_normal_map: bool,
    ) -> Result<Self> {
        let img = match format {
            None => image::load_from_memory(bytes)?,
            Some(fmt) => {
                let format = ImageFormat::from_extension(fmt)
                    .ok_or_else(|| anyhow!("unknown image format hint `{fmt}` for {source}"))?;
                load_from_memory_with_format(bytes, format)?
            }
        };
        Ok(Self::from_image(&img, source, is_normal_map))
    }

    pub fn from_image(img: &image::DynamicImage, source: &str, is_normal_map: bool) -> Self {
        Self {
            source: source.to_string(),
            pixels: img.to_rgba8(),
            is_normal_map,
        }
    }

    /// Width and height of the decoded image in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

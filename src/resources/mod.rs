//! Loading of external image resources into textures.
//!
//! Each load fetches and decodes one image and completes exactly once,
//! either with a [`Texture`](crate::data_structures::texture::Texture) or
//! with a [`ResourceError`]. Failed loads are surfaced to the caller and
//! never retried; concurrent independent loads do not interfere.

use thiserror::Error;

pub mod texture;

pub use texture::{load_binary, load_texture, load_texture_pair};

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to load resource at {url}")]
    Load {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to decode image at {url}")]
    Decode {
        url: String,
        #[source]
        source: anyhow::Error,
    },
}

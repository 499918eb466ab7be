//! Asynchronous texture loading.

use crate::data_structures::texture::Texture;
use crate::resources::ResourceError;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    use anyhow::Context;

    let window = web_sys::window().context("no window object")?;
    let origin = window
        .location()
        .origin()
        .ok()
        .context("no location origin")?;
    let base = reqwest::Url::parse(&format!("{}/", origin))?;
    Ok(base.join(file_name)?)
}

/// Fetch the raw bytes behind `file_name`.
///
/// On the web this resolves the name against the document origin and fetches
/// it over HTTP; natively it is read from the filesystem as given.
pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    // TODO: use tokio::fs once the native path carries real IO load
    let data = std::fs::read(file_name)?;

    Ok(data)
}

/// Load the image at `url` and decode it into a [`Texture`].
///
/// Completes exactly once; IO and decode failures are surfaced as
/// [`ResourceError`] variants and are not retried.
pub async fn load_texture(url: &str, is_normal_map: bool) -> Result<Texture, ResourceError> {
    let data = load_binary(url).await.map_err(|source| ResourceError::Load {
        url: url.to_string(),
        source,
    })?;
    Texture::from_bytes(&data, url, None, is_normal_map).map_err(|source| ResourceError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Load a colour map and its paired normal map together.
///
/// The composite completes only when both loads succeed; if either fails the
/// pair fails and any partial result is discarded.
pub async fn load_texture_pair(
    color_url: &str,
    normal_url: &str,
) -> Result<(Texture, Texture), ResourceError> {
    futures::future::try_join(load_texture(color_url, false), load_texture(normal_url, true)).await
}

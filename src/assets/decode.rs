use std::path::Path;

use image::ImageFormat;

use crate::foundation::error::{OrbitError, OrbitResult};

/// Decode an in-memory PNG into straight RGBA8. Other formats are rejected.
pub fn decode_image(bytes: &[u8]) -> OrbitResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| OrbitError::io(format!("decode png: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode the source bitmap at `path`.
#[tracing::instrument]
pub fn load_source(path: &Path) -> OrbitResult<image::RgbaImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| OrbitError::io(format!("open source '{}': {e}", path.display())))?;
    let rgba = decode_image(&bytes).map_err(|e| match e {
        OrbitError::Io(msg) => OrbitError::io(format!("source '{}': {msg}", path.display())),
        other => other,
    })?;
    tracing::debug!(width = rgba.width(), height = rgba.height(), "decoded source");
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::assets::decode::load_source;
use crate::foundation::core::Size;
use crate::foundation::error::OrbitResult;
use crate::foundation::math::{premultiply, unpremultiply};

/// Side length the source bitmap is resized to before the mask is derived.
pub const DEFAULT_MASK_SIZE: Size = Size::new(200, 200);

/// The resized source bitmap and the alpha mask derived from it.
///
/// Both images always share the same dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceMask {
    pub source: RgbaImage,
    pub mask: RgbaImage,
}

impl SourceMask {
    pub fn from_source(source: RgbaImage) -> Self {
        let mask = derive_alpha_mask(&source);
        Self { source, mask }
    }

    pub fn size(&self) -> Size {
        Size::new(self.mask.width(), self.mask.height())
    }
}

/// Resize with a linear (triangle) filter.
///
/// Filtering runs on premultiplied pixels, so every tap is weighted by its alpha and
/// transparent neighbors do not darken silhouette edges.
pub fn resize_source(img: &RgbaImage, size: Size) -> RgbaImage {
    let mut premul = img.clone();
    for px in premul.pixels_mut() {
        px.0 = premultiply(px.0);
    }
    let mut out = imageops::resize(&premul, size.width, size.height, FilterType::Triangle);
    for px in out.pixels_mut() {
        px.0 = unpremultiply(px.0);
    }
    out
}

/// Inverse-lightness stencil for one pixel.
///
/// Color is always white. Alpha is `255 - max(r, g, b)`, and stays 0 for fully
/// transparent input.
pub fn mask_pixel(px: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = px.0;
    if a == 0 {
        return Rgba([255, 255, 255, 0]);
    }
    let lightness = r.max(g).max(b);
    Rgba([255, 255, 255, 255 - lightness])
}

pub fn derive_alpha_mask(img: &RgbaImage) -> RgbaImage {
    let mut mask = img.clone();
    for px in mask.pixels_mut() {
        *px = mask_pixel(*px);
    }
    mask
}

/// Loads, resizes and derives the stencil used by every frame.
#[derive(Clone, Copy, Debug)]
pub struct MaskBuilder {
    size: Size,
}

impl Default for MaskBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MASK_SIZE)
    }
}

impl MaskBuilder {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    #[tracing::instrument(skip(self), fields(width = self.size.width, height = self.size.height))]
    pub fn build(&self, path: &Path) -> OrbitResult<SourceMask> {
        let src = load_source(path)?;
        Ok(self.build_from_image(&src))
    }

    pub fn build_from_image(&self, img: &RgbaImage) -> SourceMask {
        SourceMask::from_source(resize_source(img, self.size))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/builder.rs"]
mod tests;

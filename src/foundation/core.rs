use crate::foundation::math::{premultiply, unpremultiply};

pub use kurbo::{Affine, Point};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_premul(self) -> [u8; 4] {
        premultiply(self.to_array())
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<image::Rgba<u8>> for Rgba8 {
    fn from(v: image::Rgba<u8>) -> Self {
        Self::from(v.0)
    }
}

impl From<Rgba8> for image::Rgba<u8> {
    fn from(c: Rgba8) -> Self {
        image::Rgba(c.to_array())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// A canvas of premultiplied RGBA8 pixels, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// Allocate a canvas where every pixel is `color`.
    pub fn filled(size: Size, color: Rgba8) -> Self {
        let px = color.to_premul();
        let mut data = Vec::with_capacity(size.pixel_count() * 4);
        for _ in 0..size.pixel_count() {
            data.extend_from_slice(&px);
        }
        Self {
            width: size.width,
            height: size.height,
            data,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Copy `src` into `self` with its top-left corner at `(origin_x, origin_y)`.
    ///
    /// Pixels are overwritten, not blended. Anything outside `self` is clipped.
    pub fn blit(&mut self, src: &Frame, origin_x: i64, origin_y: i64) {
        let dst_w = i64::from(self.width);
        let dst_h = i64::from(self.height);
        let x0 = origin_x.max(0);
        let y0 = origin_y.max(0);
        let x1 = origin_x.saturating_add(i64::from(src.width)).min(dst_w);
        let y1 = origin_y.saturating_add(i64::from(src.height)).min(dst_h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let row_bytes = ((x1 - x0) as usize) * 4;
        for y in y0..y1 {
            let sx = (x0 - origin_x) as usize;
            let sy = (y - origin_y) as usize;
            let s = (sy * (src.width as usize) + sx) * 4;
            let d = ((y as usize) * (self.width as usize) + (x0 as usize)) * 4;
            self.data[d..d + row_bytes].copy_from_slice(&src.data[s..s + row_bytes]);
        }
    }

    /// Straight-alpha copy of this frame, for quantization and encoding.
    pub fn to_straight_rgba(&self) -> image::RgbaImage {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        image::RgbaImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use image::Rgba;
use image::imageops::ColorMap;

use crate::foundation::core::Rgba8;

/// Largest palette a GIF frame can carry.
pub const MAX_PALETTE_LEN: usize = 256;

/// Ordered set of straight RGBA colors used by one paletted frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba8>,
}

impl Palette {
    pub fn new(colors: Vec<Rgba8>) -> Self {
        Self { colors }
    }

    /// Palette holding only the reserved transparent entry at index 0.
    pub fn with_transparent() -> Self {
        Self::new(vec![Rgba8::TRANSPARENT])
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgba8] {
        &self.colors
    }

    pub fn push(&mut self, color: Rgba8) {
        self.colors.push(color);
    }

    /// Index of the first fully transparent entry.
    pub fn transparent_index(&self) -> Option<u8> {
        self.colors
            .iter()
            .position(|c| c.a == 0)
            .and_then(|i| u8::try_from(i).ok())
    }

    /// Packed `r, g, b` triples, the layout GIF color tables use.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }

    /// Nearest entry by squared distance over all four channels. Ties go to the lower index.
    ///
    /// A fully transparent `color` always maps to the transparent entry when there is one,
    /// whatever its color channels hold.
    pub fn nearest(&self, color: Rgba8) -> usize {
        if color.a == 0
            && let Some(i) = self.transparent_index()
        {
            return usize::from(i);
        }
        let target = color.to_array();
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let dist: u32 = c
                .to_array()
                .iter()
                .zip(target)
                .map(|(&a, b)| {
                    let d = i32::from(a) - i32::from(b);
                    (d * d) as u32
                })
                .sum();
            if dist < best_dist {
                best = i;
                best_dist = dist;
                if dist == 0 {
                    break;
                }
            }
        }
        best
    }
}

impl ColorMap for Palette {
    type Color = Rgba<u8>;

    fn index_of(&self, color: &Rgba<u8>) -> usize {
        self.nearest(Rgba8::from(*color))
    }

    fn lookup(&self, index: usize) -> Option<Rgba<u8>> {
        self.colors.get(index).map(|&c| c.into())
    }

    fn has_lookup(&self) -> bool {
        true
    }

    fn map_color(&self, color: &mut Rgba<u8>) {
        if let Some(c) = self.colors.get(self.index_of(color)) {
            *color = (*c).into();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quantize/palette.rs"]
mod tests;

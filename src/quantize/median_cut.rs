use std::collections::HashMap;

use image::RgbaImage;

use crate::foundation::core::Rgba8;
use crate::quantize::palette::{MAX_PALETTE_LEN, Palette};

/// Median-cut palette builder.
///
/// The pixel histogram is split into boxes. At each step the box with the widest
/// channel range is halved at its pixel-weighted median along that channel. Each final
/// box contributes its weighted mean color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MedianCut {
    max_colors: usize,
}

impl Default for MedianCut {
    fn default() -> Self {
        Self::new(MAX_PALETTE_LEN)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Bin {
    color: [u8; 4],
    count: u32,
}

#[derive(Clone, Debug)]
struct ColorBox {
    bins: Vec<Bin>,
    pixels: u64,
    widest: usize,
    range: u8,
}

impl ColorBox {
    fn new(bins: Vec<Bin>) -> Self {
        let mut lo = [u8::MAX; 4];
        let mut hi = [u8::MIN; 4];
        let mut pixels = 0u64;
        for bin in &bins {
            for ch in 0..4 {
                lo[ch] = lo[ch].min(bin.color[ch]);
                hi[ch] = hi[ch].max(bin.color[ch]);
            }
            pixels += u64::from(bin.count);
        }

        let mut widest = 0usize;
        let mut range = 0u8;
        for ch in 0..4 {
            let r = hi[ch].saturating_sub(lo[ch]);
            if r > range {
                widest = ch;
                range = r;
            }
        }
        Self {
            bins,
            pixels,
            widest,
            range,
        }
    }

    fn can_split(&self) -> bool {
        self.bins.len() > 1 && self.range > 0
    }

    fn split(mut self) -> (Self, Self) {
        let ch = self.widest;
        self.bins
            .sort_unstable_by_key(|b| (b.color[ch], b.color, b.count));

        let half = self.pixels.div_ceil(2);
        let mut acc = 0u64;
        let mut cut = 1usize;
        for (i, bin) in self.bins.iter().enumerate() {
            acc += u64::from(bin.count);
            if acc >= half {
                cut = i + 1;
                break;
            }
        }
        let cut = cut.clamp(1, self.bins.len() - 1);

        let upper = self.bins.split_off(cut);
        (Self::new(self.bins), Self::new(upper))
    }

    fn mean(&self) -> Rgba8 {
        if self.pixels == 0 {
            return Rgba8::TRANSPARENT;
        }
        let mut sum = [0u64; 4];
        for bin in &self.bins {
            for (s, c) in sum.iter_mut().zip(bin.color) {
                *s += u64::from(c) * u64::from(bin.count);
            }
        }
        let avg = sum.map(|s| ((s + self.pixels / 2) / self.pixels) as u8);
        Rgba8::from(avg)
    }
}

impl MedianCut {
    /// `max_colors` is clamped to `1..=256`.
    pub fn new(max_colors: usize) -> Self {
        Self {
            max_colors: max_colors.clamp(1, MAX_PALETTE_LEN),
        }
    }

    pub fn max_colors(&self) -> usize {
        self.max_colors
    }

    /// Append up to `max_colors - seed.len()` representative colors of `image` to `seed`.
    pub fn quantize(&self, seed: Palette, image: &RgbaImage) -> Palette {
        let budget = self.max_colors.saturating_sub(seed.len());
        let bins = histogram(image);
        if budget == 0 || bins.is_empty() {
            return seed;
        }

        let mut boxes = vec![ColorBox::new(bins)];
        while boxes.len() < budget {
            let Some(idx) = pick_box_to_split(&boxes) else {
                break;
            };
            let (a, b) = boxes.swap_remove(idx).split();
            boxes.push(a);
            boxes.push(b);
        }

        // Most populous boxes first so common colors get the low indices.
        boxes.sort_by(|a, b| b.pixels.cmp(&a.pixels).then_with(|| a.bins.cmp(&b.bins)));

        let mut palette = seed;
        for b in &boxes {
            palette.push(b.mean());
        }
        palette
    }
}

fn histogram(image: &RgbaImage) -> Vec<Bin> {
    let mut counts = HashMap::<[u8; 4], u32>::new();
    for px in image.pixels() {
        *counts.entry(px.0).or_insert(0) += 1;
    }
    let mut bins: Vec<Bin> = counts
        .into_iter()
        .map(|(color, count)| Bin { color, count })
        .collect();
    bins.sort_unstable();
    bins
}

fn pick_box_to_split(boxes: &[ColorBox]) -> Option<usize> {
    boxes
        .iter()
        .enumerate()
        .filter(|(_, b)| b.can_split())
        .max_by(|(ia, a), (ib, b)| {
            a.range
                .cmp(&b.range)
                .then(a.pixels.cmp(&b.pixels))
                .then(ib.cmp(ia))
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
#[path = "../../tests/unit/quantize/median_cut.rs"]
mod tests;

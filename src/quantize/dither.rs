use image::RgbaImage;
use image::imageops;

use crate::quantize::palette::Palette;

/// Floyd-Steinberg error diffusion of `image` onto `palette`, returning one index per pixel.
pub fn dither_to_palette(image: &RgbaImage, palette: &Palette) -> Vec<u8> {
    let mut work = image.clone();
    // imageops::dither diffuses into the right and lower neighbors and needs at least 2x2.
    if work.width() >= 2 && work.height() >= 2 {
        imageops::dither(&mut work, palette);
    }
    imageops::index_colors(&work, palette).into_raw()
}

#[cfg(test)]
#[path = "../../tests/unit/quantize/dither.rs"]
mod tests;

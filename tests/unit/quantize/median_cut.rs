use image::Rgba;

use super::*;

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 4) as u8, (y * 60) as u8, 255 - (x * 4) as u8, 255])
    })
}

#[test]
fn single_color_image_adds_one_entry_after_seed() {
    let img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
    let p = MedianCut::default().quantize(Palette::with_transparent(), &img);
    assert_eq!(p.colors(), &[Rgba8::TRANSPARENT, Rgba8::opaque(255, 0, 0)]);
}

#[test]
fn distinct_colors_below_budget_are_kept_exactly() {
    let mut img = RgbaImage::from_pixel(3, 1, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
    img.put_pixel(2, 0, Rgba([0, 0, 0, 255]));
    let p = MedianCut::default().quantize(Palette::with_transparent(), &img);
    assert_eq!(p.len(), 3);
    assert_eq!(p.colors()[0], Rgba8::TRANSPARENT);
    // black covers two pixels, so it sorts first
    assert_eq!(p.colors()[1], Rgba8::BLACK);
    assert_eq!(p.colors()[2], Rgba8::WHITE);
}

#[test]
fn palette_never_exceeds_max_colors() {
    let img = gradient(64, 4);
    for max in [2usize, 16, 100, 256] {
        let p = MedianCut::new(max).quantize(Palette::with_transparent(), &img);
        assert_eq!(p.len(), max, "max_colors = {max}");
        assert_eq!(p.colors()[0], Rgba8::TRANSPARENT);
    }
}

#[test]
fn full_seed_is_returned_untouched() {
    let img = gradient(8, 2);
    let p = MedianCut::new(1).quantize(Palette::with_transparent(), &img);
    assert_eq!(p, Palette::with_transparent());
}

#[test]
fn single_box_uses_weighted_mean() {
    let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
    let p = MedianCut::new(2).quantize(Palette::with_transparent(), &img);
    assert_eq!(p.colors()[1], Rgba8::opaque(128, 128, 128));
}

#[test]
fn quantize_is_deterministic() {
    let img = gradient(64, 4);
    let a = MedianCut::new(32).quantize(Palette::with_transparent(), &img);
    let b = MedianCut::new(32).quantize(Palette::with_transparent(), &img);
    assert_eq!(a, b);
}

#[test]
fn max_colors_is_clamped() {
    assert_eq!(MedianCut::new(0).max_colors(), 1);
    assert_eq!(MedianCut::new(10_000).max_colors(), 256);
}

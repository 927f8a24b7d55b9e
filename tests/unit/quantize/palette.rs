use super::*;

#[test]
fn seeded_palette_reserves_transparent_slot() {
    let p = Palette::with_transparent();
    assert_eq!(p.len(), 1);
    assert_eq!(p.colors()[0], Rgba8::TRANSPARENT);
    assert_eq!(p.transparent_index(), Some(0));
}

#[test]
fn nearest_prefers_exact_match_and_lower_index_on_tie() {
    let p = Palette::new(vec![
        Rgba8::TRANSPARENT,
        Rgba8::opaque(10, 10, 10),
        Rgba8::opaque(10, 10, 10),
        Rgba8::WHITE,
    ]);
    assert_eq!(p.nearest(Rgba8::opaque(10, 10, 10)), 1);
    assert_eq!(p.nearest(Rgba8::opaque(250, 250, 250)), 3);
    assert_eq!(p.nearest(Rgba8::new(3, 3, 3, 0)), 0);
}

#[test]
fn transparent_input_ignores_color_channels() {
    let p = Palette::new(vec![Rgba8::WHITE, Rgba8::TRANSPARENT]);
    assert_eq!(p.nearest(Rgba8::new(255, 255, 255, 0)), 1);
}

#[test]
fn rgb_bytes_drop_alpha() {
    let p = Palette::new(vec![Rgba8::TRANSPARENT, Rgba8::opaque(1, 2, 3)]);
    assert_eq!(p.to_rgb_bytes(), vec![0, 0, 0, 1, 2, 3]);
}

#[test]
fn color_map_maps_to_palette_entries() {
    let p = Palette::new(vec![Rgba8::BLACK, Rgba8::WHITE]);
    let mut c = Rgba([200, 220, 180, 255]);
    p.map_color(&mut c);
    assert_eq!(c, Rgba([255, 255, 255, 255]));
    assert_eq!(p.index_of(&Rgba([20, 0, 10, 255])), 0);
    assert_eq!(p.lookup(1), Some(Rgba([255, 255, 255, 255])));
    assert!(p.has_lookup());
}

use super::*;

#[test]
fn transparent_pixels_stay_transparent_regardless_of_rgb() {
    for rgb in [[0u8, 0, 0], [255, 255, 255], [12, 200, 77]] {
        let px = mask_pixel(Rgba([rgb[0], rgb[1], rgb[2], 0]));
        assert_eq!(px, Rgba([255, 255, 255, 0]));
    }
}

#[test]
fn opaque_black_is_fully_opaque_in_mask() {
    assert_eq!(mask_pixel(Rgba([0, 0, 0, 255])), Rgba([255, 255, 255, 255]));
}

#[test]
fn mask_alpha_uses_brightest_channel() {
    assert_eq!(mask_pixel(Rgba([10, 200, 30, 255])).0[3], 55);
    assert_eq!(mask_pixel(Rgba([10, 20, 250, 1])).0[3], 5);
    assert_eq!(mask_pixel(Rgba([255, 0, 0, 255])).0[3], 0);
}

#[test]
fn derive_alpha_mask_is_idempotent_for_same_source() {
    let mut img = RgbaImage::new(3, 2);
    let mut v = 0u8;
    for px in img.pixels_mut() {
        *px = Rgba([v, v.wrapping_mul(3), 255 - v, v % 2 * 255]);
        v = v.wrapping_add(41);
    }
    let a = derive_alpha_mask(&img);
    let b = derive_alpha_mask(&img);
    assert_eq!(a, b);
    assert_eq!(a.dimensions(), img.dimensions());
}

#[test]
fn builder_resizes_to_target_and_mask_matches_source_size() {
    let img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
    let sm = MaskBuilder::new(Size::new(20, 12)).build_from_image(&img);
    assert_eq!(sm.source.dimensions(), (20, 12));
    assert_eq!(sm.mask.dimensions(), (20, 12));
    assert_eq!(sm.size(), Size::new(20, 12));
}

#[test]
fn default_builder_targets_200_square() {
    assert_eq!(MaskBuilder::default().size(), Size::new(200, 200));
}

#[test]
fn uniform_red_source_produces_clear_mask() {
    let img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
    let sm = MaskBuilder::new(Size::new(8, 8)).build_from_image(&img);
    for px in sm.mask.pixels() {
        assert_eq!([px.0[0], px.0[1], px.0[2]], [255, 255, 255]);
        assert!(px.0[3] <= 1, "unexpected mask alpha {}", px.0[3]);
    }
}

#[test]
fn upscaled_edge_against_transparency_stays_white() {
    let mut img = RgbaImage::from_pixel(4, 1, Rgba([0, 0, 0, 0]));
    img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
    img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

    let sm = MaskBuilder::new(Size::new(8, 1)).build_from_image(&img);
    let alphas: Vec<u8> = sm.source.pixels().map(|px| px.0[3]).collect();
    assert!(alphas.iter().any(|&a| a > 0 && a < 255), "no soft edge: {alphas:?}");
    for (x, px) in sm.source.pixels().enumerate() {
        if px.0[3] > 0 {
            assert_eq!([px.0[0], px.0[1], px.0[2]], [255, 255, 255], "x={x}");
        }
    }
    assert!(sm.mask.pixels().all(|px| px.0[3] == 0));
}

#[test]
fn resize_keeps_straight_color_of_half_transparent_source() {
    let img = RgbaImage::from_pixel(3, 3, Rgba([200, 40, 0, 128]));
    let out = resize_source(&img, Size::new(6, 6));
    for px in out.pixels() {
        assert_eq!(px.0[3], 128);
        assert!(px.0[0].abs_diff(200) <= 1 && px.0[1].abs_diff(40) <= 1, "{px:?}");
    }
}

#[test]
fn build_missing_file_propagates_io_error() {
    let err = MaskBuilder::default()
        .build(Path::new("target/nope/missing.png"))
        .unwrap_err();
    assert!(matches!(err, crate::foundation::error::OrbitError::Io(_)));
}

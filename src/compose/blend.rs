use image::RgbaImage;

use crate::foundation::core::{Frame, Rgba8};
use crate::foundation::error::{OrbitError, OrbitResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff "over" of premultiplied `src` onto `dst`, scaled by `coverage`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, coverage: u8) -> PremulRgba8 {
    if coverage == 0 || src[3] == 0 {
        return dst;
    }

    let cov = u16::from(coverage);
    let sa = mul_div255_u8(u16::from(src[3]), cov);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), cov);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Paint a solid `color` onto `dst`, using the alpha channel of `stencil` as coverage.
pub fn fill_through_stencil_in_place(
    dst: &mut Frame,
    color: Rgba8,
    stencil: &RgbaImage,
) -> OrbitResult<()> {
    if stencil.dimensions() != (dst.width, dst.height) {
        return Err(OrbitError::validation(format!(
            "stencil is {}x{}, canvas is {}x{}",
            stencil.width(),
            stencil.height(),
            dst.width,
            dst.height
        )));
    }

    let src = color.to_premul();
    for (d, m) in dst.data.chunks_exact_mut(4).zip(stencil.pixels()) {
        let out = over([d[0], d[1], d[2], d[3]], src, m.0[3]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;

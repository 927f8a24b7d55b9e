use crate::foundation::core::{Affine, Frame, Point, Rgba8, Size};
use crate::foundation::error::{OrbitError, OrbitResult};
use crate::layout::Placement;

/// Bounding size of a `size` image rotated by `angle_deg`.
pub fn rotated_size(size: Size, angle_deg: f64) -> Size {
    if size.is_empty() {
        return Size::default();
    }
    let rot = Affine::rotate(angle_deg.to_radians());
    let w = f64::from(size.width - 1);
    let h = f64::from(size.height - 1);
    let corners = [
        Point::ZERO,
        rot * Point::new(w, 0.0),
        rot * Point::new(w, h),
        rot * Point::new(0.0, h),
    ];

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in corners {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    fn extent(min: f64, max: f64) -> u32 {
        let mut v = max - min + 1.0;
        if v - v.floor() > 0.1 {
            v += 1.0;
        }
        v as u32
    }
    Size::new(extent(min_x, max_x), extent(min_y, max_y))
}

/// Rotate `frame` counter-clockwise by `angle_deg` around its center.
///
/// The output is sized to hold the rotated bounds. Area not covered by the source
/// is `background`.
pub fn rotate_frame(frame: &Frame, angle_deg: f64, background: Rgba8) -> Frame {
    let angle = angle_deg - (angle_deg / 360.0).floor() * 360.0;
    if angle == 0.0 {
        return frame.clone();
    }
    if angle == 90.0 || angle == 180.0 || angle == 270.0 {
        return rotate_quarter_turns(frame, (angle / 90.0) as u32);
    }

    let dst_size = rotated_size(frame.size(), angle);
    let mut dst = Frame::filled(dst_size, background);
    if dst_size.is_empty() {
        return dst;
    }

    let src_off = (
        f64::from(frame.width) / 2.0 - 0.5,
        f64::from(frame.height) / 2.0 - 0.5,
    );
    let dst_off = (
        f64::from(dst_size.width) / 2.0 - 0.5,
        f64::from(dst_size.height) / 2.0 - 0.5,
    );
    let to_src = Affine::translate(src_off)
        * Affine::rotate(angle.to_radians())
        * Affine::translate((-dst_off.0, -dst_off.1));

    let bg = background.to_premul();
    for y in 0..dst_size.height {
        for x in 0..dst_size.width {
            let p = to_src * Point::new(f64::from(x), f64::from(y));
            let px = sample_bilinear(frame, p, bg);
            let idx = ((y as usize) * (dst_size.width as usize) + (x as usize)) * 4;
            dst.data[idx..idx + 4].copy_from_slice(&px);
        }
    }
    dst
}

fn rotate_quarter_turns(frame: &Frame, turns: u32) -> Frame {
    let (w, h) = (frame.width, frame.height);
    let size = if turns % 2 == 1 {
        Size::new(h, w)
    } else {
        Size::new(w, h)
    };
    let mut dst = Frame::filled(size, Rgba8::TRANSPARENT);
    for y in 0..size.height {
        for x in 0..size.width {
            let (sx, sy) = match turns {
                1 => (w - 1 - y, x),
                2 => (w - 1 - x, h - 1 - y),
                _ => (y, h - 1 - x),
            };
            let s = ((sy as usize) * (w as usize) + (sx as usize)) * 4;
            let d = ((y as usize) * (size.width as usize) + (x as usize)) * 4;
            dst.data[d..d + 4].copy_from_slice(&frame.data[s..s + 4]);
        }
    }
    dst
}

/// Premultiplied bilinear sample; out-of-bounds taps read `bg`.
fn sample_bilinear(frame: &Frame, p: Point, bg: [u8; 4]) -> [u8; 4] {
    let x0 = p.x.floor();
    let y0 = p.y.floor();
    let (xi, yi) = (x0 as i64, y0 as i64);
    let (w, h) = (i64::from(frame.width), i64::from(frame.height));
    if xi < -1 || yi < -1 || xi >= w || yi >= h {
        return bg;
    }

    let xq = p.x - x0;
    let yq = p.y - y0;
    let taps = [
        (xi, yi, (1.0 - xq) * (1.0 - yq)),
        (xi + 1, yi, xq * (1.0 - yq)),
        (xi, yi + 1, (1.0 - xq) * yq),
        (xi + 1, yi + 1, xq * yq),
    ];

    let mut acc = [0.0f64; 4];
    for (tx, ty, weight) in taps {
        let px = if (0..w).contains(&tx) && (0..h).contains(&ty) {
            frame.pixel(tx as u32, ty as u32).unwrap_or(bg)
        } else {
            bg
        };
        for (a, c) in acc.iter_mut().zip(px) {
            *a += f64::from(c) * weight;
        }
    }

    let mut out = acc.map(|v| v.round().clamp(0.0, 255.0) as u8);
    let alpha = out[3];
    for c in &mut out[..3] {
        *c = (*c).min(alpha);
    }
    out
}

/// Rotate frame `i` of `N` by `360/N * i` degrees.
pub fn rotate_frames(frames: &[Frame], background: Rgba8) -> OrbitResult<Placement> {
    if frames.is_empty() {
        return Err(OrbitError::validation(
            "rotate layout requires at least one frame",
        ));
    }

    let step = 360.0 / frames.len() as f64;
    let mut max_size = Size::default();
    let mut rotated = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        let out = rotate_frame(frame, step * i as f64, background);
        max_size = max_size.max(out.size());
        rotated.push(out);
    }

    Ok(Placement {
        frames: rotated,
        max_size,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/rotate.rs"]
mod tests;

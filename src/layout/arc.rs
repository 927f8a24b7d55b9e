use std::f64::consts::PI;

use crate::foundation::core::{Frame, Rgba8, Size};
use crate::foundation::error::{OrbitError, OrbitResult};
use crate::layout::Placement;

/// Distance in pixels from the canvas center to each frame's center.
pub const DEFAULT_RADIUS: f64 = 50.0;

/// Rational factor applied to a frame's size to get its working canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasScale {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl CanvasScale {
    pub const DEFAULT: Self = Self { num: 3, den: 2 };

    pub fn new(num: u32, den: u32) -> OrbitResult<Self> {
        if den == 0 {
            return Err(OrbitError::validation("CanvasScale den must be > 0"));
        }
        if num == 0 {
            return Err(OrbitError::validation("CanvasScale num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Scale with integer truncation.
    pub fn apply(self, size: Size) -> Size {
        let scale = |v: u32| (u64::from(v) * u64::from(self.num) / u64::from(self.den)) as u32;
        Size::new(scale(size.width), scale(size.height))
    }
}

impl Default for CanvasScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Integer pixel offset of a frame from the canvas center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArcOffset {
    pub x: i64,
    pub y: i64,
}

/// Offset `(-r*sin(a), -r*cos(a))` for `a = 2*pi/count * index`, truncated toward zero.
pub fn arc_offset(index: usize, count: usize, radius: f64) -> ArcOffset {
    let angle = 2.0 * PI / count as f64 * index as f64;
    ArcOffset {
        x: (-radius * angle.sin()) as i64,
        y: (-radius * angle.cos()) as i64,
    }
}

/// Top-left corner at which a `frame`-sized image lands on a `canvas`-sized one.
pub fn placement_origin(canvas: Size, frame: Size, offset: ArcOffset) -> (i64, i64) {
    let dx = (i64::from(canvas.width) - i64::from(frame.width)) / 2;
    let dy = (i64::from(canvas.height) - i64::from(frame.height)) / 2;
    (dx.saturating_sub(offset.x), dy.saturating_sub(offset.y))
}

/// First phase of the arc layout.
///
/// Each frame is copied onto an enlarged background canvas, displaced by its
/// [`arc_offset`]. An empty `frames` is rejected.
pub fn place_on_arc(
    frames: &[Frame],
    background: Rgba8,
    radius: f64,
    scale: CanvasScale,
) -> OrbitResult<Placement> {
    if frames.is_empty() {
        return Err(OrbitError::validation(
            "arc layout requires at least one frame",
        ));
    }

    let count = frames.len();
    let mut placed = Vec::with_capacity(count);
    let mut max_size = Size::default();
    for (i, frame) in frames.iter().enumerate() {
        let mut canvas = Frame::filled(scale.apply(frame.size()), background);
        let offset = arc_offset(i, count, radius);
        let (x, y) = placement_origin(canvas.size(), frame.size(), offset);
        canvas.blit(frame, x, y);

        max_size = max_size.max(canvas.size());
        placed.push(canvas);
    }

    Ok(Placement {
        frames: placed,
        max_size,
    })
}

/// Second phase: copy every frame, centered, onto a `max_size` background canvas.
pub fn recenter_frames(frames: &[Frame], max_size: Size, background: Rgba8) -> Vec<Frame> {
    frames
        .iter()
        .map(|frame| {
            let mut canvas = Frame::filled(max_size, background);
            let x = (i64::from(max_size.width) - i64::from(frame.width)) / 2;
            let y = (i64::from(max_size.height) - i64::from(frame.height)) / 2;
            canvas.blit(frame, x, y);
            canvas
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arc.rs"]
mod tests;

pub(crate) mod arc;
pub(crate) mod rotate;

use crate::foundation::core::{Frame, Rgba8, Size};
use crate::foundation::error::OrbitResult;

/// Frames after the first layout phase, plus the largest canvas any of them occupies.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub frames: Vec<Frame>,
    pub max_size: Size,
}

/// How frames are moved around the shared center before re-centering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Translate each frame to a point on a circle around the canvas center.
    #[default]
    Arc,
    /// Rotate each frame in place by an evenly spaced angle.
    Rotate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub strategy: LayoutStrategy,
    pub background: Rgba8,
    pub radius: f64,
    pub scale: arc::CanvasScale,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            strategy: LayoutStrategy::Arc,
            background: Rgba8::TRANSPARENT,
            radius: arc::DEFAULT_RADIUS,
            scale: arc::CanvasScale::DEFAULT,
        }
    }
}

/// Run the selected placement strategy, then center every result on a common canvas.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn arrange_frames(frames: &[Frame], params: &LayoutParams) -> OrbitResult<Vec<Frame>> {
    let placement = match params.strategy {
        LayoutStrategy::Arc => {
            arc::place_on_arc(frames, params.background, params.radius, params.scale)?
        }
        LayoutStrategy::Rotate => rotate::rotate_frames(frames, params.background)?,
    };
    tracing::debug!(
        width = placement.max_size.width,
        height = placement.max_size.height,
        "placed frames"
    );
    Ok(arc::recenter_frames(
        &placement.frames,
        placement.max_size,
        params.background,
    ))
}

use crate::compose::blend::fill_through_stencil_in_place;
use crate::foundation::core::{Frame, Rgba8};
use crate::foundation::error::OrbitResult;
use crate::mask::builder::SourceMask;

/// Fill colors used when no configuration overrides them, in frame order.
pub const DEFAULT_FILL_COLORS: [Rgba8; 5] = [
    Rgba8::opaque(255, 130, 128),
    Rgba8::opaque(125, 255, 126),
    Rgba8::opaque(128, 172, 254),
    Rgba8::opaque(255, 129, 255),
    Rgba8::opaque(255, 94, 93),
];

pub const DEFAULT_BACKGROUND: Rgba8 = Rgba8::TRANSPARENT;

/// Which image's alpha channel gates the fill layer.
///
/// The outline layer always uses the derived alpha mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStencil {
    /// Inverse-lightness alpha mask.
    #[default]
    Mask,
    /// Alpha channel of the resized source, which fills the whole silhouette.
    SourceAlpha,
}

/// Build one frame: background, then `fill` through the stencil, then black through the mask.
pub fn composite_frame(
    fill: Rgba8,
    background: Rgba8,
    source: &SourceMask,
    stencil: FillStencil,
) -> OrbitResult<Frame> {
    let mut canvas = Frame::filled(source.size(), background);

    let fill_stencil = match stencil {
        FillStencil::Mask => &source.mask,
        FillStencil::SourceAlpha => &source.source,
    };
    fill_through_stencil_in_place(&mut canvas, fill, fill_stencil)?;
    fill_through_stencil_in_place(&mut canvas, Rgba8::BLACK, &source.mask)?;

    Ok(canvas)
}

/// One frame per fill color, in order.
#[tracing::instrument(skip(source), fields(colors = fills.len()))]
pub fn composite_frames(
    fills: &[Rgba8],
    background: Rgba8,
    source: &SourceMask,
    stencil: FillStencil,
) -> OrbitResult<Vec<Frame>> {
    fills
        .iter()
        .map(|&fill| composite_frame(fill, background, source, stencil))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/frame.rs"]
mod tests;

use std::io::Write;

use image::RgbaImage;

use crate::compose::frame::composite_frames;
use crate::config::OrbitConfig;
use crate::encode::animation::{encode_animation, write_animation_file};
use crate::foundation::core::Frame;
use crate::foundation::error::OrbitResult;
use crate::layout::arrange_frames;
use crate::mask::builder::{MaskBuilder, SourceMask};

/// Composite one frame per fill color, then lay them out on a shared canvas.
///
/// Every returned frame has the same dimensions.
pub fn build_frames(config: &OrbitConfig, source: &SourceMask) -> OrbitResult<Vec<Frame>> {
    let frames = composite_frames(
        &config.fill_colors,
        config.background,
        source,
        config.fill_stencil,
    )?;
    arrange_frames(&frames, &config.layout_params())
}

/// Full pipeline over an in-memory source, writing the GIF to `writer`.
pub fn render_to_writer<W: Write>(
    config: &OrbitConfig,
    source: &RgbaImage,
    writer: W,
) -> OrbitResult<()> {
    config.validate()?;
    let mask = MaskBuilder::new(config.mask_size).build_from_image(source);
    let frames = build_frames(config, &mask)?;
    encode_animation(&frames, writer, &config.encode_options())
}

/// Read `config.input`, run every stage and write `config.output`.
#[tracing::instrument(skip(config), fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &OrbitConfig) -> OrbitResult<()> {
    config.validate()?;
    let mask = MaskBuilder::new(config.mask_size).build(&config.input)?;
    let frames = build_frames(config, &mask)?;
    write_animation_file(&config.output, &frames, &config.encode_options())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;

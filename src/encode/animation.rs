use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::foundation::core::Frame;
use crate::foundation::error::{OrbitError, OrbitResult};
use crate::quantize::dither::dither_to_palette;
use crate::quantize::median_cut::MedianCut;
use crate::quantize::palette::{MAX_PALETTE_LEN, Palette};

/// Per-frame display time, in hundredths of a second.
pub const DEFAULT_DELAY_CS: u16 = 2;

/// What the decoder does with a frame's area before drawing the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposal {
    Any,
    Keep,
    /// Restore to background.
    #[default]
    Background,
    Previous,
}

impl From<Disposal> for gif::DisposalMethod {
    fn from(d: Disposal) -> Self {
        match d {
            Disposal::Any => Self::Any,
            Disposal::Keep => Self::Keep,
            Disposal::Background => Self::Background,
            Disposal::Previous => Self::Previous,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub max_colors: usize,
    pub delay_cs: u16,
    pub disposal: Disposal,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            max_colors: MAX_PALETTE_LEN,
            delay_cs: DEFAULT_DELAY_CS,
            disposal: Disposal::Background,
        }
    }
}

/// A frame reduced to palette indices, with its own palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PalettedFrame {
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub indices: Vec<u8>,
}

/// Paletted frames with their per-frame delay and disposal.
///
/// The three sequences only grow together through [`Animation::push`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<PalettedFrame>,
    delays: Vec<u16>,
    disposals: Vec<Disposal>,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: PalettedFrame, delay_cs: u16, disposal: Disposal) {
        self.frames.push(frame);
        self.delays.push(delay_cs);
        self.disposals.push(disposal);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[PalettedFrame] {
        &self.frames
    }

    pub fn delays(&self) -> &[u16] {
        &self.delays
    }

    pub fn disposals(&self) -> &[Disposal] {
        &self.disposals
    }

    /// Serialize as a looping GIF. The logical screen is the first frame's size.
    pub fn write_to<W: Write>(&self, writer: W) -> OrbitResult<()> {
        let Some(first) = self.frames.first() else {
            return Err(OrbitError::encode("animation has no frames"));
        };
        let width = gif_dim(first.width)?;
        let height = gif_dim(first.height)?;

        let mut encoder = gif::Encoder::new(writer, width, height, &[])
            .map_err(|e| OrbitError::encode(format!("failed to start gif stream: {e}")))?;
        encoder
            .set_repeat(gif::Repeat::Infinite)
            .map_err(|e| OrbitError::encode(format!("failed to write loop extension: {e}")))?;

        for (i, ((frame, &delay), &disposal)) in self
            .frames
            .iter()
            .zip(&self.delays)
            .zip(&self.disposals)
            .enumerate()
        {
            if frame.width != first.width || frame.height != first.height {
                return Err(OrbitError::encode(format!(
                    "frame {i} is {}x{}, expected {}x{}",
                    frame.width, frame.height, first.width, first.height
                )));
            }
            if frame.indices.len() != (frame.width as usize) * (frame.height as usize) {
                return Err(OrbitError::encode(format!(
                    "frame {i} has {} indices for {}x{} pixels",
                    frame.indices.len(),
                    frame.width,
                    frame.height
                )));
            }

            let gif_frame = gif::Frame {
                width,
                height,
                delay,
                dispose: disposal.into(),
                transparent: frame.palette.transparent_index(),
                palette: Some(frame.palette.to_rgb_bytes()),
                buffer: Cow::Borrowed(frame.indices.as_slice()),
                ..gif::Frame::default()
            };
            encoder
                .write_frame(&gif_frame)
                .map_err(|e| OrbitError::encode(format!("failed to write frame {i}: {e}")))?;
        }

        encoder
            .into_inner()
            .map_err(|e| OrbitError::encode(format!("failed to finish gif stream: {e}")))?;
        Ok(())
    }
}

fn gif_dim(v: u32) -> OrbitResult<u16> {
    u16::try_from(v).map_err(|_| OrbitError::encode(format!("dimension {v} exceeds gif limit")))
}

/// Median-cut palette seeded with a transparent entry, then Floyd-Steinberg indices.
pub fn quantize_frame(frame: &Frame, quantizer: &MedianCut) -> PalettedFrame {
    let straight = frame.to_straight_rgba();
    let palette = quantizer.quantize(Palette::with_transparent(), &straight);
    let indices = dither_to_palette(&straight, &palette);
    PalettedFrame {
        width: frame.width,
        height: frame.height,
        palette,
        indices,
    }
}

/// Quantize every frame into an [`Animation`]. Empty input is rejected up front.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn encode_frames(frames: &[Frame], opts: &EncodeOptions) -> OrbitResult<Animation> {
    if frames.is_empty() {
        return Err(OrbitError::empty_input("no frames to encode"));
    }

    let quantizer = MedianCut::new(opts.max_colors);
    let mut animation = Animation::new();
    for (i, frame) in frames.iter().enumerate() {
        let paletted = quantize_frame(frame, &quantizer);
        tracing::debug!(frame = i, colors = paletted.palette.len(), "quantized frame");
        animation.push(paletted, opts.delay_cs, opts.disposal);
    }
    Ok(animation)
}

/// Quantize `frames` and write them as an animated GIF to `writer`.
pub fn encode_animation<W: Write>(
    frames: &[Frame],
    writer: W,
    opts: &EncodeOptions,
) -> OrbitResult<()> {
    if frames.is_empty() {
        return Err(OrbitError::empty_input("no frames to encode"));
    }

    let animation = encode_frames(frames, opts)?;

    if animation.is_empty() {
        return Ok(());
    }

    animation.write_to(writer)
}

pub fn ensure_parent_dir(path: &Path) -> OrbitResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            OrbitError::io(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Create `path` and encode `frames` into it.
#[tracing::instrument(skip(frames, opts), fields(frames = frames.len()))]
pub fn write_animation_file(path: &Path, frames: &[Frame], opts: &EncodeOptions) -> OrbitResult<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path)
        .map_err(|e| OrbitError::io(format!("failed to create '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    encode_animation(frames, &mut writer, opts)?;
    writer
        .flush()
        .map_err(|e| OrbitError::encode(format!("failed to flush '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), frames = frames.len(), "wrote animation");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/animation.rs"]
mod tests;

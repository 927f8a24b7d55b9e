use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::compose::frame::{DEFAULT_BACKGROUND, DEFAULT_FILL_COLORS, FillStencil};
use crate::encode::animation::{DEFAULT_DELAY_CS, Disposal, EncodeOptions};
use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{OrbitError, OrbitResult};
use crate::layout::arc::{CanvasScale, DEFAULT_RADIUS};
use crate::layout::{LayoutParams, LayoutStrategy};
use crate::mask::builder::DEFAULT_MASK_SIZE;
use crate::quantize::palette::MAX_PALETTE_LEN;

pub const DEFAULT_INPUT_PATH: &str = "gopherbw.png";
pub const DEFAULT_OUTPUT_PATH: &str = "animeAround.gif";

/// Largest arc radius accepted, in pixels. No gif frame is wider than this.
pub const MAX_RADIUS: f64 = u16::MAX as f64;

/// Everything the pipeline needs, with defaults that reproduce the stock animation.
///
/// Missing JSON fields fall back to [`OrbitConfig::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// One frame is produced per color, in order.
    pub fill_colors: Vec<Rgba8>,
    pub background: Rgba8,
    /// Size the source is resized to before the mask is derived.
    pub mask_size: Size,
    pub fill_stencil: FillStencil,
    pub layout: LayoutStrategy,
    /// Arc radius in pixels.
    pub radius: f64,
    pub canvas_scale: CanvasScale,
    /// Hundredths of a second.
    pub delay_cs: u16,
    pub disposal: Disposal,
    /// Palette size cap per frame, including the transparent entry.
    pub max_colors: usize,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            fill_colors: DEFAULT_FILL_COLORS.to_vec(),
            background: DEFAULT_BACKGROUND,
            mask_size: DEFAULT_MASK_SIZE,
            fill_stencil: FillStencil::default(),
            layout: LayoutStrategy::default(),
            radius: DEFAULT_RADIUS,
            canvas_scale: CanvasScale::DEFAULT,
            delay_cs: DEFAULT_DELAY_CS,
            disposal: Disposal::default(),
            max_colors: MAX_PALETTE_LEN,
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> OrbitResult<()> {
        if self.fill_colors.is_empty() {
            return Err(OrbitError::validation(
                "fill_colors must contain at least one color",
            ));
        }
        check_frame_size("mask_size", self.mask_size)?;
        if !self.radius.is_finite() || self.radius.abs() > MAX_RADIUS {
            return Err(OrbitError::validation(format!(
                "radius must be finite and within +/-{MAX_RADIUS}, got {}",
                self.radius
            )));
        }
        let scale = CanvasScale::new(self.canvas_scale.num, self.canvas_scale.den)?;
        if self.layout == LayoutStrategy::Arc {
            check_frame_size("scaled arc canvas", scale.apply(self.mask_size))?;
        }
        if !(2..=MAX_PALETTE_LEN).contains(&self.max_colors) {
            return Err(OrbitError::validation(format!(
                "max_colors must be in 2..={MAX_PALETTE_LEN}, got {}",
                self.max_colors
            )));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> OrbitResult<Self> {
        serde_json::from_str(s).map_err(|e| OrbitError::validation(format!("parse config: {e}")))
    }

    pub fn from_json_path(path: &Path) -> OrbitResult<Self> {
        let f = File::open(path)
            .map_err(|e| OrbitError::io(format!("open config '{}': {e}", path.display())))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            OrbitError::validation(format!("parse config '{}': {e}", path.display()))
        })
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            strategy: self.layout,
            background: self.background,
            radius: self.radius,
            scale: self.canvas_scale,
        }
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            max_colors: self.max_colors,
            delay_cs: self.delay_cs,
            disposal: self.disposal,
        }
    }
}

/// Each side must be in `2..=65535`.
fn check_frame_size(what: &str, size: Size) -> OrbitResult<()> {
    let limit = u32::from(u16::MAX);
    if size.width < 2 || size.height < 2 || size.width > limit || size.height > limit {
        return Err(OrbitError::validation(format!(
            "{what} must be between 2x2 and {limit}x{limit}, got {}x{}",
            size.width, size.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;

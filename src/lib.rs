//! orbit-gif turns a silhouette bitmap into an orbiting, multi-color animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Mask**: `PNG -> SourceMask` (resize, then derive an inverse-lightness alpha mask)
//! 2. **Composite**: `SourceMask + fill color -> Frame` (one frame per configured color)
//! 3. **Layout**: `[Frame] -> [Frame]` (place on an arc or rotate, then re-center to one size)
//! 4. **Encode**: `[Frame] -> GIF` (median-cut palette, Floyd-Steinberg dither, fixed delay)
//!
//! Frames are premultiplied RGBA8 between stages. Every stage is deterministic for a
//! given input, and all IO happens at the two ends of the pipeline.
//!
//! [`run`] drives the whole thing from an [`OrbitConfig`]. The defaults reproduce the
//! stock animation (`gopherbw.png` in, `animeAround.gif` out).
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod config;
mod encode;
mod foundation;
mod layout;
mod mask;
mod pipeline;
mod quantize;

pub use assets::decode::{decode_image, load_source};
pub use compose::blend::{PremulRgba8, fill_through_stencil_in_place, over};
pub use compose::frame::{
    DEFAULT_BACKGROUND, DEFAULT_FILL_COLORS, FillStencil, composite_frame, composite_frames,
};
pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, MAX_RADIUS, OrbitConfig};
pub use encode::animation::{
    Animation, DEFAULT_DELAY_CS, Disposal, EncodeOptions, PalettedFrame, encode_animation,
    encode_frames, ensure_parent_dir, quantize_frame, write_animation_file,
};
pub use foundation::core::{Frame, Rgba8, Size};
pub use foundation::error::{OrbitError, OrbitResult};
pub use layout::arc::{
    ArcOffset, CanvasScale, DEFAULT_RADIUS, arc_offset, place_on_arc, placement_origin,
    recenter_frames,
};
pub use layout::rotate::{rotate_frame, rotate_frames, rotated_size};
pub use layout::{LayoutParams, LayoutStrategy, Placement, arrange_frames};
pub use mask::builder::{
    DEFAULT_MASK_SIZE, MaskBuilder, SourceMask, derive_alpha_mask, mask_pixel, resize_source,
};
pub use pipeline::{build_frames, render_to_writer, run};
pub use quantize::dither::dither_to_palette;
pub use quantize::median_cut::MedianCut;
pub use quantize::palette::{MAX_PALETTE_LEN, Palette};

pub(crate) mod dither;
pub(crate) mod median_cut;
pub(crate) mod palette;

//! Geometric and raster primitives of the crop pipeline: box expansion,
//! largest-face selection, fixed-size resampling, and the per-image
//! pipeline that ties them together. These are internal building blocks
//! consumed by the high-level `api` module.
pub mod expand;
pub mod pipeline;
pub mod resize;
pub mod select;

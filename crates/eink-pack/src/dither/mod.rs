//! Quantization and dithering.
//!
//! # Families
//!
//! - **Stateless** ([`threshold`]): plain threshold and the 2x2 ordered
//!   pattern, mono and N-level. No error memory.
//! - **Gray error diffusion** ([`diffuse_binary`], [`diffuse_levels`]):
//!   Floyd-Steinberg or Jarvis-Judice-Ninke over a single float channel.
//! - **Color error diffusion** ([`diffuse_to_palette`]): nine kernels over
//!   R, G and B toward a fixed [`Palette`](crate::Palette).
//!
//! # Scan order
//!
//! | Path | Order |
//! |------|-------|
//! | Gray binary | raster (left to right on every row) |
//! | Gray N-level | serpentine |
//! | Color | serpentine |
//!
//! On serpentine rows running right to left, every tap's `dx` is negated.

mod buffer;
mod color;
mod gray;
mod kernel;
mod levels;
mod scan;
pub mod threshold;

pub use color::{
    color_dither_from_name, diffuse_to_palette, dither_to_palette, map_to_palette, ColorKernel,
};
pub use gray::{diffuse_binary, diffuse_levels, dither_levels, dither_mono, GrayDither};
pub use kernel::*;
pub use levels::Levels;
pub use scan::ScanOrder;

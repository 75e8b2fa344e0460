#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! eink-pack: low bit-depth conversion for e-paper display controllers
//!
//! Turns an RGBA frame into the packed byte buffer a panel controller
//! expects: 1 bpp black and white, 3 or 4 bpp gray, or a fixed color palette
//! at 2 bpp (white/black/red) or in nibble slots (seven-color panels).
//!
//! # Quick Start
//!
//! ```
//! use eink_pack::{convert, ConvertParams, Rgba, Target};
//!
//! let pixels = vec![Rgba::gray(128); 8 * 2];
//! let params = ConvertParams::default().with_dither("floyd-steinberg");
//! let image = convert(&pixels, 8, 2, &Target::Mono, "bw", &params).unwrap();
//!
//! assert_eq!(image.buffer().len(), 2);
//! assert_eq!(image.meta().bpp, 1);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA frame
//!     |
//!     +--> gray targets: luminance (0.2126 R + 0.7152 G + 0.0722 B)
//!     |        |
//!     |     [invert]
//!     |        |
//!     |     threshold / simple2d / FS / JJN  --> 0/255 map or level indices
//!     |
//!     +--> palette targets: [invert RGB]
//!              |
//!           nearest match or color diffusion (9 kernels) --> palette indices
//!     |
//!     v
//! bpp-specific packer  --> buffer
//! ```
//!
//! Every conversion also returns a preview (the quantized value of each
//! pixel as RGBA) and `{width, height, bpp, mode_id}` metadata.
//!
//! # Error diffusion
//!
//! All diffusion runs over a float working buffer owned by one call. Each
//! write is clamped to `0..=255` and taps that fall off the frame are
//! dropped. Binary gray diffusion scans in raster order; N-level gray and
//! all color diffusion scan serpentine. See [`dither`].
//!
//! # Packing
//!
//! Each depth has its own row length and bit order; see [`pack`]. The 3 bpp
//! layout stores one value per nibble, which is what the controllers read.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod pack;
pub mod palette;


pub use api::{convert, ConvertParams, DitherError, RequestSequencer, Target, Ticket};
pub use color::Rgba;
pub use dither::{ColorKernel, GrayDither, Levels};
pub use output::{ConvertMeta, PackedImage};
pub use palette::{Palette, PaletteError, ParseColorError};

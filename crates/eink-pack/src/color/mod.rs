//! Pixel types and tone reduction.
//!
//! - [`Rgba`]: 8-bit RGBA sample, the input format of every conversion
//! - [`luminance()`]: Rec. 709 luma used by the grayscale paths

mod rgba;
mod tone;

pub use rgba::Rgba;
pub use tone::{invert_gray, luminance, to_grayscale};

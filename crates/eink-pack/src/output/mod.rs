//! Conversion output: the packed buffer plus what the caller needs to show
//! and label it.

mod packed_image;

pub use packed_image::{ConvertMeta, PackedImage};

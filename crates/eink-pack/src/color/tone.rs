//! Tone reduction: RGBA to single-channel intensity.

use super::Rgba;

/// Rec. 709 luma of a pixel, rounded half away from zero.
///
/// `round(0.2126 R + 0.7152 G + 0.0722 B)`. The weights sum to 1, so the
/// result always stays inside 0..=255. Alpha is ignored.
#[inline]
pub fn luminance(px: Rgba) -> u8 {
    let y = 0.2126 * px.r as f64 + 0.7152 * px.g as f64 + 0.0722 * px.b as f64;
    y.round().clamp(0.0, 255.0) as u8
}

/// Reduce a whole grid to intensities, one per pixel.
pub fn to_grayscale(pixels: &[Rgba]) -> Vec<u8> {
    pixels.iter().map(|&px| luminance(px)).collect()
}

/// Negate intensities in place (`255 - v`).
pub fn invert_gray(gray: &mut [u8]) {
    for v in gray.iter_mut() {
        *v = 255 - *v;
    }
}

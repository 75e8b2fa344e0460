//! Stateless quantizers: every output pixel depends on its input alone
//! (and, for the ordered variants, on its position).

use super::levels::Levels;

/// Light sample value in a mono map.
pub const LIGHT: u8 = 255;
/// Dark sample value in a mono map.
pub const DARK: u8 = 0;

/// 2x2 ordered threshold pattern, indexed `[y & 1][x & 1]`.
pub const PATTERN_2X2: [[u8; 2]; 2] = [[0, 128], [192, 64]];

/// Plain threshold: `v > threshold` is light, everything else dark.
///
/// Idempotent on maps that already hold only 0 and 255, for any threshold
/// below 255.
pub fn threshold(gray: &[u8], threshold: u8) -> Vec<u8> {
    gray.iter()
        .map(|&v| if v > threshold { LIGHT } else { DARK })
        .collect()
}

/// 2x2 ordered pattern blended with a base threshold.
///
/// The per-pixel threshold is `pattern * 0.75 + threshold * 0.25`. A pixel
/// whose intensity exceeds it comes out **dark**; callers that want light
/// input to stay light flip the map (see [`dither_mono`](super::dither_mono)).
pub fn ordered_mono(gray: &[u8], width: usize, height: usize, threshold: u8) -> Vec<u8> {
    let mut out = vec![LIGHT; gray.len()];
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let t = PATTERN_2X2[y & 1][x & 1] as f32 * 0.75 + threshold as f32 * 0.25;
            if gray[i] as f32 > t {
                out[i] = DARK;
            }
        }
    }
    out
}

/// Round every intensity to its nearest level index.
pub fn round_levels(gray: &[u8], levels: Levels) -> Vec<u8> {
    gray.iter().map(|&v| levels.quantize(v as f32)).collect()
}

/// N-level ordered quantization: the 2x2 pattern nudges each intensity by
/// `(pattern - 128) * 0.5` before rounding.
pub fn ordered_levels(gray: &[u8], width: usize, height: usize, levels: Levels) -> Vec<u8> {
    let mut out = vec![0; gray.len()];
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let bias = (PATTERN_2X2[y & 1][x & 1] as f32 - 128.0) * 0.5;
            out[i] = levels.quantize((gray[i] as f32 + bias).clamp(0.0, 255.0));
        }
    }
    out
}

//! Gray error diffusion: binary and N-level.
//!
//! Both paths share the same two kernel families but not the same scan
//! order. Binary diffusion walks every row left to right; N-level diffusion
//! is serpentine. The asymmetry is kept as-is because packed output for
//! existing panels depends on it.

use std::fmt;
use std::str::FromStr;

use super::buffer::{run_diffusion, WorkingBuffer};
use super::kernel::{Kernel, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE};
use super::levels::Levels;
use super::scan::ScanOrder;
use super::threshold::{self, DARK, LIGHT};
use crate::api::DitherError;

/// Dithering method for the grayscale targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayDither {
    /// Plain threshold (mono) or rounding to the nearest level.
    #[default]
    None,
    /// 2x2 ordered pattern (`simple2d`).
    Ordered,
    /// Floyd-Steinberg error diffusion.
    FloydSteinberg,
    /// Jarvis-Judice-Ninke error diffusion.
    Jarvis,
}

impl GrayDither {
    pub fn name(self) -> &'static str {
        match self {
            GrayDither::None => "none",
            GrayDither::Ordered => "simple2d",
            GrayDither::FloydSteinberg => "floyd-steinberg",
            GrayDither::Jarvis => "jarvis",
        }
    }

    /// Diffusion kernel, if this method diffuses error.
    pub fn kernel(self) -> Option<&'static Kernel> {
        match self {
            GrayDither::FloydSteinberg => Some(&FLOYD_STEINBERG),
            GrayDither::Jarvis => Some(&JARVIS_JUDICE_NINKE),
            GrayDither::None | GrayDither::Ordered => None,
        }
    }
}

impl fmt::Display for GrayDither {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GrayDither {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(GrayDither::None),
            "simple2d" => Ok(GrayDither::Ordered),
            "floyd-steinberg" => Ok(GrayDither::FloydSteinberg),
            "jarvis" => Ok(GrayDither::Jarvis),
            other => Err(DitherError::UnknownDither(other.to_string())),
        }
    }
}

/// Binary error diffusion to a 0/255 map.
///
/// Raster order only. Each pixel becomes light when its error-adjusted
/// value exceeds `threshold`.
pub fn diffuse_binary(
    gray: &[u8],
    width: usize,
    height: usize,
    kernel: &Kernel,
    threshold: u8,
) -> Vec<u8> {
    let mut buf = WorkingBuffer::from_gray(gray, width, height);
    let mut out = vec![DARK; gray.len()];
    let t = threshold as f32;

    run_diffusion(&mut buf, kernel, ScanOrder::Raster, |idx, [old]| {
        let new = if old > t { LIGHT } else { DARK };
        out[idx] = new;
        [old - new as f32]
    });
    out
}

/// N-level error diffusion to level indices in `0..levels`.
///
/// Serpentine order; taps are mirrored on right-to-left rows.
pub fn diffuse_levels(
    gray: &[u8],
    width: usize,
    height: usize,
    levels: Levels,
    kernel: &Kernel,
) -> Vec<u8> {
    let mut buf = WorkingBuffer::from_gray(gray, width, height);
    let mut out = vec![0; gray.len()];
    let step = levels.step();

    run_diffusion(&mut buf, kernel, ScanOrder::Serpentine, |idx, [val]| {
        let k = levels.quantize(val);
        out[idx] = k;
        [val - k as f32 * step]
    });
    out
}

/// Quantize intensities to a light/dark map (255 = light, 0 = dark).
///
/// The ordered pattern marks bright pixels dark; its output is flipped here
/// so that all four methods share the same polarity.
pub fn dither_mono(
    gray: &[u8],
    width: usize,
    height: usize,
    method: GrayDither,
    threshold: u8,
) -> Vec<u8> {
    match method {
        GrayDither::None => threshold::threshold(gray, threshold),
        GrayDither::Ordered => {
            let mut map = threshold::ordered_mono(gray, width, height, threshold);
            for v in map.iter_mut() {
                *v = 255 - *v;
            }
            map
        }
        GrayDither::FloydSteinberg | GrayDither::Jarvis => {
            let kernel = method.kernel().unwrap_or(&FLOYD_STEINBERG);
            diffuse_binary(gray, width, height, kernel, threshold)
        }
    }
}

/// Quantize intensities to level indices.
pub fn dither_levels(
    gray: &[u8],
    width: usize,
    height: usize,
    levels: Levels,
    method: GrayDither,
) -> Vec<u8> {
    match method {
        GrayDither::None => threshold::round_levels(gray, levels),
        GrayDither::Ordered => threshold::ordered_levels(gray, width, height, levels),
        GrayDither::FloydSteinberg | GrayDither::Jarvis => {
            let kernel = method.kernel().unwrap_or(&FLOYD_STEINBERG);
            diffuse_levels(gray, width, height, levels, kernel)
        }
    }
}

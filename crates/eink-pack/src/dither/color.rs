//! Palette-targeted error diffusion over R, G and B.
//!
//! Scan order comes from the kernel; all built-in kernels run serpentine.
//! Alpha is never diffused or matched.

use std::fmt;

use super::buffer::{run_diffusion, WorkingBuffer};
use super::kernel::*;
use super::scan::ScanOrder;
use crate::color::Rgba;
use crate::palette::Palette;

/// The nine diffusion kernels available for palette targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorKernel {
    #[default]
    FloydSteinberg,
    FalseFloydSteinberg,
    Jarvis,
    Stucki,
    Atkinson,
    Burkes,
    Sierra,
    TwoSierra,
    SierraLite,
}

impl ColorKernel {
    pub const ALL: [ColorKernel; 9] = [
        ColorKernel::FloydSteinberg,
        ColorKernel::FalseFloydSteinberg,
        ColorKernel::Jarvis,
        ColorKernel::Stucki,
        ColorKernel::Atkinson,
        ColorKernel::Burkes,
        ColorKernel::Sierra,
        ColorKernel::TwoSierra,
        ColorKernel::SierraLite,
    ];

    pub fn kernel(self) -> &'static Kernel {
        match self {
            ColorKernel::FloydSteinberg => &FLOYD_STEINBERG,
            ColorKernel::FalseFloydSteinberg => &FALSE_FLOYD_STEINBERG,
            ColorKernel::Jarvis => &JARVIS_JUDICE_NINKE,
            ColorKernel::Stucki => &STUCKI,
            ColorKernel::Atkinson => &ATKINSON,
            ColorKernel::Burkes => &BURKES,
            ColorKernel::Sierra => &SIERRA,
            ColorKernel::TwoSierra => &TWO_SIERRA,
            ColorKernel::SierraLite => &SIERRA_LITE,
        }
    }

    /// Resolve a kernel name, falling back to Floyd-Steinberg.
    ///
    /// Accepts the CamelCase names, their kebab/snake spellings and a few
    /// short aliases. `simple2d` (the gray ordered pattern, which has no
    /// palette counterpart) selects Sierra Lite. Any other name, including
    /// garbage, gives Floyd-Steinberg rather than an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "FloydSteinberg" | "floyd-steinberg" | "fs" => ColorKernel::FloydSteinberg,
            "FalseFloydSteinberg" | "false-floyd-steinberg" | "ffs" => {
                ColorKernel::FalseFloydSteinberg
            }
            "Jarvis" | "jarvis" => ColorKernel::Jarvis,
            "Stucki" | "stucki" => ColorKernel::Stucki,
            "Atkinson" | "atkinson" => ColorKernel::Atkinson,
            "Burkes" | "burkes" => ColorKernel::Burkes,
            "Sierra" | "sierra" => ColorKernel::Sierra,
            "TwoSierra" | "two-sierra" | "two_sierra" => ColorKernel::TwoSierra,
            "SierraLite" | "sierra-lite" | "sierra_lite" | "simple2d" => ColorKernel::SierraLite,
            other => {
                tracing::debug!(name = other, "Unknown color kernel, using FloydSteinberg");
                ColorKernel::FloydSteinberg
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorKernel::FloydSteinberg => "FloydSteinberg",
            ColorKernel::FalseFloydSteinberg => "FalseFloydSteinberg",
            ColorKernel::Jarvis => "Jarvis",
            ColorKernel::Stucki => "Stucki",
            ColorKernel::Atkinson => "Atkinson",
            ColorKernel::Burkes => "Burkes",
            ColorKernel::Sierra => "Sierra",
            ColorKernel::TwoSierra => "TwoSierra",
            ColorKernel::SierraLite => "SierraLite",
        }
    }
}

impl fmt::Display for ColorKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a palette dithering selector.
///
/// `None`, `""` and `"none"` mean no diffusion (plain nearest match);
/// everything else goes through [`ColorKernel::from_name`].
pub fn color_dither_from_name(name: Option<&str>) -> Option<ColorKernel> {
    match name {
        None | Some("") | Some("none") => None,
        Some(n) => Some(ColorKernel::from_name(n)),
    }
}

/// Nearest palette index for every pixel, no diffusion.
///
/// With `invert`, R, G and B are negated before matching.
pub fn map_to_palette(pixels: &[Rgba], palette: &Palette, invert: bool) -> Vec<u8> {
    pixels
        .iter()
        .map(|&px| {
            let px = if invert { px.inverted() } else { px };
            palette.find_nearest(px) as u8
        })
        .collect()
}

/// Error diffusion to palette indices, in the scan order the kernel asks for
/// (serpentine for every built-in kernel).
pub fn diffuse_to_palette(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: ColorKernel,
    invert: bool,
) -> Vec<u8> {
    let mut buf = WorkingBuffer::from_rgba(pixels, width, height, invert);
    let mut out = vec![0; pixels.len()];

    let kernel = kernel.kernel();
    run_diffusion(&mut buf, kernel, ScanOrder::preferred_by(kernel), |idx, rgb| {
        let best = palette.find_nearest_f32(rgb);
        out[idx] = best as u8;
        let q = palette.color(best);
        [rgb[0] - q.r as f32, rgb[1] - q.g as f32, rgb[2] - q.b as f32]
    });
    out
}

/// Quantize to a palette with an optional kernel (`None` = nearest match).
pub fn dither_to_palette(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: Option<ColorKernel>,
    invert: bool,
) -> Vec<u8> {
    match kernel {
        None => map_to_palette(pixels, palette, invert),
        Some(k) => diffuse_to_palette(pixels, width, height, palette, k, invert),
    }
}

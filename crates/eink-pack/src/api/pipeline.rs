//! The conversion pipeline: RGBA in, packed buffer and preview out.
//!
//! The stage sequence is fixed once per call by the [`Target`]:
//!
//! | Target | Stages |
//! |--------|--------|
//! | `Mono` | luminance, invert, threshold / simple2d / FS / JJN, 1 bpp pack |
//! | `Gray` | luminance, invert, N-level quantize, 3 bpp (indices) or 4 bpp (gray) pack |
//! | `Palette` | invert RGB, nearest match or color diffusion, 2 or 3 bpp pack |

use tracing::debug;

use super::params::ConvertParams;
use super::target::Target;
use crate::color::{invert_gray, to_grayscale, Rgba};
use crate::dither::{color_dither_from_name, dither_levels, dither_mono, dither_to_palette};
use crate::dither::{GrayDither, Levels};
use crate::output::{ConvertMeta, PackedImage};
use crate::pack::{pack_1bpp, pack_2bpp, pack_3bpp, pack_4bpp};
use crate::palette::Palette;
use crate::DitherError;

/// Packing threshold for an already binarized 0/255 map.
const MAP_MIDPOINT: u8 = 127;

/// Convert one RGBA frame for a display mode.
///
/// `pixels` is row-major and must hold exactly `width * height` entries;
/// resizing to the panel is the caller's job.
///
/// # Errors
///
/// - [`DitherError::DimensionMismatch`] if `pixels` has the wrong length
/// - [`DitherError::UnknownDither`] for an unrecognized gray method name
/// - whatever [`Target::validate`] reports for the target
///
/// Palette targets never fail on the dither name: unknown kernels fall back
/// to Floyd-Steinberg.
///
/// # Example
///
/// ```
/// use eink_pack::{convert, ConvertParams, Rgba, Target};
///
/// let pixels = [100u8, 200, 50, 150].map(Rgba::gray);
/// let image = convert(&pixels, 2, 2, &Target::Mono, "bw", &ConvertParams::default()).unwrap();
/// assert_eq!(image.buffer(), &[0x80, 0x80]);
/// assert_eq!(image.meta().bpp, 1);
/// ```
pub fn convert(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    target: &Target,
    mode_id: &str,
    params: &ConvertParams,
) -> Result<PackedImage, DitherError> {
    if width.checked_mul(height) != Some(pixels.len()) {
        return Err(DitherError::DimensionMismatch {
            width,
            height,
            len: pixels.len(),
        });
    }
    target.validate()?;

    let (buffer, preview) = match target {
        Target::Mono => convert_mono(pixels, width, height, params)?,
        Target::Gray { levels, bpp } => {
            convert_gray(pixels, width, height, *levels, *bpp, params)?
        }
        Target::Palette {
            palette, packing, ..
        } => convert_palette(pixels, width, height, palette, *packing, params),
    };

    debug!(
        mode = mode_id,
        width,
        height,
        bpp = target.bpp(),
        dither = params.dither_name(),
        invert = params.invert,
        bytes = buffer.len(),
        "converted frame"
    );

    let meta = ConvertMeta {
        width,
        height,
        bpp: target.bpp(),
        mode_id: mode_id.to_string(),
    };
    Ok(PackedImage::new(buffer, preview, meta))
}

fn gray_input(pixels: &[Rgba], invert: bool) -> Vec<u8> {
    let mut gray = to_grayscale(pixels);
    if invert {
        invert_gray(&mut gray);
    }
    gray
}

fn gray_preview(gray: &[u8]) -> Vec<Rgba> {
    gray.iter().copied().map(Rgba::gray).collect()
}

fn convert_mono(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    params: &ConvertParams,
) -> Result<(Vec<u8>, Vec<Rgba>), DitherError> {
    let method: GrayDither = params.dither_name().parse()?;
    let gray = gray_input(pixels, params.invert);
    let map = dither_mono(&gray, width, height, method, params.threshold);
    // the map is already 0/255; invert already happened on the intensities
    let buffer = pack_1bpp(&map, width, height, MAP_MIDPOINT, false);
    Ok((buffer, gray_preview(&map)))
}

fn convert_gray(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    levels: Levels,
    bpp: u8,
    params: &ConvertParams,
) -> Result<(Vec<u8>, Vec<Rgba>), DitherError> {
    let method: GrayDither = params.dither_name().parse()?;
    let gray = gray_input(pixels, params.invert);
    let indices = dither_levels(&gray, width, height, levels, method);
    let quantized = levels.indices_to_gray(&indices);

    let buffer = match bpp {
        3 => pack_3bpp(&indices, width, height),
        _ => pack_4bpp(&quantized, width, height, false),
    };
    Ok((buffer, gray_preview(&quantized)))
}

fn convert_palette(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    palette: &Palette,
    packing: u8,
    params: &ConvertParams,
) -> (Vec<u8>, Vec<Rgba>) {
    let kernel = color_dither_from_name(params.dither.as_deref());
    let indices = dither_to_palette(pixels, width, height, palette, kernel, params.invert);

    let buffer = match packing {
        2 => pack_2bpp(&indices, width, height),
        _ => pack_3bpp(&indices, width, height),
    };
    let preview = indices
        .iter()
        .map(|&i| palette.color(i as usize))
        .collect();
    (buffer, preview)
}

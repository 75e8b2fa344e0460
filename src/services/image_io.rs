//! PNG input and output around the conversion core.
//!
//! Any PNG the `png` crate can read is accepted; palette, gray and 16-bit
//! images are expanded to 8-bit RGBA before conversion. Previews are written
//! as 8-bit RGBA and re-compressed with oxipng.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use eink_pack::{PackedImage, Rgba};

use crate::error::ImageError;

/// An RGBA frame read from disk
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba>,
}

impl DecodedImage {
    /// Fail unless the frame is exactly `width` x `height`.
    ///
    /// Resizing to the panel happens before this tool sees the image.
    pub fn check_size(&self, width: u32, height: u32) -> Result<(), ImageError> {
        if self.width == width && self.height == height {
            Ok(())
        } else {
            Err(ImageError::SizeMismatch {
                width: self.width,
                height: self.height,
                expected_width: width,
                expected_height: height,
            })
        }
    }
}

/// Decode a PNG into RGBA pixels
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::UnsupportedFormat(format!(
            "{:?} at {:?} after expansion",
            info.color_type, info.bit_depth
        )));
    }

    let pixels: Vec<Rgba> = match info.color_type {
        png::ColorType::Rgba => data.chunks_exact(4).map(|p| Rgba::new(p[0], p[1], p[2], p[3])).collect(),
        png::ColorType::Rgb => data.chunks_exact(3).map(|p| Rgba::rgb(p[0], p[1], p[2])).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| Rgba::new(p[0], p[0], p[0], p[1]))
            .collect(),
        png::ColorType::Grayscale => data.iter().copied().map(Rgba::gray).collect(),
        png::ColorType::Indexed => {
            return Err(ImageError::UnsupportedFormat(
                "indexed image was not expanded".to_string(),
            ))
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        "Decoded PNG"
    );

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        pixels,
    })
}

/// Read and decode a PNG file
pub fn read_png(path: &Path) -> Result<DecodedImage, ImageError> {
    let bytes = fs::read(path)?;
    decode_png(&bytes)
}

/// Encode RGBA pixels as an 8-bit RGBA PNG
pub fn encode_rgba_png(pixels: &[Rgba], width: u32, height: u32) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&Rgba::to_interleaved(pixels))?;
    }
    Ok(buf.into_inner())
}

/// Encode a conversion preview as PNG (re-compressed with oxipng)
pub fn encode_preview_png(image: &PackedImage) -> Result<Vec<u8>, ImageError> {
    let meta = image.meta();
    let png_bytes = encode_rgba_png(image.preview(), meta.width as u32, meta.height as u32)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

/// Write a conversion preview to a PNG file
pub fn write_preview(path: &Path, image: &PackedImage) -> Result<usize, ImageError> {
    let bytes = encode_preview_png(image)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eink_pack::{convert, ConvertParams, Target};

    fn encode(color: png::ColorType, depth: png::BitDepth, w: u32, h: u32, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, w, h);
            encoder.set_color(color);
            encoder.set_depth(depth);
            if color == png::ColorType::Indexed {
                encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_rgba_roundtrip() {
        let pixels = vec![Rgba::new(1, 2, 3, 4), Rgba::rgb(200, 100, 50)];
        let bytes = encode_rgba_png(&pixels, 2, 1).unwrap();
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded.width, 2);
        assert_eq!(decoded.height, 1);
        assert_eq!(decoded.pixels, pixels);
    }

    #[test]
    fn test_gray_expands() {
        let bytes = encode(png::ColorType::Grayscale, png::BitDepth::Eight, 2, 1, &[10, 250]);
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded.pixels, vec![Rgba::gray(10), Rgba::gray(250)]);
    }

    #[test]
    fn test_sixteen_bit_is_stripped() {
        let bytes = encode(png::ColorType::Grayscale, png::BitDepth::Sixteen, 1, 1, &[0xAB, 0xCD]);
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded.pixels, vec![Rgba::gray(0xAB)]);
    }

    #[test]
    fn test_indexed_expands() {
        // 1-bit indices 0, 1 -> red, blue
        let bytes = encode(png::ColorType::Indexed, png::BitDepth::One, 2, 1, &[0b0100_0000]);
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded.pixels, vec![Rgba::rgb(255, 0, 0), Rgba::rgb(0, 0, 255)]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        assert!(matches!(decode_png(b"not a png"), Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_check_size() {
        let image = DecodedImage {
            width: 4,
            height: 2,
            pixels: vec![Rgba::gray(0); 8],
        };
        assert!(image.check_size(4, 2).is_ok());
        assert!(matches!(
            image.check_size(2, 4),
            Err(ImageError::SizeMismatch {
                expected_width: 2,
                expected_height: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_preview_png_decodes_to_preview() {
        let pixels = vec![Rgba::gray(30), Rgba::gray(220), Rgba::gray(90), Rgba::gray(160)];
        let image = convert(&pixels, 2, 2, &Target::Mono, "bw", &ConvertParams::default()).unwrap();
        let bytes = encode_preview_png(&image).unwrap();
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded.pixels, image.preview());
    }
}

//! PackedImage struct and its metadata.

use serde::Serialize;

use crate::color::Rgba;

/// Dimensions and format of a packed buffer, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertMeta {
    pub width: usize,
    pub height: usize,
    pub bpp: u8,
    pub mode_id: String,
}

/// Result of one conversion.
///
/// - [`buffer()`](PackedImage::buffer): bytes in the controller's layout
/// - [`preview()`](PackedImage::preview): one pixel per source pixel showing
///   the quantized value (gray level or palette color, alpha 255)
/// - [`meta()`](PackedImage::meta): width, height, bpp and mode id
#[derive(Debug, Clone, PartialEq)]
pub struct PackedImage {
    buffer: Vec<u8>,
    preview: Vec<Rgba>,
    meta: ConvertMeta,
}

impl PackedImage {
    pub fn new(buffer: Vec<u8>, preview: Vec<Rgba>, meta: ConvertMeta) -> Self {
        debug_assert_eq!(
            preview.len(),
            meta.width * meta.height,
            "preview length must match {}x{}",
            meta.width,
            meta.height,
        );
        Self {
            buffer,
            preview,
            meta,
        }
    }

    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[inline]
    pub fn preview(&self) -> &[Rgba] {
        &self.preview
    }

    #[inline]
    pub fn meta(&self) -> &ConvertMeta {
        &self.meta
    }

    /// Preview as interleaved RGBA bytes, ready for an image encoder.
    pub fn preview_rgba_bytes(&self) -> Vec<u8> {
        Rgba::to_interleaved(&self.preview)
    }

    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }
}

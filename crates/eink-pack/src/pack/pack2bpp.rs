//! 2 bpp: four 2-bit indices per byte, MSB first.

/// `ceil(width / 4)`.
#[inline]
pub(crate) fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(4)
}

/// Pack palette indices; only the low two bits of each index are kept.
pub fn pack_2bpp(indices: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes_per_row(width) * height);
    if width == 0 {
        return out;
    }
    for row in indices.chunks(width).take(height) {
        out.extend(row.chunks(4).map(|group| {
            let byte = group.iter().fold(0u8, |acc, &v| (acc << 2) | (v & 0x03));
            byte << (2 * (4 - group.len()))
        }));
    }
    out
}

/// Expand a 2 bpp buffer back to indices.
pub fn unpack_2bpp(buf: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = bytes_per_row(width);
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = buf[y * stride + x / 4];
            out.push((byte >> (6 - 2 * (x % 4))) & 0x03);
        }
    }
    out
}

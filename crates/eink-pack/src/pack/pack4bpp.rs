//! 4 bpp: top nibble of each 8-bit sample, two per byte, high nibble first.

/// `ceil(width / 2)`.
#[inline]
pub(crate) fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(2)
}

/// Pack 8-bit gray samples, keeping `v >> 4`. With `invert` the nibble is
/// stored as `15 - (v >> 4)`.
pub fn pack_4bpp(gray: &[u8], width: usize, height: usize, invert: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes_per_row(width) * height);
    if width == 0 {
        return out;
    }
    let nibble = |v: u8| {
        let n = (v >> 4) & 0x0F;
        if invert {
            0x0F - n
        } else {
            n
        }
    };
    for row in gray.chunks(width).take(height) {
        out.extend(row.chunks(2).map(|pair| match *pair {
            [hi, lo] => (nibble(hi) << 4) | nibble(lo),
            [hi] => nibble(hi) << 4,
            _ => 0,
        }));
    }
    out
}

/// Expand a 4 bpp buffer back to nibble values (0..=15).
pub fn unpack_4bpp(buf: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = bytes_per_row(width);
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = buf[y * stride + x / 2];
            out.push(if x % 2 == 0 { byte >> 4 } else { byte & 0x0F });
        }
    }
    out
}

//! 3 bpp in nibble slots: each 3-bit value is stored as `v << 1` in a
//! 4-bit nibble, two pixels per byte, high nibble first.

/// `ceil(width / 2)`: one nibble per pixel, not `ceil(3 * width / 8)`.
#[inline]
pub(crate) fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(2)
}

/// Pack 3-bit indices (`v & 0x07`) into nibble slots.
///
/// ```
/// use eink_pack::pack::pack_3bpp;
///
/// assert_eq!(pack_3bpp(&[5, 2], 2, 1), vec![0xA4]);
/// ```
pub fn pack_3bpp(indices: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes_per_row(width) * height);
    if width == 0 {
        return out;
    }
    let nibble = |v: u8| ((v & 0x07) << 1) & 0x0F;
    for row in indices.chunks(width).take(height) {
        out.extend(row.chunks(2).map(|pair| match *pair {
            [hi, lo] => (nibble(hi) << 4) | nibble(lo),
            [hi] => nibble(hi) << 4,
            _ => 0,
        }));
    }
    out
}

/// Expand a nibble-slot 3 bpp buffer back to indices.
pub fn unpack_3bpp(buf: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = bytes_per_row(width);
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = buf[y * stride + x / 2];
            let nib = if x % 2 == 0 { byte >> 4 } else { byte & 0x0F };
            out.push((nib >> 1) & 0x07);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_values() {
        assert_eq!(pack_3bpp(&[5, 2], 2, 1), vec![(5 << 1) << 4 | (2 << 1)]);
        assert_eq!(pack_3bpp(&[5, 2], 2, 1), vec![0xA4]);
    }

    #[test]
    fn test_nibble_aligned_not_dense() {
        // 8 pixels take 4 bytes, not 3
        assert_eq!(pack_3bpp(&[7; 8], 8, 1), vec![0xEE; 4]);
    }

    #[test]
    fn test_odd_width_pads_low_nibble() {
        assert_eq!(pack_3bpp(&[1, 2, 3, 4, 5, 6], 3, 2), vec![0x24, 0x60, 0x8A, 0xC0]);
    }

    #[test]
    fn test_masks_to_three_bits() {
        assert_eq!(pack_3bpp(&[0x0F, 0x08], 2, 1), vec![0xE0]);
    }

    #[test]
    fn test_unpack_roundtrip() {
        let idx: Vec<u8> = (0..35).map(|i| (i % 8) as u8).collect();
        let packed = pack_3bpp(&idx, 7, 5);
        assert_eq!(unpack_3bpp(&packed, 7, 5), idx);
    }
}

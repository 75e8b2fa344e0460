//! 1 bpp: one bit per pixel, MSB first, dark = 1.

/// `ceil(width / 8)`.
#[inline]
pub(crate) fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(8)
}

/// Pack a light/dark sample map.
///
/// A sample is dark (bit 1) when it is not above `threshold`; `invert`
/// flips every bit. The last byte of a row is padded with zero low bits.
///
/// ```
/// use eink_pack::pack::pack_1bpp;
///
/// // dark, light / dark, light
/// let packed = pack_1bpp(&[0, 255, 0, 255], 2, 2, 128, false);
/// assert_eq!(packed, vec![0x80, 0x80]);
/// ```
pub fn pack_1bpp(samples: &[u8], width: usize, height: usize, threshold: u8, invert: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes_per_row(width) * height);
    if width == 0 {
        return out;
    }
    for row in samples.chunks(width).take(height) {
        out.extend(row.chunks(8).map(|group| {
            let byte = group.iter().fold(0u8, |acc, &s| {
                let bit = u8::from(s <= threshold) ^ u8::from(invert);
                (acc << 1) | bit
            });
            byte << (8 - group.len())
        }));
    }
    out
}

/// Expand a 1 bpp buffer back to a light/dark map (255 = light, 0 = dark).
pub fn unpack_1bpp(buf: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = bytes_per_row(width);
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = buf[y * stride + x / 8];
            let bit = (byte >> (7 - x % 8)) & 1;
            out.push(if bit == 1 { 0 } else { 255 });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_scenario() {
        // thresholded [dark, light, dark, light] at width 2
        let packed = pack_1bpp(&[0, 255, 0, 255], 2, 2, 128, false);
        assert_eq!(packed, vec![0b1000_0000, 0b1000_0000]);
    }

    #[test]
    fn test_raw_intensities_use_threshold() {
        let packed = pack_1bpp(&[100, 200, 50, 150], 2, 2, 128, false);
        assert_eq!(packed, vec![0x80, 0x80]);
    }

    #[test]
    fn test_msb_first_full_byte() {
        let samples = [0, 255, 255, 255, 255, 255, 255, 0];
        assert_eq!(pack_1bpp(&samples, 8, 1, 128, false), vec![0b1000_0001]);
    }

    #[test]
    fn test_row_padding_is_trailing() {
        // 9 wide: second byte holds one pixel in its top bit
        let mut samples = vec![255u8; 18];
        samples[8] = 0;
        samples[17] = 0;
        assert_eq!(
            pack_1bpp(&samples, 9, 2, 128, false),
            vec![0x00, 0x80, 0x00, 0x80]
        );
    }

    #[test]
    fn test_invert_flips_bits_not_padding() {
        let packed = pack_1bpp(&[0, 255, 0], 3, 1, 128, true);
        assert_eq!(packed, vec![0b0100_0000]);
    }

    #[test]
    fn test_unpack_roundtrip() {
        let samples: Vec<u8> = (0..33).map(|i| if i % 3 == 0 { 0 } else { 255 }).collect();
        let packed = pack_1bpp(&samples, 11, 3, 128, false);
        assert_eq!(unpack_1bpp(&packed, 11, 3), samples);
    }
}

//! Bit packers: index/gray grids to controller byte buffers.
//!
//! Each target depth is its own wire format with its own row length and
//! padding rule, so each lives in its own module with its own
//! `bytes_per_row`:
//!
//! | bpp | bytes per row | slot | order |
//! |-----|---------------|------|-------|
//! | 1 | `ceil(w / 8)` | 1 bit, dark = 1 | MSB first |
//! | 2 | `ceil(w / 4)` | 2 bits (`v & 0x03`) | MSB first |
//! | 3 | `ceil(w / 2)` | 4-bit nibble holding `v << 1` | high nibble first |
//! | 4 | `ceil(w / 2)` | top 4 bits of an 8-bit sample | high nibble first |
//!
//! Rows always start on a byte boundary. Unused slots at the end of a row
//! are zero; padding never precedes pixel data.
//!
//! The 3 bpp format wastes a bit per pixel: values sit in nibble-aligned
//! slots rather than a dense 3-bit stream. Controllers expect exactly this.

mod pack1bpp;
mod pack2bpp;
mod pack3bpp;
mod pack4bpp;

pub use pack1bpp::{pack_1bpp, unpack_1bpp};
pub use pack2bpp::{pack_2bpp, unpack_2bpp};
pub use pack3bpp::{pack_3bpp, unpack_3bpp};
pub use pack4bpp::{pack_4bpp, unpack_4bpp};

/// Per-format row length, for callers that only know the depth at runtime.
///
/// Returns `None` for depths without a packer.
pub fn bytes_per_row(width: usize, bpp: u8) -> Option<usize> {
    match bpp {
        1 => Some(pack1bpp::bytes_per_row(width)),
        2 => Some(pack2bpp::bytes_per_row(width)),
        3 => Some(pack3bpp::bytes_per_row(width)),
        4 => Some(pack4bpp::bytes_per_row(width)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_row_table() {
        assert_eq!(bytes_per_row(9, 1), Some(2));
        assert_eq!(bytes_per_row(9, 2), Some(3));
        assert_eq!(bytes_per_row(9, 3), Some(5));
        assert_eq!(bytes_per_row(9, 4), Some(5));
        assert_eq!(bytes_per_row(9, 5), None);
        assert_eq!(bytes_per_row(0, 1), Some(0));
    }

    #[test]
    fn test_buffer_length_for_every_shape() {
        for width in 0..20usize {
            for height in 0..5usize {
                let grid = vec![0u8; width * height];
                let cases = [
                    (1, pack_1bpp(&grid, width, height, 128, false).len()),
                    (2, pack_2bpp(&grid, width, height).len()),
                    (3, pack_3bpp(&grid, width, height).len()),
                    (4, pack_4bpp(&grid, width, height, false).len()),
                ];
                for (bpp, len) in cases {
                    let expected = bytes_per_row(width, bpp).unwrap() * height;
                    assert_eq!(len, expected, "bpp={bpp} {width}x{height}");
                }
            }
        }
    }
}

//! 8-bit RGBA pixel type.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// A single RGBA sample with 8-bit channels.
///
/// This is the only pixel format the core accepts. Alpha is carried through
/// untouched: no path composites it or uses it for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with all three channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Create from an `[R, G, B, A]` byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to an `[R, G, B, A]` byte array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Negate the color channels (`255 - c`), keeping alpha.
    #[inline]
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
    }

    /// Reinterpret an interleaved RGBA byte buffer as pixels.
    ///
    /// Trailing bytes that do not form a whole pixel are ignored.
    pub fn from_interleaved(bytes: &[u8]) -> Vec<Self> {
        bytes
            .chunks_exact(4)
            .map(|c| Self::new(c[0], c[1], c[2], c[3]))
            .collect()
    }

    /// Flatten pixels back into an interleaved RGBA byte buffer.
    pub fn to_interleaved(pixels: &[Self]) -> Vec<u8> {
        pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse `#RGB` or `#RRGGBB` (leading `#` optional) into an opaque color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        match hex.chars().count() {
            3 => {
                let v = u16::from_str_radix(hex, 16)?;
                let nibble = |shift: u16| ((v >> shift) & 0xF) as u8 * 17;
                Ok(Self::rgb(nibble(8), nibble(4), nibble(0)))
            }
            6 => {
                let v = u32::from_str_radix(hex, 16)?;
                Ok(Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

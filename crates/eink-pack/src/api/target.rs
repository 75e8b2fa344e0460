//! Conversion targets: what the index grid means and how it is packed.

use crate::dither::Levels;
use crate::palette::Palette;
use crate::DitherError;

/// Output format of one display mode.
///
/// Build with the constructors, which reject combinations no packer can
/// represent. [`convert`](crate::convert) re-checks with
/// [`validate`](Target::validate), so hand-built variants are safe too.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Black and white, 1 bpp.
    Mono,
    /// Evenly spaced gray levels packed at 3 bpp (level indices) or 4 bpp
    /// (top nibble of the reconstructed gray).
    Gray { levels: Levels, bpp: u8 },
    /// Fixed palette. `packing` selects the packer (2 or 3 bpp); `bpp` is
    /// what the metadata reports, which differs for nibble-per-pixel panels.
    Palette {
        palette: Palette,
        packing: u8,
        bpp: u8,
    },
}

impl Target {
    /// # Errors
    ///
    /// - [`DitherError::InvalidLevels`] if `levels` is outside `2..=256`
    /// - [`DitherError::UnsupportedDepth`] unless `bpp` is 3 or 4
    /// - [`DitherError::TooManyValues`] if the levels exceed `2^bpp`
    pub fn gray(levels: u16, bpp: u8) -> Result<Self, DitherError> {
        let target = Target::Gray {
            levels: Levels::new(levels)?,
            bpp,
        };
        target.validate()?;
        Ok(target)
    }

    /// Palette target reporting its packing depth as its bpp.
    pub fn palette(palette: Palette, packing: u8) -> Result<Self, DitherError> {
        let target = Target::Palette {
            palette,
            packing,
            bpp: packing,
        };
        target.validate()?;
        Ok(target)
    }

    /// White/black/red panels, 2 bpp.
    pub fn white_black_red() -> Self {
        Target::Palette {
            palette: Palette::white_black_red(),
            packing: 2,
            bpp: 2,
        }
    }

    /// Seven-color panels: 3-bit indices in 4-bit nibbles, reported as 4 bpp.
    pub fn seven_color() -> Self {
        Target::Palette {
            palette: Palette::seven_color(),
            packing: 3,
            bpp: 4,
        }
    }

    /// Bits per pixel reported in the conversion metadata.
    pub fn bpp(&self) -> u8 {
        match self {
            Target::Mono => 1,
            Target::Gray { bpp, .. } => *bpp,
            Target::Palette { bpp, .. } => *bpp,
        }
    }

    pub fn is_palette(&self) -> bool {
        matches!(self, Target::Palette { .. })
    }

    /// Check that a packer exists and every value fits its slot.
    pub fn validate(&self) -> Result<(), DitherError> {
        match self {
            Target::Mono => Ok(()),
            Target::Gray { levels, bpp } => {
                if !matches!(bpp, 3 | 4) {
                    return Err(DitherError::UnsupportedDepth {
                        family: "gray",
                        bpp: *bpp,
                    });
                }
                check_fits(levels.get() as usize, *bpp)
            }
            Target::Palette {
                palette, packing, ..
            } => {
                if !matches!(packing, 2 | 3) {
                    return Err(DitherError::UnsupportedDepth {
                        family: "palette",
                        bpp: *packing,
                    });
                }
                check_fits(palette.len(), *packing)
            }
        }
    }
}

fn check_fits(count: usize, bpp: u8) -> Result<(), DitherError> {
    if count > 1 << bpp {
        Err(DitherError::TooManyValues { count, bpp })
    } else {
        Ok(())
    }
}

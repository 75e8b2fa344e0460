//! Unified error type for the eink-pack public API.

use crate::palette::PaletteError;

/// Unified error type for the eink-pack public API.
///
/// # Example
///
/// ```
/// use eink_pack::{DitherError, Levels};
///
/// fn eight_levels() -> Result<Levels, DitherError> {
///     let levels = Levels::new(8)?;
///     Ok(levels)
/// }
/// # assert!(eight_levels().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DitherError {
    /// Level count outside `2..=256`
    #[error("levels must be between 2 and 256, got {0}")]
    InvalidLevels(u16),
    /// Gray dithering name that is not `none`, `simple2d`,
    /// `floyd-steinberg` or `jarvis`
    #[error("unknown gray dithering method: {0:?}")]
    UnknownDither(String),
    /// No packer exists for this depth in this target family
    #[error("no {family} packer for {bpp} bpp")]
    UnsupportedDepth { family: &'static str, bpp: u8 },
    /// More distinct values than the packed slot can hold
    #[error("{count} values do not fit in {bpp} bpp")]
    TooManyValues { count: usize, bpp: u8 },
    /// Pixel slice length disagrees with the declared dimensions
    #[error("expected {width}x{height} pixels, got {len}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// Palette validation error
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DitherError::InvalidLevels(1).to_string(),
            "levels must be between 2 and 256, got 1"
        );
        assert_eq!(
            DitherError::UnknownDither("stucki".into()).to_string(),
            "unknown gray dithering method: \"stucki\""
        );
        assert_eq!(
            DitherError::DimensionMismatch {
                width: 3,
                height: 2,
                len: 5
            }
            .to_string(),
            "expected 3x2 pixels, got 5"
        );
    }

    #[test]
    fn test_from_palette_error() {
        let err: DitherError = PaletteError::EmptyPalette.into();
        assert_eq!(err, DitherError::Palette(PaletteError::EmptyPalette));
        assert_eq!(err.to_string(), "palette error: palette cannot be empty");
    }
}

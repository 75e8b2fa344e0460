//! Error types for palette operations.

use std::num::ParseIntError;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// More entries than an index grid can address
    #[error("palette has {len} colors, at most {max} are supported")]
    TooManyColors { len: usize, max: usize },
    /// Invalid hex color string
    #[error("invalid color at index {index}: {source}")]
    ParseColor {
        index: usize,
        #[source]
        source: ParseColorError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PaletteError::EmptyPalette.to_string(),
            "palette cannot be empty"
        );
        assert_eq!(
            PaletteError::TooManyColors { len: 300, max: 256 }.to_string(),
            "palette has 300 colors, at most 256 are supported"
        );
        assert_eq!(
            PaletteError::ParseColor {
                index: 2,
                source: ParseColorError::InvalidLength
            }
            .to_string(),
            "invalid color at index 2: invalid hex color length (expected 3 or 6 characters)"
        );
    }
}

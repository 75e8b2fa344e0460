use eink_pack::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read board file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse board file: {0}")]
    Parse(String),

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Board {board:?} has no mode {mode:?}")]
    ModeNotFound { board: String, mode: String },

    #[error("Mode {mode:?}: unsupported combination bpp={bpp}, levels={levels:?}")]
    UnsupportedMode {
        mode: String,
        bpp: u8,
        levels: Option<u16>,
    },

    #[error("Mode {mode:?}: {source}")]
    InvalidMode {
        mode: String,
        #[source]
        source: DitherError,
    },
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG format: {0}")]
    UnsupportedFormat(String),

    #[error("Image is {width}x{height}, board expects {expected_width}x{expected_height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Conversion failed: {0}")]
    Dither(#[from] DitherError),

    #[error("Conversion task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_board_not_found() {
        let error = ConfigError::BoardNotFound("Inkplate 10".to_string());
        assert_eq!(error.to_string(), "Board not found: Inkplate 10");
    }

    #[test]
    fn test_config_error_mode_not_found() {
        let error = ConfigError::ModeNotFound {
            board: "T5".to_string(),
            mode: "gray4".to_string(),
        };
        assert_eq!(error.to_string(), "Board \"T5\" has no mode \"gray4\"");
    }

    #[test]
    fn test_config_error_unsupported_mode() {
        let error = ConfigError::UnsupportedMode {
            mode: "odd".to_string(),
            bpp: 5,
            levels: Some(9),
        };
        assert_eq!(
            error.to_string(),
            "Mode \"odd\": unsupported combination bpp=5, levels=Some(9)"
        );
    }

    #[test]
    fn test_config_error_invalid_mode() {
        let error = ConfigError::InvalidMode {
            mode: "g".to_string(),
            source: DitherError::InvalidLevels(1),
        };
        assert_eq!(
            error.to_string(),
            "Mode \"g\": levels must be between 2 and 256, got 1"
        );
    }

    #[test]
    fn test_image_error_size_mismatch() {
        let error = ImageError::SizeMismatch {
            width: 10,
            height: 20,
            expected_width: 296,
            expected_height: 128,
        };
        assert_eq!(
            error.to_string(),
            "Image is 10x20, board expects 296x128"
        );
    }

    #[test]
    fn test_image_error_unsupported_format() {
        let error = ImageError::UnsupportedFormat("16-bit indexed".to_string());
        assert_eq!(error.to_string(), "Unsupported PNG format: 16-bit indexed");
    }

    #[test]
    fn test_convert_error_from_dither_error() {
        let error: ConvertError = DitherError::UnknownDither("x".to_string()).into();
        match error {
            ConvertError::Dither(_) => {}
            _ => panic!("Expected Dither variant"),
        }
    }

    #[test]
    fn test_convert_error_task() {
        let error = ConvertError::Task("cancelled".to_string());
        assert_eq!(error.to_string(), "Conversion task failed: cancelled");
    }
}

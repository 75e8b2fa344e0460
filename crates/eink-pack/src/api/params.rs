//! Per-request conversion parameters.

use serde::{Deserialize, Serialize};

/// Threshold used when a request does not name one.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Knobs a caller sets per conversion.
///
/// `dither` is a name rather than an enum because its meaning depends on
/// the target: gray targets accept `none`, `simple2d`, `floyd-steinberg` and
/// `jarvis`; palette targets accept any kernel name (see
/// [`ColorKernel::from_name`](crate::ColorKernel::from_name)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertParams {
    pub dither: Option<String>,
    /// Mono threshold (0-255). Ignored by gray-level and palette targets.
    pub threshold: u8,
    /// Invert intensities (gray targets) or R, G and B (palette targets)
    /// before quantizing.
    pub invert: bool,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            dither: None,
            threshold: DEFAULT_THRESHOLD,
            invert: false,
        }
    }
}

impl ConvertParams {
    pub fn with_dither(mut self, dither: impl Into<String>) -> Self {
        self.dither = Some(dither.into());
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Dither name with `None` folded to `""`.
    pub(crate) fn dither_name(&self) -> &str {
        self.dither.as_deref().unwrap_or("")
    }
}

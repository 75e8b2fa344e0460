//! Validated gray level count.

use crate::api::DitherError;

/// Number of evenly spaced gray levels, always in `2..=256`.
///
/// A single level cannot represent anything, so `Levels` refuses to exist
/// for `n < 2`; every N-level quantizer takes a `Levels` and never has to
/// check again.
///
/// ```
/// use eink_pack::Levels;
///
/// let levels = Levels::new(16).unwrap();
/// assert_eq!(levels.to_gray(15), 255);
/// assert!(Levels::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels(u16);

impl Levels {
    pub const MIN: u16 = 2;
    pub const MAX: u16 = 256;

    /// # Errors
    ///
    /// [`DitherError::InvalidLevels`] when `n` is outside `2..=256`.
    pub fn new(n: u16) -> Result<Self, DitherError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(DitherError::InvalidLevels(n))
        }
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Highest valid index, `levels - 1`.
    #[inline]
    pub fn max_index(self) -> u8 {
        (self.0 - 1) as u8
    }

    /// Distance between adjacent levels on the 0..=255 scale.
    #[inline]
    pub fn step(self) -> f32 {
        255.0 / (self.0 - 1) as f32
    }

    /// Nearest level index for an intensity, clamped into range.
    #[inline]
    pub fn quantize(self, value: f32) -> u8 {
        let k = (value / self.step()).round();
        k.clamp(0.0, self.max_index() as f32) as u8
    }

    /// Intensity a level index reconstructs to, `round(k * step)`.
    #[inline]
    pub fn to_gray(self, k: u8) -> u8 {
        (k as f64 * 255.0 / (self.0 - 1) as f64).round().min(255.0) as u8
    }

    /// Map a whole index grid back to intensities.
    pub fn indices_to_gray(self, indices: &[u8]) -> Vec<u8> {
        indices.iter().map(|&k| self.to_gray(k)).collect()
    }
}

impl TryFrom<u16> for Levels {
    type Error = DitherError;

    fn try_from(n: u16) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

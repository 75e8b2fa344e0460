//! Palette struct with nearest-color matching.

use super::error::PaletteError;
use crate::color::Rgba;

/// Largest palette an index grid (`u8` per pixel) can address.
pub const MAX_PALETTE_LEN: usize = 256;

/// An ordered, immutable list of target colors.
///
/// Matching uses squared Euclidean distance over R, G and B. Alpha is stored
/// so previews can reproduce the entry exactly, but it never takes part in
/// matching.
///
/// # Example
///
/// ```
/// use eink_pack::{Palette, Rgba};
///
/// let palette = Palette::white_black_red();
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.find_nearest(Rgba::rgb(255, 0, 0)), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if there are more than 256 entries
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(PaletteError::TooManyColors {
                len: colors.len(),
                max: MAX_PALETTE_LEN,
            });
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from `#RRGGBB` / `#RGB` strings.
    ///
    /// ```
    /// use eink_pack::Palette;
    ///
    /// let palette = Palette::from_hex(&["#FFFFFF", "#000000"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.as_ref()
                    .parse::<Rgba>()
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// White, black and red: the three-color panels driven at 2 bpp.
    pub fn white_black_red() -> Self {
        Self {
            colors: vec![Rgba::gray(255), Rgba::gray(0), Rgba::rgb(220, 0, 0)],
        }
    }

    /// The seven-color ACeP panel palette, in controller index order.
    pub fn seven_color() -> Self {
        Self {
            colors: vec![
                Rgba::rgb(0, 0, 0),       // black
                Rgba::rgb(255, 255, 255), // white
                Rgba::rgb(0, 255, 0),     // green
                Rgba::rgb(0, 0, 255),     // blue
                Rgba::rgb(255, 0, 0),     // red
                Rgba::rgb(255, 255, 0),   // yellow
                Rgba::rgb(255, 165, 0),   // orange
            ],
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgba {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Index of the entry closest to `px` by squared RGB distance.
    ///
    /// Ties go to the lowest index: a later entry replaces the current best
    /// only when it is strictly closer.
    #[inline]
    pub fn find_nearest(&self, px: Rgba) -> usize {
        self.find_nearest_f32([px.r as f32, px.g as f32, px.b as f32])
    }

    /// [`find_nearest`](Self::find_nearest) over float channels, as held in
    /// a diffusion working buffer.
    pub fn find_nearest_f32(&self, rgb: [f32; 3]) -> usize {
        let mut best = f32::INFINITY;
        let mut best_idx = 0;
        for (idx, c) in self.colors.iter().enumerate() {
            let dr = rgb[0] - c.r as f32;
            let dg = rgb[1] - c.g as f32;
            let db = rgb[2] - c.b as f32;
            let d = dr * dr + dg * dg + db * db;
            if d < best {
                best = d;
                best_idx = idx;
            }
        }
        best_idx
    }
}

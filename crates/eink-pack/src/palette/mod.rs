//! Fixed target palettes and nearest-color matching.
//!
//! A [`Palette`] is an ordered list of device colors. The position of a color
//! in the list is the value written to the wire, so the order is part of the
//! device contract and never changes after construction.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, MAX_PALETTE_LEN};

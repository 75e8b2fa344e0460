//! Row traversal order for error diffusion.

use super::kernel::Kernel;

/// Order in which the pixels of a row are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    /// Every row left to right.
    Raster,
    /// Even rows left to right, odd rows right to left, with the kernel
    /// mirrored on the reversed rows.
    Serpentine,
}

impl ScanOrder {
    /// The order a kernel asks for.
    pub fn preferred_by(kernel: &Kernel) -> Self {
        if kernel.serpentine {
            ScanOrder::Serpentine
        } else {
            ScanOrder::Raster
        }
    }

    /// Whether row `y` is traversed right to left.
    #[inline]
    pub fn is_reversed(self, y: usize) -> bool {
        matches!(self, ScanOrder::Serpentine) && y % 2 == 1
    }

    /// Column indices of row `y` in visiting order.
    pub fn columns(self, y: usize, width: usize) -> impl Iterator<Item = usize> {
        let reversed = self.is_reversed(y);
        (0..width).map(move |i| if reversed { width - 1 - i } else { i })
    }

    /// Effective column offset of a tap on row `y`.
    #[inline]
    pub fn mirror(self, y: usize, dx: i32) -> i32 {
        if self.is_reversed(y) {
            -dx
        } else {
            dx
        }
    }
}

//! Float working buffer and the shared diffusion loop.
//!
//! A [`WorkingBuffer`] is created by one conversion, mutated while that
//! conversion scans the grid, and dropped when it returns. Causality comes
//! purely from the scan order: taps only point at pixels the scan has not
//! visited yet, so nothing needs to be marked as finalized.

use super::kernel::Kernel;
use super::scan::ScanOrder;
use crate::color::Rgba;

/// Full-frame float grid with `N` channels per pixel.
#[derive(Debug)]
pub(crate) struct WorkingBuffer<const N: usize> {
    cells: Vec<[f32; N]>,
    width: usize,
    height: usize,
}

impl WorkingBuffer<1> {
    /// Seed a single-channel buffer from intensities.
    pub(crate) fn from_gray(gray: &[u8], width: usize, height: usize) -> Self {
        Self {
            cells: gray.iter().map(|&v| [v as f32]).collect(),
            width,
            height,
        }
    }
}

impl WorkingBuffer<3> {
    /// Seed an RGB buffer from pixels, optionally negating the color
    /// channels first. Alpha is not carried.
    pub(crate) fn from_rgba(pixels: &[Rgba], width: usize, height: usize, invert: bool) -> Self {
        Self {
            cells: pixels
                .iter()
                .map(|&px| {
                    let px = if invert { px.inverted() } else { px };
                    [px.r as f32, px.g as f32, px.b as f32]
                })
                .collect(),
            width,
            height,
        }
    }
}

impl<const N: usize> WorkingBuffer<N> {
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> [f32; N] {
        self.cells[idx]
    }

    /// Add `error * share` to the pixel at `(x + dx, y + dy)`.
    ///
    /// Out-of-bounds targets are dropped: the error is lost, not moved
    /// elsewhere. Every written channel is clamped to 0..=255.
    #[inline]
    pub(crate) fn diffuse(&mut self, x: usize, y: usize, dx: i32, dy: i32, error: [f32; N], share: f32) {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
            return;
        }
        let cell = &mut self.cells[ny as usize * self.width + nx as usize];
        for c in 0..N {
            cell[c] = (cell[c] + error[c] * share).clamp(0.0, 255.0);
        }
    }
}

/// Run one error diffusion pass over `buf`.
///
/// `quantize` is called once per pixel in scan order with the pixel's
/// row-major index and its current (error-adjusted) value. It records the
/// output for that pixel and returns the quantization error, which is then
/// spread over the kernel's taps.
pub(crate) fn run_diffusion<const N: usize, F>(
    buf: &mut WorkingBuffer<N>,
    kernel: &Kernel,
    order: ScanOrder,
    mut quantize: F,
) where
    F: FnMut(usize, [f32; N]) -> [f32; N],
{
    let (width, height) = (buf.width, buf.height);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in order.columns(y, width) {
            let idx = y * width + x;
            let error = quantize(idx, buf.get(idx));
            for tap in kernel.taps {
                let dx = order.mirror(y, tap.dx);
                buf.diffuse(x, y, dx, tap.dy, error, tap.weight as f32 / divisor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::kernel::{Tap, FLOYD_STEINBERG};

    #[test]
    fn test_diffuse_clamps_high_and_low() {
        let mut buf = WorkingBuffer::from_gray(&[250, 5], 2, 1);
        buf.diffuse(1, 0, -1, 0, [100.0], 1.0);
        buf.diffuse(0, 0, 1, 0, [-100.0], 1.0);
        assert_eq!(buf.get(0), [255.0]);
        assert_eq!(buf.get(1), [0.0]);
    }

    #[test]
    fn test_diffuse_drops_out_of_bounds() {
        let mut buf = WorkingBuffer::from_gray(&[10, 20, 30, 40], 2, 2);
        buf.diffuse(1, 1, 1, 0, [50.0], 1.0);
        buf.diffuse(0, 1, -1, 0, [50.0], 1.0);
        buf.diffuse(0, 1, 0, 1, [50.0], 1.0);
        let values: Vec<f32> = (0..4).map(|i| buf.get(i)[0]).collect();
        assert_eq!(values, vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_rgb_seed_inverts_color_channels() {
        let buf = WorkingBuffer::from_rgba(&[Rgba::new(0, 100, 255, 7)], 1, 1, true);
        assert_eq!(buf.get(0), [255.0, 155.0, 0.0]);
    }

    #[test]
    fn test_run_diffusion_visits_every_pixel_once() {
        let mut buf = WorkingBuffer::from_gray(&[0; 12], 4, 3);
        let mut seen = Vec::new();
        run_diffusion(&mut buf, &FLOYD_STEINBERG, ScanOrder::Serpentine, |idx, _| {
            seen.push(idx);
            [0.0]
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 7, 6, 5, 4, 8, 9, 10, 11]);
    }

    #[test]
    fn test_run_diffusion_mirrors_on_reversed_rows() {
        const RIGHT: Kernel = Kernel {
            name: "right",
            taps: &[Tap::new(1, 0, 1)],
            divisor: 1,
            serpentine: true,
        };
        // Error of 10 from the first visited pixel of row 1 (x = 2) must
        // land on x = 1, not fall off the right edge.
        let mut buf = WorkingBuffer::from_gray(&[0; 6], 3, 2);
        let mut first = true;
        run_diffusion(&mut buf, &RIGHT, ScanOrder::Serpentine, |idx, v| {
            if idx == 5 && first {
                first = false;
                return [10.0];
            }
            if idx == 4 {
                assert_eq!(v, [10.0]);
            }
            [0.0]
        });
        assert!(!first, "pixel (2, 1) was never visited");
    }
}

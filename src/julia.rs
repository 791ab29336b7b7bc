//! Julia set rasterization.

use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{mandelbrot::escape_count, pixel::Complex, screen};

/// Iteration budget per pixel.
pub const RENDER_ITERATIONS: u32 = 100;

/// Lower edge of the sampled square, on both axes.
pub const VIEW_MIN: f32 = -1.6;
pub const VIEW_MAX: f32 = 1.6;

/// Per-pixel escape counts for one image, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Iterations {
    pub size: screen::Size,
    pub counts: Vec<u32>,
    /// Largest entry of `counts`, `0` for an empty buffer.
    pub max: u32,
}

impl Iterations {
    pub fn new(size: screen::Size, counts: Vec<u32>) -> Self {
        debug_assert_eq!(counts.len(), size.pixel_count());
        let max = counts.iter().copied().max().unwrap_or(0);
        Self { size, counts, max }
    }
}

/// Point of the complex plane sampled by pixel `(x, y)`.
///
/// Both axes start at [`VIEW_MIN`]; `y` grows downwards.
pub fn pixel_to_point(size: screen::Size, x: u32, y: u32) -> Complex {
    let dx = (VIEW_MAX - VIEW_MIN) / size.width as f32;
    let dy = (VIEW_MAX - VIEW_MIN) / size.height as f32;
    Complex::new(x as f32 * dx + VIEW_MIN, y as f32 * dy + VIEW_MIN)
}

/// Escape counts of the Julia set for `z ↦ z² + c` over the view square.
///
/// Rows are computed in parallel.
pub fn rasterize(c: Complex, size: screen::Size) -> Iterations {
    trace!("begin rasterize");

    let mut counts = vec![0u32; size.pixel_count()];
    if size.width > 0 {
        counts
            .par_chunks_mut(size.width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, count) in row.iter_mut().enumerate() {
                    let z = pixel_to_point(size, x as u32, y as u32);
                    *count = escape_count(z, c, RENDER_ITERATIONS);
                }
            });
    }

    let iterations = Iterations::new(size, counts);
    debug!("rasterized {:?} with max iteration count {}", size, iterations.max);

    trace!("end rasterize");
    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_pixel_is_view_min() {
        let size = screen::Size::new(64, 32);
        assert_eq!(pixel_to_point(size, 0, 0), Complex::new(VIEW_MIN, VIEW_MIN));
    }

    #[test]
    fn centre_pixel_is_origin() {
        let size = screen::Size::new(8, 8);
        let point = pixel_to_point(size, 4, 4);
        assert!(point.real.abs() < 1e-6);
        assert!(point.imaginary.abs() < 1e-6);
    }

    #[test]
    fn zero_coefficient_fills_unit_disc() {
        // For c = 0 the filled Julia set is the closed unit disc.
        let size = screen::Size::new(16, 16);
        let iterations = rasterize(Complex::ZERO, size);
        assert_eq!(iterations.counts.len(), 256);
        assert_eq!(iterations.max, RENDER_ITERATIONS);
        // Pixel (8, 8) samples the origin.
        assert_eq!(iterations.counts[8 * 16 + 8], RENDER_ITERATIONS);
        // The corner (-1.6, -1.6) lies outside |z| = 2 and escapes immediately.
        assert_eq!(iterations.counts[0], 0);
    }

    #[test]
    fn counts_never_exceed_budget() {
        let iterations = rasterize(Complex::new(-0.8, 0.156), screen::Size::new(20, 10));
        assert!(iterations.counts.iter().all(|count| *count <= RENDER_ITERATIONS));
        assert_eq!(iterations.max, *iterations.counts.iter().max().unwrap());
    }

    #[test]
    fn rasterize_is_deterministic() {
        let c = Complex::new(-0.4, 0.6);
        let size = screen::Size::new(33, 17);
        assert_eq!(rasterize(c, size), rasterize(c, size));
    }

    #[test]
    fn empty_size() {
        let iterations = rasterize(Complex::ZERO, screen::Size::new(0, 5));
        assert!(iterations.counts.is_empty());
        assert_eq!(iterations.max, 0);
    }
}

//! Coarse Mandelbrot probes used to pick an interesting Julia coefficient.

use crate::pixel::Complex;

/// Iteration budget for [`is_on_set`]. Low on purpose: it's only a probe.
pub const PROBE_ITERATIONS: u32 = 25;

/// Number of halvings performed by [`find_boundary_imag`].
pub const BISECTION_STEPS: u32 = 5;

/// Squared escape radius (`|z| > 2`).
pub const ESCAPE_RADIUS_SQR: f32 = 4.0;

/// Counts iterations of `z ↦ z² + c`, starting at `start`, until `|z| > 2` or `limit` is reached.
pub fn escape_count(start: Complex, c: Complex, limit: u32) -> u32 {
    let mut z = start;
    let mut iteration_count = 0;
    while iteration_count < limit && z.norm_sqr() <= ESCAPE_RADIUS_SQR {
        z = z.square_add(c);
        iteration_count += 1;
    }
    iteration_count
}

/// Whether `c` survives [`PROBE_ITERATIONS`] iterations starting from the origin.
pub fn is_on_set(c: Complex) -> bool {
    escape_count(Complex::ZERO, c, PROBE_ITERATIONS) == PROBE_ITERATIONS
}

/**
Bisect the imaginary axis in `[0, 1]` at a fixed `real` coordinate, looking for
the edge of the Mandelbrot set.

Only [`BISECTION_STEPS`] steps are taken, so the result is a nearby value rather
than the true edge. When a probe lands inside the set the search moves up,
otherwise the probe is remembered and the search moves down.

If no probe ever landed outside the set, the final midpoint is returned.
*/
pub fn find_boundary_imag(real: f32) -> f32 {
    let mut low = 0.0_f32;
    let mut high = 1.0_f32;
    let mut outside = 1.0_f32;
    let mut mid = 0.5_f32;

    for _ in 0..BISECTION_STEPS {
        mid = (low + high) / 2.0;
        if is_on_set(Complex::new(real, mid)) {
            low = mid;
        } else {
            outside = mid;
            high = mid;
        }
    }

    if outside < 1.0 {
        outside
    } else {
        mid
    }
}

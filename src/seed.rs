//! Turning a 32-bit seed into Julia set parameters.
//!
//! Overlapping bit-fields of the seed are read as independent fractions:
//!
//! | bits       | use                                  |
//! |------------|--------------------------------------|
//! | `[0, 28)`  | real part of the coefficient         |
//! | `[0, 16)`  | perturbation of the imaginary part   |
//! | `[8, 24)`  | hue offset                           |
//! | `1`        | sign of the imaginary part           |

use log::debug;

use crate::{mandelbrot, pixel::Complex};

pub const REAL_MIN: f32 = -1.4;
pub const REAL_MAX: f32 = 0.5;

const REAL_BITS: u32 = 28;
const PERTURBATION_SCALE: f32 = 0.205;
const PERTURBATION_SHIFT: f32 = 0.05;
const SIGN_BIT: u32 = 1 << 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub c: Complex,
    /// Degrees, in `[0, 360)`.
    pub hue_offset: f32,
}

/// `bits / 2^width`, a fraction in `[0, 1)`.
fn fraction(bits: u32, width: u32) -> f64 {
    bits as f64 / (1u64 << width) as f64
}

fn field(seed: u32, shift: u32, width: u32) -> u32 {
    (seed >> shift) & ((1u32 << width) - 1)
}

impl Coefficients {
    pub fn from_seed(seed: u32) -> Self {
        // Rounding to f32 can land on REAL_MAX itself; keep the range half-open.
        let below_max = f32::from_bits(REAL_MAX.to_bits() - 1);
        let real = ((fraction(field(seed, 0, REAL_BITS), REAL_BITS)
            * (REAL_MAX - REAL_MIN) as f64
            + REAL_MIN as f64) as f32)
            .min(below_max);
        let perturbation = fraction(field(seed, 0, 16), 16) as f32;
        let hue_offset = (fraction(field(seed, 8, 16), 16) * 360.0) as f32;

        let mut imaginary = mandelbrot::find_boundary_imag(real)
            + (perturbation * PERTURBATION_SCALE - PERTURBATION_SHIFT);
        if seed & SIGN_BIT != 0 {
            imaginary = -imaginary;
        }

        let coefficients = Self {
            c: Complex::new(real, imaginary),
            hue_offset,
        };
        debug!("seed {:#010x} -> {:?}", seed, coefficients);
        coefficients
    }
}

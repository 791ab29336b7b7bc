//! Deterministic Julia set images from a 32-bit seed.
//!
//! The seed picks a coefficient `c` near the edge of the Mandelbrot set, the
//! Julia set of `z ↦ z² + c` is rasterized over a fixed square of the complex
//! plane, and escape counts are mapped to colours.
//!
//! ```no_run
//! use wgpu_julia::{synthesize, ColourMode, Params};
//!
//! let params = Params::builder(0xC0FFEE)
//!     .with_size(640, 480)
//!     .with_colour_mode(ColourMode::Greyscale)
//!     .build()
//!     .unwrap();
//! let image = synthesize(&params);
//! assert_eq!(image.as_bytes().len(), 640 * 480 * 4);
//! ```

pub mod colour;
pub mod error;
pub mod image;
pub mod julia;
pub mod mandelbrot;
pub mod params;
pub mod pixel;
pub mod screen;
pub mod seed;
pub mod synth;

pub use crate::{
    colour::ColourMode,
    error::{Error, Result},
    image::{Image, PixelFormat, Sink},
    params::Params,
    synth::{synthesize, synthesize_into},
};

//! Colouring algorithms.

use std::f32::consts::TAU;

use log::trace;
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::{julia::Iterations, pixel::Rgba};

/// Lowest normalized value, so the background never goes fully dark.
pub const FLOOR: f32 = 0.015;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColourMode {
    #[default]
    Colour,
    Greyscale,
}

/// `count / max`, floored at [`FLOOR`]. An all-zero image (`max == 0`) normalizes to the floor.
pub fn normalize(count: u32, max: u32) -> f32 {
    let value = if max == 0 {
        0.0
    } else {
        count as f32 / max as f32
    };
    value.max(FLOOR)
}

/// Hue in degrees for a normalized value.
///
/// Wraps with a single subtraction, so `offset` must be in `[0, 360)`.
pub fn hue(value: f32, offset: f32) -> f32 {
    let hue = 360.0 * (1.0 - value.sqrt()) + offset;
    if hue >= 360.0 {
        hue - 360.0
    } else {
        hue
    }
}

/// `tanh(2πv)`: saturates well before `v = 1`, so colour concentrates near the set's edge.
pub fn saturation(value: f32) -> f32 {
    (TAU * value).tanh()
}

fn to_byte(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// HSV to an opaque colour. `hue` is in degrees, `saturation` and `value` in `[0, 1]`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgba {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 % 6 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    Rgba::opaque(to_byte(r + m), to_byte(g + m), to_byte(b + m))
}

/// Map escape counts to colours.
pub fn colourize(iterations: &Iterations, hue_offset: f32) -> Vec<Rgba> {
    trace!("begin colourize");
    debug_assert!((0.0..360.0).contains(&hue_offset));

    let mut pixels = vec![Rgba::opaque(0, 0, 0); iterations.counts.len()];
    pixels
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, pixel)| {
            let value = normalize(iterations.counts[index], iterations.max);
            *pixel = hsv_to_rgb(hue(value, hue_offset), saturation(value), 1.0);
        });

    trace!("end colourize");
    pixels
}

/// Rec. 601 luma.
pub fn luma(pixel: Rgba) -> u8 {
    to_byte(
        (0.299 * pixel.r as f32 + 0.587 * pixel.g as f32 + 0.114 * pixel.b as f32) / 255.0,
    )
}

/// Replace every colour with its grey equivalent, keeping alpha.
pub fn greyscale(pixels: &mut [Rgba]) {
    trace!("begin greyscale");

    pixels.par_iter_mut().for_each(|pixel| {
        let grey = luma(*pixel);
        *pixel = Rgba {
            r: grey,
            g: grey,
            b: grey,
            a: pixel.a,
        };
    });

    trace!("end greyscale");
}

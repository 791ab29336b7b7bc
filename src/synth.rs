//! The full pipeline, from seed to image.

use log::trace;

use crate::{
    colour::{self, ColourMode},
    image::{Image, Sink},
    julia,
    params::Params,
    seed::Coefficients,
};

/// Synthesize the image described by `params`, in `params.format()`.
///
/// The same `params` always produce the same bytes.
pub fn synthesize(params: &Params) -> Image {
    synthesize_into(params, params.format())
}

/// Like [`synthesize`], handing the finished colours to `sink`.
pub fn synthesize_into<S: Sink>(params: &Params, sink: S) -> S::Output {
    trace!("begin synthesize");

    let coefficients = Coefficients::from_seed(params.seed());
    let iterations = julia::rasterize(coefficients.c, params.size());

    let mut pixels = colour::colourize(&iterations, coefficients.hue_offset);
    drop(iterations);

    if params.colour_mode() == ColourMode::Greyscale {
        colour::greyscale(&mut pixels);
    }

    let output = sink.finish(params.size(), params.resolution(), &pixels);

    trace!("end synthesize");
    output
}

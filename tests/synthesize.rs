use wgpu_julia::{
    colour::{self, FLOOR},
    julia::{self, Iterations, RENDER_ITERATIONS},
    mandelbrot::{find_boundary_imag, is_on_set},
    pixel::{Complex, Rgba},
    screen::Size,
    seed::Coefficients,
    synthesize, synthesize_into, ColourMode, Params, PixelFormat, Sink,
};

const SEEDS: [u32; 6] = [0, 1, 0x1234_5678, 0x8000_0002, 0xDEAD_BEEF, u32::MAX];

fn params(seed: u32, width: u32, height: u32) -> Params {
    Params::builder(seed)
        .with_size(width, height)
        .build()
        .unwrap()
}

#[test]
fn same_inputs_same_bytes() {
    for seed in SEEDS {
        let params = params(seed, 48, 32);
        assert_eq!(synthesize(&params), synthesize(&params));
    }
}

#[test]
fn different_seeds_differ() {
    assert_ne!(
        synthesize(&params(1, 32, 32)).as_bytes(),
        synthesize(&params(0xDEAD_BEEF, 32, 32)).as_bytes()
    );
}

#[test]
fn every_pixel_is_opaque() {
    for seed in SEEDS {
        for format in [PixelFormat::Rgba8, PixelFormat::Bgra8] {
            let params = Params::builder(seed)
                .with_size(40, 24)
                .with_format(format)
                .build()
                .unwrap();
            let image = synthesize(&params);
            assert_eq!(image.as_bytes().len(), 40 * 24 * 4);
            assert!(image
                .as_bytes()
                .chunks_exact(4)
                .all(|pixel| pixel[3] == Rgba::OPAQUE));
        }
    }
}

#[test]
fn greyscale_channels_are_equal() {
    for seed in SEEDS {
        let params = Params::builder(seed)
            .with_size(32, 32)
            .with_colour_mode(ColourMode::Greyscale)
            .build()
            .unwrap();
        let image = synthesize(&params);
        assert!(image
            .pixels()
            .all(|pixel| pixel.r == pixel.g && pixel.g == pixel.b && pixel.a == Rgba::OPAQUE));
    }
}

#[test]
fn greyscale_is_luma_of_colour() {
    let colour = synthesize(&params(0x0BAD_F00D, 16, 16));
    let grey = synthesize(
        &Params::builder(0x0BAD_F00D)
            .with_size(16, 16)
            .with_colour_mode(ColourMode::Greyscale)
            .build()
            .unwrap(),
    );
    for (colour, grey) in colour.pixels().zip(grey.pixels()) {
        assert_eq!(grey.r, colour::luma(colour));
    }
}

#[test]
fn resolution_and_format_are_carried_through() {
    let params = Params::builder(9)
        .with_size(5, 3)
        .with_resolution(2.5)
        .with_format(PixelFormat::Bgra8)
        .build()
        .unwrap();
    let image = synthesize(&params);
    assert_eq!(image.resolution(), 2.5);
    assert_eq!(image.format(), PixelFormat::Bgra8);
    assert_eq!(image.size(), Size::new(5, 3));
}

#[test]
fn pixels_follow_the_pipeline() {
    let params = params(0x00C0_FFEE, 24, 12);
    let coefficients = Coefficients::from_seed(params.seed());
    let iterations = julia::rasterize(coefficients.c, params.size());
    let expected = colour::colourize(&iterations, coefficients.hue_offset);

    let image = synthesize(&params);
    assert_eq!(image.pixels().collect::<Vec<_>>(), expected);
}

#[test]
fn escape_test_reference_points() {
    assert!(is_on_set(Complex::new(0.0, 0.0)));
    assert!(!is_on_set(Complex::new(3.0, 3.0)));
}

#[test]
fn boundary_search_stays_in_domain() {
    let imag = find_boundary_imag(-1.0);
    assert!((0.0..=1.0).contains(&imag));
}

#[test]
fn degenerate_max_is_fully_defined() {
    // Every pixel escaping immediately gives a zero maximum.
    let iterations = Iterations::new(Size::new(4, 4), vec![0; 16]);
    let pixels = colour::colourize(&iterations, 0.0);
    let floor = colour::hsv_to_rgb(colour::hue(FLOOR, 0.0), colour::saturation(FLOOR), 1.0);
    assert!(pixels.iter().all(|pixel| *pixel == floor));
    assert!(pixels.iter().all(|pixel| pixel.a == Rgba::OPAQUE));
}

#[test]
fn single_pixel_image_has_zero_max() {
    // A 1x1 image samples only (-1.6, -1.6), which is outside |z| = 2.
    for seed in SEEDS {
        let coefficients = Coefficients::from_seed(seed);
        assert_eq!(julia::rasterize(coefficients.c, Size::new(1, 1)).max, 0);

        let image = synthesize(&params(seed, 1, 1));
        let floor = colour::hsv_to_rgb(
            colour::hue(FLOOR, coefficients.hue_offset),
            colour::saturation(FLOOR),
            1.0,
        );
        let pixels: Vec<Rgba> = image.pixels().collect();
        assert_eq!(pixels, vec![floor]);
        assert_eq!(pixels[0].a, Rgba::OPAQUE);
    }
}

#[test]
fn centre_pixel_never_escapes_immediately() {
    // With an odd size the centre pixel samples a point with |z| < 2, so the maximum is positive.
    for seed in SEEDS {
        let coefficients = Coefficients::from_seed(seed);
        let iterations = julia::rasterize(coefficients.c, Size::new(9, 9));
        assert!(iterations.max > 0);
        assert!(iterations.max <= RENDER_ITERATIONS);
    }
}

#[test]
fn saturation_reference_values() {
    assert!((colour::saturation(0.015) - 0.094).abs() < 1e-3);
    assert!((colour::saturation(1.0) - 0.9999).abs() < 1e-4);
}

struct CountingSink;

impl Sink for CountingSink {
    type Output = (Size, usize);

    fn finish(self, size: Size, _resolution: f32, pixels: &[Rgba]) -> Self::Output {
        (size, pixels.len())
    }
}

#[test]
fn custom_sink_receives_every_pixel() {
    let (size, count) = synthesize_into(&params(5, 7, 3), CountingSink);
    assert_eq!(size, Size::new(7, 3));
    assert_eq!(count, 21);
}

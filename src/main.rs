use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::{debug, info};
use thiserror::Error;
use wgpu_julia::{synthesize, ColourMode, Image, Params, PixelFormat};

mod display;
mod uniform;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid parameters: {0}")]
    Params(#[from] wgpu_julia::Error),
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to get gpu adapter")]
    RequestAdapter,
    #[error("failed to get gpu device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface has no supported formats")]
    IncompatibleSurface,
    #[error("{width}x{height} image exceeds the gpu texture limit of {max}, use --output instead")]
    ImageTooLarge { width: u32, height: u32, max: u32 },
    #[error("image buffer does not hold {width}x{height} pixels")]
    BufferSize { width: u32, height: u32 },
    #[error("failed to save image: {0}")]
    Save(#[from] image::ImageError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Rgba,
    Bgra,
}

impl From<Format> for PixelFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Rgba => PixelFormat::Rgba8,
            Format::Bgra => PixelFormat::Bgra8,
        }
    }
}

/// Render a Julia set picked by a 32-bit seed.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Seed, decimal or 0x-prefixed hex.
    #[arg(default_value = "0", value_parser = parse_seed)]
    seed: u32,

    #[arg(long, default_value_t = 512)]
    width: u32,

    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Pixels per logical unit, recorded with the image.
    #[arg(long, default_value_t = 1.0)]
    resolution: f32,

    /// Render in greyscale.
    #[arg(long)]
    grey: bool,

    #[arg(long, value_enum, default_value_t = Format::Rgba)]
    format: Format,

    /// Worker threads. Defaults to the number of CPUs.
    #[arg(long)]
    threads: Option<usize>,

    /// Write a PNG here instead of opening a window.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn parse_seed(arg: &str) -> Result<u32, String> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => arg.parse(),
    };
    parsed.map_err(|err| format!("invalid seed {:?}: {}", arg, err))
}

fn save(rendered: &Image, path: &Path) -> Result<(), AppError> {
    let rgba = rendered.convert(PixelFormat::Rgba8);
    let size = rgba.size();
    let buffer = image::RgbaImage::from_raw(size.width, size.height, rgba.into_bytes()).ok_or(
        AppError::BufferSize {
            width: size.width,
            height: size.height,
        },
    )?;
    buffer.save(path)?;
    info!(
        "wrote {}x{} image at resolution {} to {}",
        size.width,
        size.height,
        rendered.resolution(),
        path.display()
    );
    Ok(())
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let colour_mode = if args.grey {
        ColourMode::Greyscale
    } else {
        ColourMode::Colour
    };
    let params = Params::builder(args.seed)
        .with_size(args.width, args.height)
        .with_resolution(args.resolution)
        .with_colour_mode(colour_mode)
        .with_format(args.format.into())
        .build()?;

    let rendered = synthesize(&params);
    info!("synthesized seed {:#010x} on {} threads", args.seed, threads);

    match args.output {
        Some(path) => save(&rendered, &path),
        None => display::run(rendered, &format!("julia {:#010x}", args.seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_in_decimal_and_hex() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed("0xdeadBEEF"), Ok(0xDEAD_BEEF));
        assert_eq!(parse_seed("0X10"), Ok(16));
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("0x1_0000_0000").is_err());
    }

    #[test]
    fn args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wgpu-julia"]).unwrap();
        assert_eq!(args.seed, 0);
        assert_eq!(args.format, Format::Rgba);
        assert!(args.output.is_none());
    }

    #[test]
    fn save_writes_png() {
        let params = Params::builder(3)
            .with_size(8, 4)
            .with_format(PixelFormat::Bgra8)
            .build()
            .unwrap();
        let path = std::env::temp_dir().join(format!("wgpu-julia-{}.png", std::process::id()));
        save(&synthesize(&params), &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.dimensions(), (8, 4));
        assert_eq!(
            loaded.into_raw(),
            synthesize(&params).convert(PixelFormat::Rgba8).into_bytes()
        );
    }
}

use crate::{
    colour::ColourMode,
    error::{Error, Result},
    image::PixelFormat,
    screen,
};

pub const DEFAULT_SIZE: screen::Size = screen::Size {
    width: 256,
    height: 256,
};

/// Validated inputs for one synthesis call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    seed: u32,
    size: screen::Size,
    resolution: f32,
    colour_mode: ColourMode,
    format: PixelFormat,
}

impl Params {
    pub fn builder(seed: u32) -> Builder {
        Builder::new(seed)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }
}

pub struct Builder {
    seed: u32,
    size: screen::Size,
    resolution: f32,
    colour_mode: ColourMode,
    format: PixelFormat,
}

impl Builder {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            size: DEFAULT_SIZE,
            resolution: 1.0,
            colour_mode: ColourMode::default(),
            format: PixelFormat::default(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = screen::Size::new(width, height);
        self
    }

    pub fn with_resolution(mut self, resolution: f32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_colour_mode(mut self, colour_mode: ColourMode) -> Self {
        self.colour_mode = colour_mode;
        self
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn build(self) -> Result<Params> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(Error::EmptyImage {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(Error::InvalidResolution(self.resolution));
        }

        Ok(Params {
            seed: self.seed,
            size: self.size,
            resolution: self.resolution,
            colour_mode: self.colour_mode,
            format: self.format,
        })
    }
}

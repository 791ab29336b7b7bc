/*!
Output images.

The synthesis pipeline produces plain [`Rgba`] colours. A [`Sink`] turns those
into whatever image representation the caller needs; [`PixelFormat`] is the
built-in sink, packing them into an [`Image`] with a fixed channel order.
*/

use crate::{pixel::Rgba, screen};

/// Packed 8-bit channel layouts, 4 bytes per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PixelFormat {
    #[default]
    Rgba8,
    Bgra8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        4
    }

    /// Channels in the order they appear in memory.
    pub fn channel_order(self) -> [Channel; 4] {
        match self {
            PixelFormat::Rgba8 => [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha],
            PixelFormat::Bgra8 => [Channel::Blue, Channel::Green, Channel::Red, Channel::Alpha],
        }
    }

    pub fn encode(self, pixel: Rgba) -> [u8; 4] {
        match self {
            PixelFormat::Rgba8 => [pixel.r, pixel.g, pixel.b, pixel.a],
            PixelFormat::Bgra8 => [pixel.b, pixel.g, pixel.r, pixel.a],
        }
    }

    pub fn decode(self, bytes: [u8; 4]) -> Rgba {
        match self {
            PixelFormat::Rgba8 => Rgba {
                r: bytes[0],
                g: bytes[1],
                b: bytes[2],
                a: bytes[3],
            },
            PixelFormat::Bgra8 => Rgba {
                r: bytes[2],
                g: bytes[1],
                b: bytes[0],
                a: bytes[3],
            },
        }
    }
}

/// Receives a finished raster.
pub trait Sink {
    type Output;

    /// `pixels` is row-major and holds exactly `size.pixel_count()` entries.
    fn finish(self, size: screen::Size, resolution: f32, pixels: &[Rgba]) -> Self::Output;
}

impl Sink for PixelFormat {
    type Output = Image;

    fn finish(self, size: screen::Size, resolution: f32, pixels: &[Rgba]) -> Image {
        debug_assert_eq!(pixels.len(), size.pixel_count());

        let mut data = Vec::with_capacity(pixels.len() * self.bytes_per_pixel());
        for pixel in pixels {
            data.extend_from_slice(&self.encode(*pixel));
        }

        Image {
            size,
            resolution,
            format: self,
            data,
        }
    }
}

/// A fully populated raster in one [`PixelFormat`].
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    size: screen::Size,
    resolution: f32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Image {
    pub fn size(&self) -> screen::Size {
        self.size
    }

    /// Pixels per logical unit, carried through from the parameters.
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn bytes_per_row(&self) -> usize {
        self.size.width as usize * self.format.bytes_per_pixel()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let bytes_per_pixel = self.format.bytes_per_pixel();
        let offset = y as usize * self.bytes_per_row() + x as usize * bytes_per_pixel;
        let bytes: [u8; 4] = self.data[offset..offset + bytes_per_pixel].try_into().ok()?;
        Some(self.format.decode(bytes))
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data.chunks_exact(self.format.bytes_per_pixel()).map(|chunk| {
            self.format
                .decode([chunk[0], chunk[1], chunk[2], chunk[3]])
        })
    }

    /// Re-pack into another channel order.
    pub fn convert(&self, format: PixelFormat) -> Image {
        let pixels: Vec<Rgba> = self.pixels().collect();
        format.finish(self.size, self.resolution, &pixels)
    }
}

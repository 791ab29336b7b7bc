use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f32,
    pub imaginary: f32,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f32, imaginary: f32) -> Self {
        Self { real, imaginary }
    }

    pub fn norm_sqr(self) -> f32 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// One step of the quadratic map: `self² + c`.
    pub fn square_add(self, c: Complex) -> Self {
        Complex {
            real: self.real * self.real - self.imaginary * self.imaginary + c.real,
            imaginary: 2.0 * self.real * self.imaginary + c.imaginary,
        }
    }
}

/// An 8-bit-per-channel colour, independent of any output channel order.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const OPAQUE: u8 = u8::MAX;

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Self::OPAQUE,
        }
    }
}

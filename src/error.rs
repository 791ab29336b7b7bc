use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("image must have at least one pixel, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error("resolution must be finite and positive, got {0}")]
    InvalidResolution(f32),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrismError {
    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid resolution {n}: must be a power of two between 1 and {max}")]
    InvalidResolution { n: u32, max: u32 },

    #[error("Resolution {n} exceeds the maximum transform size {max}")]
    ResolutionTooLarge { n: u32, max: u32 },

    #[error("Unknown filter type {0} (expected 0..=3)")]
    InvalidFilterType(u32),

    #[error("Invalid filter parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Spectrum buffer is {actual}x{actual}, pipeline expects {expected}x{expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PrismError>;

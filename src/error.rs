//! Error types for mercury-precession.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("step count must be positive, got {0}")]
    InvalidStepCount(usize),

    #[error("body at ({x}, {y}) coincides with the attracting centre")]
    DegenerateRadius { x: f64, y: f64 },

    #[error("base acceleration must be non-negative, got {0}")]
    NegativeBaseAcceleration(f64),

    #[error("unknown preset '{0}', options: newtonian, perihelion, background")]
    UnknownPreset(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, SimError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BallseekError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid frame dimensions: {width}x{height}x{channels}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("Invalid range [{min}, {max}]: min must not exceed max")]
    InvalidRange { min: f64, max: f64 },

    #[error("Contour has no points")]
    EmptyContour,

    #[error("Contour pixel width is zero, distance is undefined")]
    ZeroPixelWidth,

    #[error("Invalid camera calibration: {0}")]
    InvalidCalibration(String),

    #[error("Invalid steering config: {0}")]
    InvalidSteering(String),

    #[error("Frame source error: {0}")]
    Source(String),

    #[error("Actuator error: {0}")]
    Actuator(String),
}

pub type Result<T> = std::result::Result<T, BallseekError>;

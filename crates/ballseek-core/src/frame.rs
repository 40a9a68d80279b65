use image::RgbImage;
use ndarray::Array3;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{BallseekError, Result};

/// A single color camera frame.
/// Pixel values are u8, channels ordered R, G, B.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width, 3)
    pub data: Array3<u8>,
    /// Optional per-frame metadata
    pub metadata: FrameMetadata,
}

impl Frame {
    /// Wrap an RGB array, rejecting empty frames and non-RGB channel counts.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        if height == 0 || width == 0 || channels != COLOR_CHANNEL_COUNT {
            return Err(BallseekError::InvalidDimensions {
                width,
                height,
                channels,
            });
        }
        Ok(Self {
            data,
            metadata: FrameMetadata::default(),
        })
    }

    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        let shape = (h as usize, w as usize, COLOR_CHANNEL_COUNT);
        let data = Array3::from_shape_fn(shape, |(row, col, ch)| {
            img.get_pixel(col as u32, row as u32).0[ch]
        });
        Self::new(data)
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let (row, col) = (y as usize, x as usize);
            image::Rgb([
                self.data[[row, col, 0]],
                self.data[[row, col, 1]],
                self.data[[row, col, 2]],
            ])
        })
    }

    pub fn with_index(mut self, frame_index: usize) -> Self {
        self.metadata.frame_index = frame_index;
        self
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// RGB triple at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    pub frame_index: usize,
}

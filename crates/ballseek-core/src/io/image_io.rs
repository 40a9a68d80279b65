use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;

use crate::error::Result;
use crate::frame::Frame;

/// Extensions [`load_frame`] and the sequence source accept.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Load an image file as an RGB frame. Alpha and extra bit depth are dropped.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path)?.to_rgb8();
    Frame::from_rgb_image(&img)
}

/// Save a frame; the format follows the file extension.
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    frame.to_rgb_image().save(path)?;
    Ok(())
}

/// Save a mask as black/white 8-bit grayscale.
pub fn save_mask(mask: &Array2<bool>, path: &Path) -> Result<()> {
    let (h, w) = mask.dim();
    let img = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([if mask[[y as usize, x as usize]] { 255 } else { 0 }])
    });
    img.save(path)?;
    Ok(())
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

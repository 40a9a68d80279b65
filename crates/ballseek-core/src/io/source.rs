use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BallseekError, Result};
use crate::frame::Frame;

use super::image_io::{is_supported_image, load_frame};

/// Supplier of camera frames.
///
/// `Ok(None)` ends the stream. `Err` means no frame for this tick only; the
/// caller may ask again.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Replays a directory of image files in file-name order.
#[derive(Debug)]
pub struct ImageSequenceSource {
    paths: Vec<PathBuf>,
    cursor: usize,
}

impl ImageSequenceSource {
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(BallseekError::Source(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_supported_image(path))
            .collect();
        paths.sort();
        debug!(dir = %dir.display(), frames = paths.len(), "Image sequence opened");

        Ok(Self { paths, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FrameSource for ImageSequenceSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        let Some(path) = self.paths.get(self.cursor) else {
            return Ok(None);
        };
        let index = self.cursor;
        // Advance first so a bad file is skipped on the next tick.
        self.cursor += 1;
        Ok(Some(load_frame(path)?.with_index(index)))
    }
}

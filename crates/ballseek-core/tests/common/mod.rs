#![allow(dead_code)]

use ballseek_core::detection::{Contour, Point};
use ballseek_core::error::{BallseekError, Result};
use ballseek_core::frame::Frame;
use ballseek_core::io::source::FrameSource;
use ndarray::{Array2, Array3};

/// Saturated orange: HLS (15, 128, 255), inside the default color range.
pub const ORANGE: [u8; 3] = [255, 128, 0];

/// Deep blue background, outside the default color range.
pub const BLUE: [u8; 3] = [20, 60, 200];

/// Frame filled with one color.
pub fn solid_frame(width: usize, height: usize, rgb: [u8; 3]) -> Frame {
    let data = Array3::from_shape_fn((height, width, 3), |(_, _, ch)| rgb[ch]);
    Frame::new(data).expect("valid dimensions")
}

/// Frame with a filled rectangle covering columns `x0..=x1`, rows `y0..=y1`.
pub fn frame_with_rect(
    width: usize,
    height: usize,
    (x0, y0, x1, y1): (usize, usize, usize, usize),
    fg: [u8; 3],
    bg: [u8; 3],
) -> Frame {
    let data = Array3::from_shape_fn((height, width, 3), |(row, col, ch)| {
        if (x0..=x1).contains(&col) && (y0..=y1).contains(&row) {
            fg[ch]
        } else {
            bg[ch]
        }
    });
    Frame::new(data).expect("valid dimensions")
}

/// Frame with a filled disk of `radius` around `(cx, cy)`.
pub fn frame_with_disk(
    width: usize,
    height: usize,
    cx: f32,
    cy: f32,
    radius: f32,
    fg: [u8; 3],
    bg: [u8; 3],
) -> Frame {
    let data = Array3::from_shape_fn((height, width, 3), |(row, col, ch)| {
        let dx = col as f32 - cx;
        let dy = row as f32 - cy;
        if dx * dx + dy * dy <= radius * radius {
            fg[ch]
        } else {
            bg[ch]
        }
    });
    Frame::new(data).expect("valid dimensions")
}

/// Mask with a filled rectangle covering columns `x0..=x1`, rows `y0..=y1`.
pub fn mask_with_rect(
    width: usize,
    height: usize,
    (x0, y0, x1, y1): (usize, usize, usize, usize),
) -> Array2<bool> {
    Array2::from_shape_fn((height, width), |(row, col)| {
        (x0..=x1).contains(&col) && (y0..=y1).contains(&row)
    })
}

/// Closed rectangle contour through the four corners.
pub fn rect_contour(x0: i32, y0: i32, x1: i32, y1: i32) -> Contour {
    contour(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
}

pub fn contour(raw: &[(i32, i32)]) -> Contour {
    Contour::new(raw.iter().map(|&(x, y)| Point::new(x, y)).collect()).expect("non-empty")
}

/// Scripted frame source: each entry is one tick.
pub struct ScriptedSource {
    ticks: std::vec::IntoIter<Option<Frame>>,
}

impl ScriptedSource {
    /// `None` entries fail their tick; the stream ends after the last entry.
    pub fn new(ticks: Vec<Option<Frame>>) -> Self {
        Self {
            ticks: ticks.into_iter(),
        }
    }
}

impl FrameSource for ScriptedSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        match self.ticks.next() {
            Some(Some(frame)) => Ok(Some(frame)),
            Some(None) => Err(BallseekError::Source("camera dropped a frame".into())),
            None => Ok(None),
        }
    }
}

use ndarray::{Array2, ArrayView1, Axis, Zip};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::frame::Frame;

use super::hls::rgb_to_hls;
use super::range::HlsRange;

/// Classify every pixel of `frame` against `range` in HLS space.
///
/// Returns a `(height, width)` mask that is `true` where hue, saturation and
/// luminance all fall inside their intervals. Large frames are classified
/// row-parallel; both paths produce the same mask.
pub fn segment(frame: &Frame, range: &HlsRange) -> Array2<bool> {
    let (h, w) = (frame.height(), frame.width());
    let mut mask = Array2::from_elem((h, w), false);
    let pixels = frame.data.lanes(Axis(2));

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        Zip::from(&mut mask)
            .and(pixels)
            .par_for_each(|inside, px| *inside = classify(px, range));
    } else {
        Zip::from(&mut mask)
            .and(pixels)
            .for_each(|inside, px| *inside = classify(px, range));
    }

    mask
}

fn classify(px: ArrayView1<'_, u8>, range: &HlsRange) -> bool {
    range.contains(rgb_to_hls([px[0], px[1], px[2]]))
}

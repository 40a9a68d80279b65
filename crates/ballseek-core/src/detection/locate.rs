use tracing::debug;

use super::contours::Contour;

/// The selected ball candidate and where it sits horizontally.
#[derive(Clone, Debug, PartialEq)]
pub struct BallLocation {
    /// Index of the selected contour in the filtered sequence.
    pub index: usize,
    /// The selected (largest-area) contour.
    pub contour: Contour,
    /// Polygon area of the selected contour.
    pub area: f64,
    /// Normalized offset in [-1, 1]: negative = left of center, positive = right.
    pub offset: f64,
}

/// Pick the largest-area contour and measure its horizontal offset.
///
/// Ties keep the first contour encountered. Returns `None` when there are no
/// contours or the frame has no width.
pub fn locate(contours: &[Contour], frame_width: usize) -> Option<BallLocation> {
    if frame_width == 0 {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, contour) in contours.iter().enumerate() {
        let area = contour.area();
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((index, area)),
        }
    }

    let (index, area) = best?;
    let contour = contours[index].clone();
    let offset = horizontal_offset(&contour, frame_width);
    debug!(index, area, offset, "Ball located");

    Some(BallLocation {
        index,
        contour,
        area,
        offset,
    })
}

/// Midpoint of the contour's x-extent relative to the frame's vertical
/// centerline, normalized by half the frame width.
///
/// This is the extent midpoint, not the centroid: one stray boundary point
/// moves it.
pub fn horizontal_offset(contour: &Contour, frame_width: usize) -> f64 {
    let middle = frame_width as f64 / 2.0;
    let (min_x, max_x) = contour.x_extent();
    let span = (max_x as f64 - middle) + (min_x as f64 - middle);
    span / (2.0 * middle)
}

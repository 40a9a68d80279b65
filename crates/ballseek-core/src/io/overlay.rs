use crate::detection::{Contour, Point};
use crate::frame::Frame;

/// Copy `frame` and paint the closed polyline of `contour` in `color`.
///
/// Edges are walked one pixel at a time between successive vertices;
/// pixels outside the frame are skipped.
pub fn draw_contour(frame: &Frame, contour: &Contour, color: [u8; 3]) -> Frame {
    let mut out = frame.clone();
    let points = contour.points();
    let n = points.len();

    for i in 0..n {
        let mut p = points[i];
        let end = points[(i + 1) % n];
        put(&mut out, p, color);
        while p != end {
            p.x += end.x.cmp(&p.x) as i32;
            p.y += end.y.cmp(&p.y) as i32;
            put(&mut out, p, color);
        }
    }

    out
}

fn put(frame: &mut Frame, p: Point, color: [u8; 3]) {
    if p.x < 0 || p.y < 0 {
        return;
    }
    let (row, col) = (p.y as usize, p.x as usize);
    if row >= frame.height() || col >= frame.width() {
        return;
    }
    for (ch, &v) in color.iter().enumerate() {
        frame.data[[row, col, ch]] = v;
    }
}

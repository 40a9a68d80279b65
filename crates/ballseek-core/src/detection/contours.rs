use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use ndarray::Array2;

use crate::error::{BallseekError, Result};

use super::geometry::{self, BoundingBox};

/// Integer pixel coordinate: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A closed pixel boundary, stored as its ordered vertices.
///
/// Always holds at least one point. Area, perimeter, bounding box and hull
/// are derived on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(BallseekError::EmptyContour);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn area(&self) -> f64 {
        geometry::polygon_area(&self.points)
    }

    pub fn perimeter(&self) -> f64 {
        geometry::perimeter(&self.points)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        geometry::bounding_box(&self.points)
    }

    pub fn convex_hull(&self) -> Vec<Point> {
        geometry::convex_hull(&self.points)
    }

    /// Smallest and largest x over all points.
    pub fn x_extent(&self) -> (i32, i32) {
        self.points
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)))
    }
}

/// Trace the borders of the `true` regions of `mask`.
///
/// With `external_only` only the outermost border of each region is kept and
/// holes are dropped; otherwise outer and hole borders are all returned.
/// Every border is chain-compressed so straight runs keep only their end
/// points. Output follows raster discovery order, which is stable for a given
/// mask.
pub fn extract_contours(mask: &Array2<bool>, external_only: bool) -> Vec<Contour> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let img = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([if mask[[y as usize, x as usize]] { 255 } else { 0 }])
    });

    find_contours::<i32>(&img)
        .into_iter()
        .filter(|traced| {
            !external_only
                || (matches!(traced.border_type, BorderType::Outer) && traced.parent.is_none())
        })
        .filter_map(|traced| {
            let points = traced.points.iter().map(|p| Point::new(p.x, p.y)).collect();
            Contour::new(compress_chain(points)).ok()
        })
        .collect()
}

/// Drop every point whose incoming and outgoing steps point the same way,
/// keeping only the end points of horizontal, vertical and diagonal runs.
pub(crate) fn compress_chain(points: Vec<Point>) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points;
    }

    let step = |a: Point, b: Point| (b.x.cmp(&a.x), b.y.cmp(&a.y));
    let kept: Vec<Point> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        vec![points[0]]
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_compress_square_ring() {
        let mut ring = Vec::new();
        for x in 0..4 {
            ring.push((x, 0));
        }
        for y in 1..4 {
            ring.push((3, y));
        }
        for x in (0..3).rev() {
            ring.push((x, 3));
        }
        for y in (1..3).rev() {
            ring.push((0, y));
        }
        let compressed = compress_chain(pts(&ring));
        assert_eq!(compressed, pts(&[(0, 0), (3, 0), (3, 3), (0, 3)]));
    }

    #[test]
    fn test_compress_back_and_forth_line() {
        let line = pts(&[(0, 0), (1, 0), (2, 0), (1, 0)]);
        assert_eq!(compress_chain(line), pts(&[(0, 0), (2, 0)]));
    }

    #[test]
    fn test_compress_at_coordinate_limits() {
        let edge = pts(&[(i32::MIN, 0), (0, 0), (i32::MAX, 0), (0, 1)]);
        assert_eq!(
            compress_chain(edge),
            pts(&[(i32::MIN, 0), (i32::MAX, 0), (0, 1)])
        );
    }

    #[test]
    fn test_compress_short_chain_untouched() {
        let two = pts(&[(5, 5), (6, 6)]);
        assert_eq!(compress_chain(two.clone()), two);
    }

    #[test]
    fn test_empty_contour_rejected() {
        assert!(matches!(Contour::new(vec![]), Err(BallseekError::EmptyContour)));
    }
}
